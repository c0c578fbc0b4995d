use crate::shared::error::FieldErrors;
use contracts::domain::a009_supplier::SupplierDto;
use contracts::shared::metadata::ValidationRules;

const NAME_RULES: ValidationRules = ValidationRules::required().with_max_length(80);
const NIT_RULES: ValidationRules = ValidationRules::required().with_max_length(20);

/// Validación del borrador de proveedor
pub fn validate(dto: &SupplierDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Err(msg) = NAME_RULES.validate_string(&dto.name, "La razón social") {
        errors.insert("name", msg);
    }
    if let Err(msg) = NIT_RULES.validate_string(&dto.nit, "El NIT") {
        errors.insert("nit", msg);
    }
    if !dto.email.trim().is_empty() && !dto.email.contains('@') {
        errors.insert("email", "El correo no es válido".into());
    }

    errors
}
