use crate::shared::error::FieldErrors;
use contracts::domain::a010_supply::SupplyDto;
use contracts::shared::metadata::ValidationRules;

const NAME_RULES: ValidationRules = ValidationRules::required().with_max_length(80);
const UNIT_RULES: ValidationRules = ValidationRules::required().with_max_length(12);

/// Validación del borrador de insumo
pub fn validate(dto: &SupplyDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Err(msg) = NAME_RULES.validate_string(&dto.name, "El nombre") {
        errors.insert("name", msg);
    }
    if dto.category.is_none() {
        errors.insert("category", "Seleccione una categoría".into());
    }
    if let Err(msg) = UNIT_RULES.validate_string(&dto.unit, "La unidad") {
        errors.insert("unit", msg);
    }

    errors
}
