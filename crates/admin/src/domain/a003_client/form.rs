use crate::shared::error::FieldErrors;
use contracts::domain::a003_client::ClientDto;
use contracts::shared::metadata::ValidationRules;

const NAME_RULES: ValidationRules = ValidationRules::required().with_max_length(60);
const DOCUMENT_RULES: ValidationRules = ValidationRules::required().with_max_length(20);

/// Validación del borrador de cliente
pub fn validate(dto: &ClientDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Err(msg) = NAME_RULES.validate_string(&dto.first_name, "El nombre") {
        errors.insert("firstName", msg);
    }
    if let Err(msg) = NAME_RULES.validate_string(&dto.last_name, "El apellido") {
        errors.insert("lastName", msg);
    }
    if let Err(msg) = DOCUMENT_RULES.validate_string(&dto.document_id, "El documento") {
        errors.insert("documentId", msg);
    }
    if !dto.email.trim().is_empty() && !dto.email.contains('@') {
        errors.insert("email", "El correo no es válido".into());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let errors = validate(&ClientDto::default());
        assert!(errors.contains_key("firstName"));
        assert!(errors.contains_key("lastName"));
        assert!(errors.contains_key("documentId"));
        // el correo es opcional para clientes
        assert!(!errors.contains_key("email"));
    }

    #[test]
    fn test_malformed_optional_email() {
        let dto = ClientDto {
            first_name: "Sofía".into(),
            last_name: "Cardona".into(),
            document_id: "1020304050".into(),
            email: "sin-arroba".into(),
            ..ClientDto::default()
        };
        let errors = validate(&dto);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("email"));
    }
}
