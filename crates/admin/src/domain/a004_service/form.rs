use crate::shared::error::FieldErrors;
use contracts::domain::a004_service::ServiceDto;
use contracts::shared::metadata::ValidationRules;

const NAME_RULES: ValidationRules = ValidationRules::required().with_max_length(80);
const PRICE_RULES: ValidationRules = ValidationRules::positive();

/// Validación del borrador de servicio
pub fn validate(dto: &ServiceDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Err(msg) = NAME_RULES.validate_string(&dto.name, "El nombre") {
        errors.insert("name", msg);
    }
    if dto.category.is_none() {
        errors.insert("category", "Seleccione una categoría".into());
    }
    if let Err(msg) = PRICE_RULES.validate_number(dto.price, "El precio") {
        errors.insert("price", msg);
    }
    if dto.duration_minutes == 0 {
        errors.insert("durationMinutes", "La duración debe ser mayor que cero".into());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ServiceCategory;

    #[test]
    fn test_positive_checks() {
        let dto = ServiceDto {
            name: "Corte".into(),
            category: Some(ServiceCategory::Corte),
            price: -500.0,
            duration_minutes: 0,
            ..ServiceDto::default()
        };
        let errors = validate(&dto);
        assert!(errors.contains_key("price"));
        assert!(errors.contains_key("durationMinutes"));
        assert!(!errors.contains_key("name"));
    }
}
