use crate::shared::error::FieldErrors;
use contracts::domain::a002_role::RoleDto;
use contracts::system::auth::permissions;

/// Validación del borrador de rol
pub fn validate(dto: &RoleDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if dto.name.trim().is_empty() {
        errors.insert("name", "El nombre del rol es obligatorio".into());
    }
    if dto.permissions.is_empty() {
        errors.insert("permissions", "Otorgue al menos un permiso".into());
    } else if let Some(unknown) = dto
        .permissions
        .iter()
        .find(|p| !permissions::all().contains(&p.as_str()))
    {
        errors.insert("permissions", format!("Permiso desconocido: {}", unknown));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_permission_key() {
        let dto = RoleDto {
            name: "Recepción".into(),
            permissions: vec!["citas".into(), "inventario-general".into()],
            ..RoleDto::default()
        };
        let errors = validate(&dto);
        assert!(errors
            .get("permissions")
            .is_some_and(|msg| msg.contains("inventario-general")));
    }

    #[test]
    fn test_known_permissions_pass() {
        let dto = RoleDto {
            name: "Recepción".into(),
            permissions: vec!["citas".into(), "clientes".into()],
            ..RoleDto::default()
        };
        assert!(validate(&dto).is_empty());
    }
}
