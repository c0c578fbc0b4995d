use crate::shared::error::FieldErrors;
use contracts::domain::a001_user::UserDto;
use contracts::domain::a002_role::Role;

/// Validación del borrador de usuario
///
/// La instantánea de roles la aporta el llamador; el formulario no lee
/// ninguna colección por su cuenta.
pub fn validate(dto: &UserDto, roles: &[Role]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if dto.first_name.trim().is_empty() {
        errors.insert("firstName", "El nombre es obligatorio".into());
    }
    if dto.last_name.trim().is_empty() {
        errors.insert("lastName", "El apellido es obligatorio".into());
    }
    if dto.email.trim().is_empty() {
        errors.insert("email", "El correo es obligatorio".into());
    } else if !dto.email.contains('@') {
        errors.insert("email", "El correo no es válido".into());
    }

    match dto.role_id {
        None => {
            errors.insert("roleId", "Seleccione un rol".into());
        }
        Some(role_id) => {
            if !roles.iter().any(|r| r.base.id.value() == role_id) {
                errors.insert("roleId", "El rol seleccionado no existe".into());
            }
        }
    }

    errors
}
