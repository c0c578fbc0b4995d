use std::collections::BTreeMap;
use thiserror::Error;

/// Mapa de errores de validación por campo
///
/// La clave "base" agrupa los errores del registro completo que no
/// pertenecen a un campo concreto.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Mutación rechazada por el núcleo de listas
///
/// Ninguna variante es fatal: la colección queda intacta y el mensaje se
/// muestra como aviso descartable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error("{entity} {id} no existe")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} {id} es un registro protegido")]
    Protected { entity: &'static str, id: String },

    #[error("{entity} {id} está en estado terminal ({status}) y no admite cambios")]
    Terminal {
        entity: &'static str,
        id: String,
        status: &'static str,
    },

    #[error("la sesión no tiene el permiso \"{permission}\"")]
    Forbidden { permission: &'static str },

    #[error("el registro tiene errores de validación")]
    Validation(FieldErrors),
}

impl MutationError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn protected(entity: &'static str, id: impl Into<String>) -> Self {
        Self::Protected {
            entity,
            id: id.into(),
        }
    }

    pub fn terminal(entity: &'static str, id: impl Into<String>, status: &'static str) -> Self {
        Self::Terminal {
            entity,
            id: id.into(),
            status,
        }
    }

    pub fn forbidden(permission: &'static str) -> Self {
        Self::Forbidden { permission }
    }

    /// Error de validación del registro completo (clave "base")
    pub fn invalid(message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert("base", message.into());
        Self::Validation(errors)
    }
}
