use serde::{Deserialize, Serialize};

/// Metadatos del ciclo de vida de un registro
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Fecha de creación del registro
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Fecha de la última modificación
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Registro centinela (p. ej. el rol administrador): rechaza
    /// operaciones destructivas y cambios de estado
    pub is_protected: bool,
}

impl EntityMetadata {
    /// Metadatos para un registro recién creado
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_protected: false,
        }
    }

    /// Metadatos para un registro centinela
    pub fn protected() -> Self {
        Self {
            is_protected: true,
            ..Self::new()
        }
    }

    /// Actualizar el timestamp de modificación
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
