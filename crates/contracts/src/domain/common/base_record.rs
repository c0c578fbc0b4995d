use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Registro base con los campos obligatorios de todos los agregados
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRecord<Id> {
    /// Identificador único del registro
    pub id: Id,
    /// Código de negocio (por ejemplo "VNT-004", "CLT-012")
    pub code: String,
    /// Nombre para mostrar; denormalizado, se recalcula al guardar
    pub description: String,
    /// Comentario libre
    pub comment: Option<String>,
    /// Metadatos del ciclo de vida
    pub metadata: EntityMetadata,
}

impl<Id> BaseRecord<Id> {
    /// Crear un registro base nuevo
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Actualizar el timestamp de modificación
    pub fn touch(&mut self) {
        self.metadata.touch();
    }

    /// Establecer el comentario
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}
