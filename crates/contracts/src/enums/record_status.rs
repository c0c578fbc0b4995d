use serde::{Deserialize, Serialize};

/// Estado de vida de los registros de catálogo (usuarios, clientes,
/// servicios, proveedores, insumos)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Activo",
            RecordStatus::Inactive => "Inactivo",
        }
    }

    pub fn all() -> Vec<RecordStatus> {
        vec![RecordStatus::Active, RecordStatus::Inactive]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(RecordStatus::Active),
            "inactive" => Some(RecordStatus::Inactive),
            _ => None,
        }
    }

    /// Estado contrario; es la transición del interruptor activar/desactivar
    pub fn toggled(&self) -> Self {
        match self {
            RecordStatus::Active => RecordStatus::Inactive,
            RecordStatus::Inactive => RecordStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_is_involutive() {
        for status in RecordStatus::all() {
            assert_eq!(status.toggled().toggled(), status);
        }
    }

    #[test]
    fn test_from_code_roundtrip() {
        for status in RecordStatus::all() {
            assert_eq!(RecordStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(RecordStatus::from_code("archived"), None);
    }
}
