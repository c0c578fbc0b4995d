use serde::{Deserialize, Serialize};

/// Categorías del inventario de insumos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyCategory {
    Capilar,
    Coloracion,
    Unas,
    Herramientas,
    Desechables,
}

impl SupplyCategory {
    pub fn code(&self) -> &'static str {
        match self {
            SupplyCategory::Capilar => "capilar",
            SupplyCategory::Coloracion => "coloracion",
            SupplyCategory::Unas => "unas",
            SupplyCategory::Herramientas => "herramientas",
            SupplyCategory::Desechables => "desechables",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SupplyCategory::Capilar => "Cuidado capilar",
            SupplyCategory::Coloracion => "Coloración",
            SupplyCategory::Unas => "Uñas",
            SupplyCategory::Herramientas => "Herramientas",
            SupplyCategory::Desechables => "Desechables",
        }
    }

    pub fn all() -> Vec<SupplyCategory> {
        vec![
            SupplyCategory::Capilar,
            SupplyCategory::Coloracion,
            SupplyCategory::Unas,
            SupplyCategory::Herramientas,
            SupplyCategory::Desechables,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "capilar" => Some(SupplyCategory::Capilar),
            "coloracion" => Some(SupplyCategory::Coloracion),
            "unas" => Some(SupplyCategory::Unas),
            "herramientas" => Some(SupplyCategory::Herramientas),
            "desechables" => Some(SupplyCategory::Desechables),
            _ => None,
        }
    }
}

impl std::fmt::Display for SupplyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
