use serde::{Deserialize, Serialize};

/// Categorías del catálogo de servicios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Corte,
    Color,
    Manicure,
    Tratamiento,
    Peinado,
}

impl ServiceCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceCategory::Corte => "corte",
            ServiceCategory::Color => "color",
            ServiceCategory::Manicure => "manicure",
            ServiceCategory::Tratamiento => "tratamiento",
            ServiceCategory::Peinado => "peinado",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::Corte => "Corte",
            ServiceCategory::Color => "Color",
            ServiceCategory::Manicure => "Manicure",
            ServiceCategory::Tratamiento => "Tratamiento",
            ServiceCategory::Peinado => "Peinado",
        }
    }

    pub fn all() -> Vec<ServiceCategory> {
        vec![
            ServiceCategory::Corte,
            ServiceCategory::Color,
            ServiceCategory::Manicure,
            ServiceCategory::Tratamiento,
            ServiceCategory::Peinado,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "corte" => Some(ServiceCategory::Corte),
            "color" => Some(ServiceCategory::Color),
            "manicure" => Some(ServiceCategory::Manicure),
            "tratamiento" => Some(ServiceCategory::Tratamiento),
            "peinado" => Some(ServiceCategory::Peinado),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
