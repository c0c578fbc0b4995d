use serde::{Deserialize, Serialize};

/// Estados de una venta
///
/// Las ventas nacen completadas; la única transición posible es la
/// devolución. Una venta devuelta es terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Completed,
    Refunded,
}

impl SaleStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "completed",
            SaleStatus::Refunded => "refunded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "Completada",
            SaleStatus::Refunded => "Devuelta",
        }
    }

    pub fn all() -> Vec<SaleStatus> {
        vec![SaleStatus::Completed, SaleStatus::Refunded]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" => Some(SaleStatus::Completed),
            "refunded" => Some(SaleStatus::Refunded),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SaleStatus::Refunded)
    }

    pub fn can_transition(&self, next: SaleStatus) -> bool {
        matches!((self, next), (SaleStatus::Completed, SaleStatus::Refunded))
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
