use serde::{Deserialize, Serialize};

/// Estados de una compra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Approved,
    Cancelled,
}

impl PurchaseStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PurchaseStatus::Approved => "approved",
            PurchaseStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PurchaseStatus::Approved => "Aprobada",
            PurchaseStatus::Cancelled => "Anulada",
        }
    }

    pub fn all() -> Vec<PurchaseStatus> {
        vec![PurchaseStatus::Approved, PurchaseStatus::Cancelled]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(PurchaseStatus::Approved),
            "cancelled" => Some(PurchaseStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PurchaseStatus::Cancelled)
    }

    pub fn can_transition(&self, next: PurchaseStatus) -> bool {
        matches!(
            (self, next),
            (PurchaseStatus::Approved, PurchaseStatus::Cancelled)
        )
    }
}

impl std::fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_cancellation_is_reachable() {
        assert!(PurchaseStatus::Approved.can_transition(PurchaseStatus::Cancelled));
        assert!(!PurchaseStatus::Cancelled.can_transition(PurchaseStatus::Approved));
        assert!(PurchaseStatus::Cancelled.is_terminal());
        assert!(!PurchaseStatus::Approved.is_terminal());
    }
}
