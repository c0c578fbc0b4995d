use serde::{Deserialize, Serialize};

/// Estados de una cita
///
/// La escalera normal es pendiente → confirmada → en curso → completada.
/// Cancelada y no asistió son ramas laterales alcanzables desde cualquier
/// estado no terminal. Completada, cancelada y no asistió son terminales:
/// el registro ya no admite ediciones ni más cambios de estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::InProgress => "in_progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no_show",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pendiente",
            AppointmentStatus::Confirmed => "Confirmada",
            AppointmentStatus::InProgress => "En curso",
            AppointmentStatus::Completed => "Completada",
            AppointmentStatus::Cancelled => "Cancelada",
            AppointmentStatus::NoShow => "No asistió",
        }
    }

    pub fn all() -> Vec<AppointmentStatus> {
        vec![
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::InProgress,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::NoShow,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(AppointmentStatus::Pending),
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "in_progress" => Some(AppointmentStatus::InProgress),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            "no_show" => Some(AppointmentStatus::NoShow),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled | AppointmentStatus::NoShow
        )
    }

    /// Tabla de transiciones
    pub fn can_transition(&self, next: AppointmentStatus) -> bool {
        if self.is_terminal() || next == *self {
            return false;
        }
        match next {
            // ramas laterales desde cualquier estado no terminal
            AppointmentStatus::Cancelled | AppointmentStatus::NoShow => true,
            AppointmentStatus::Confirmed => matches!(self, AppointmentStatus::Pending),
            AppointmentStatus::InProgress => matches!(self, AppointmentStatus::Confirmed),
            AppointmentStatus::Completed => matches!(self, AppointmentStatus::InProgress),
            AppointmentStatus::Pending => false,
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder() {
        assert!(AppointmentStatus::Pending.can_transition(AppointmentStatus::Confirmed));
        assert!(AppointmentStatus::Confirmed.can_transition(AppointmentStatus::InProgress));
        assert!(AppointmentStatus::InProgress.can_transition(AppointmentStatus::Completed));
        // sin saltos en la escalera
        assert!(!AppointmentStatus::Pending.can_transition(AppointmentStatus::InProgress));
        assert!(!AppointmentStatus::Pending.can_transition(AppointmentStatus::Completed));
        assert!(!AppointmentStatus::Confirmed.can_transition(AppointmentStatus::Completed));
    }

    #[test]
    fn test_side_branches_from_non_terminal() {
        for status in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::InProgress,
        ] {
            assert!(status.can_transition(AppointmentStatus::Cancelled));
            assert!(status.can_transition(AppointmentStatus::NoShow));
        }
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        for terminal in [
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::NoShow,
        ] {
            assert!(terminal.is_terminal());
            for next in AppointmentStatus::all() {
                assert!(!terminal.can_transition(next));
            }
        }
    }

    #[test]
    fn test_nothing_returns_to_pending() {
        for status in AppointmentStatus::all() {
            assert!(!status.can_transition(AppointmentStatus::Pending));
        }
    }
}
