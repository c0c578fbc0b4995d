use serde::{Deserialize, Serialize};

/// Periodo seleccionado en el dashboard
///
/// Cambiar de periodo intercambia el paquete de cifras completo; nunca se
/// mezclan cifras de periodos distintos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    Week,
    Month,
}

impl Period {
    pub fn code(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Period::Today => "Hoy",
            Period::Week => "Esta semana",
            Period::Month => "Este mes",
        }
    }

    pub fn all() -> Vec<Period> {
        vec![Period::Today, Period::Week, Period::Month]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "today" => Some(Period::Today),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            _ => None,
        }
    }
}

/// Request for the salon summary dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonSummaryRequest {
    /// Period code ("today", "week", "month")
    pub period: String,
}

/// Revenue of one service inside a period bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRevenue {
    pub name: String,
    pub revenue: f64,
}

/// Pre-baked statistic bundle for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Revenue from services
    #[serde(rename = "serviceRevenue")]
    pub service_revenue: f64,
    /// Revenue from product sales
    #[serde(rename = "productRevenue")]
    pub product_revenue: f64,
    #[serde(rename = "appointmentsTotal")]
    pub appointments_total: u32,
    #[serde(rename = "appointmentsCompleted")]
    pub appointments_completed: u32,
    #[serde(rename = "appointmentsCancelled")]
    pub appointments_cancelled: u32,
    #[serde(rename = "newClients")]
    pub new_clients: u32,
    /// Top services by revenue inside the period
    #[serde(rename = "topServices")]
    pub top_services: Vec<ServiceRevenue>,
}

/// One row of a percentage breakdown; percentages across a breakdown sum
/// to 100 within rounding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub label: String,
    pub value: f64,
    pub percent: f64,
}

/// Appointment counters for the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentCounters {
    pub total: u32,
    pub completed: u32,
    pub cancelled: u32,
    /// completed / total, as a percentage
    #[serde(rename = "completionRate")]
    pub completion_rate: f64,
}

/// Response for the salon summary dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalonSummaryResponse {
    /// Period code ("today", "week", "month")
    pub period: String,
    #[serde(rename = "revenueTotal")]
    pub revenue_total: f64,
    /// Service vs product revenue share
    #[serde(rename = "revenueBreakdown")]
    pub revenue_breakdown: Vec<BreakdownRow>,
    /// Revenue share of the period's top services
    #[serde(rename = "topServices")]
    pub top_services: Vec<BreakdownRow>,
    pub appointments: AppointmentCounters,
    #[serde(rename = "newClients")]
    pub new_clients: u32,
}
