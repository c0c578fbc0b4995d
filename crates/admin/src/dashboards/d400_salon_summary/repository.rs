//! Paquetes de cifras pre-calculados por periodo
//!
//! Cada periodo tiene su paquete completo; el cambio de periodo entrega
//! otro paquete entero, nunca una mezcla parcial.

use contracts::dashboards::d400_salon_summary::{Period, PeriodStats, ServiceRevenue};
use once_cell::sync::Lazy;

fn top(name: &str, revenue: f64) -> ServiceRevenue {
    ServiceRevenue {
        name: name.into(),
        revenue,
    }
}

static TODAY: Lazy<PeriodStats> = Lazy::new(|| PeriodStats {
    service_revenue: 485_000.0,
    product_revenue: 95_000.0,
    appointments_total: 9,
    appointments_completed: 6,
    appointments_cancelled: 1,
    new_clients: 2,
    top_services: vec![
        top("Corte clásico", 150_000.0),
        top("Tinte raíz", 180_000.0),
        top("Manicure semipermanente", 110_000.0),
    ],
});

static WEEK: Lazy<PeriodStats> = Lazy::new(|| PeriodStats {
    service_revenue: 2_840_000.0,
    product_revenue: 610_000.0,
    appointments_total: 47,
    appointments_completed: 38,
    appointments_cancelled: 5,
    new_clients: 9,
    top_services: vec![
        top("Balayage", 720_000.0),
        top("Keratina", 600_000.0),
        top("Corte y cepillado", 520_000.0),
        top("Manicure tradicional", 360_000.0),
    ],
});

static MONTH: Lazy<PeriodStats> = Lazy::new(|| PeriodStats {
    service_revenue: 11_250_000.0,
    product_revenue: 2_380_000.0,
    appointments_total: 186,
    appointments_completed: 152,
    appointments_cancelled: 21,
    new_clients: 31,
    top_services: vec![
        top("Balayage", 2_880_000.0),
        top("Keratina", 2_250_000.0),
        top("Tinte raíz", 1_980_000.0),
        top("Corte clásico", 1_450_000.0),
        top("Peinado de fiesta", 980_000.0),
    ],
});

/// Paquete completo del periodo
pub fn stats_for(period: Period) -> PeriodStats {
    match period {
        Period::Today => TODAY.clone(),
        Period::Week => WEEK.clone(),
        Period::Month => MONTH.clone(),
    }
}
