use super::repository;
use anyhow::{anyhow, Result};
use contracts::dashboards::d400_salon_summary::{
    AppointmentCounters, BreakdownRow, Period, SalonSummaryRequest, SalonSummaryResponse,
};

/// Resumen del salón para el periodo pedido por código
pub fn salon_summary(request: &SalonSummaryRequest) -> Result<SalonSummaryResponse> {
    let period = Period::from_code(&request.period)
        .ok_or_else(|| anyhow!("Periodo desconocido: {}", request.period))?;
    Ok(summary(period))
}

/// Resumen del salón: un solo paquete por periodo más sus desgloses
pub fn summary(period: Period) -> SalonSummaryResponse {
    let stats = repository::stats_for(period);

    let revenue_total = stats.service_revenue + stats.product_revenue;
    let revenue_breakdown = build_breakdown(&[
        ("Servicios".to_string(), stats.service_revenue),
        ("Productos".to_string(), stats.product_revenue),
    ]);

    let top_entries: Vec<(String, f64)> = stats
        .top_services
        .iter()
        .map(|s| (s.name.clone(), s.revenue))
        .collect();
    let top_services = build_breakdown(&top_entries);

    let completion_rate = if stats.appointments_total > 0 {
        round2(f64::from(stats.appointments_completed) / f64::from(stats.appointments_total) * 100.0)
    } else {
        0.0
    };

    SalonSummaryResponse {
        period: period.code().to_string(),
        revenue_total,
        revenue_breakdown,
        top_services,
        appointments: AppointmentCounters {
            total: stats.appointments_total,
            completed: stats.appointments_completed,
            cancelled: stats.appointments_cancelled,
            completion_rate,
        },
        new_clients: stats.new_clients,
    }
}

/// Filas de desglose con su porcentaje sobre el total de las entradas
fn build_breakdown(entries: &[(String, f64)]) -> Vec<BreakdownRow> {
    let total: f64 = entries.iter().map(|(_, value)| value).sum();
    entries
        .iter()
        .map(|(label, value)| BreakdownRow {
            label: label.clone(),
            value: *value,
            percent: if total > 0.0 {
                round2(value / total * 100.0)
            } else {
                0.0
            },
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_sum(rows: &[BreakdownRow]) -> f64 {
        rows.iter().map(|r| r.percent).sum()
    }

    #[test]
    fn test_breakdowns_sum_to_one_hundred() {
        for period in Period::all() {
            let response = summary(period);
            assert!((percent_sum(&response.revenue_breakdown) - 100.0).abs() < 0.05);
            assert!((percent_sum(&response.top_services) - 100.0).abs() < 0.05);
        }
    }

    #[test]
    fn test_period_swap_is_atomic() {
        let today = summary(Period::Today);
        let month = summary(Period::Month);
        assert_eq!(today.period, "today");
        assert_eq!(month.period, "month");
        // paquetes completos y distintos, sin mezclas
        assert_ne!(today.revenue_total, month.revenue_total);
        assert_ne!(today.appointments.total, month.appointments.total);
    }

    #[test]
    fn test_revenue_total_is_service_plus_product() {
        let response = summary(Period::Week);
        let parts: f64 = response.revenue_breakdown.iter().map(|r| r.value).sum();
        assert_eq!(response.revenue_total, parts);
    }

    #[test]
    fn test_unknown_period_code_is_an_error() {
        let err = salon_summary(&SalonSummaryRequest {
            period: "quarter".into(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("quarter"));
    }

    #[test]
    fn test_completion_rate() {
        let response = summary(Period::Today);
        assert!((response.appointments.completion_rate - 66.67).abs() < 0.01);
    }
}
