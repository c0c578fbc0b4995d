use chrono::NaiveDate;
use contracts::domain::a011_delivery::{Delivery, DeliveryDto};
use contracts::enums::DeliveryStatus;
use once_cell::sync::Lazy;

fn build(
    seq: u32,
    supply: u32,
    supplier: u32,
    quantity: u32,
    date: (i32, u32, u32),
    status: DeliveryStatus,
) -> Delivery {
    let mut delivery = Delivery::new_for_insert(
        seq,
        &DeliveryDto {
            supply_id: Some(supply),
            supplier_id: Some(supplier),
            quantity,
            expected_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            ..DeliveryDto::default()
        },
    );
    delivery.status = status;
    delivery
}

static DELIVERIES: Lazy<Vec<Delivery>> = Lazy::new(|| {
    vec![
        build(1, 1, 1, 12, (2025, 3, 5), DeliveryStatus::Completed),
        build(2, 4, 2, 30, (2025, 3, 12), DeliveryStatus::Completed),
        build(3, 6, 3, 24, (2025, 3, 18), DeliveryStatus::Cancelled),
        build(4, 2, 1, 12, (2025, 3, 21), DeliveryStatus::Pending),
    ]
});

/// Entregas de ejemplo cargadas al iniciar el módulo
pub fn seed() -> Vec<Delivery> {
    DELIVERIES.clone()
}
