use chrono::NaiveDate;
use contracts::domain::a008_purchase::{Purchase, PurchaseDto, PurchaseLineDto};
use contracts::enums::PurchaseStatus;
use once_cell::sync::Lazy;

fn line(supply: u32, description: &str, quantity: u32, unit_cost: f64) -> PurchaseLineDto {
    PurchaseLineDto {
        supply_id: Some(supply),
        description: description.into(),
        quantity,
        unit_cost,
    }
}

fn build(seq: u32, supplier: u32, date: (i32, u32, u32), lines: Vec<PurchaseLineDto>) -> Purchase {
    Purchase::new_for_insert(
        seq,
        &PurchaseDto {
            supplier_id: Some(supplier),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            lines,
            ..PurchaseDto::default()
        },
    )
}

static PURCHASES: Lazy<Vec<Purchase>> = Lazy::new(|| {
    let mut purchases = vec![
        build(
            1,
            1,
            (2025, 3, 3),
            vec![
                line(1, "Shampoo profesional 1L", 12, 28_000.0),
                line(2, "Acondicionador 1L", 12, 26_000.0),
            ],
        ),
        build(
            2,
            2,
            (2025, 3, 7),
            vec![line(4, "Tinte tubo 60ml", 30, 18_000.0)],
        ),
        build(
            3,
            3,
            (2025, 3, 11),
            vec![line(6, "Esmalte semipermanente", 24, 9_500.0)],
        ),
    ];
    // la compra 2 quedó anulada
    purchases[1].status = PurchaseStatus::Cancelled;
    purchases
});

/// Compras de ejemplo cargadas al iniciar el módulo
pub fn seed() -> Vec<Purchase> {
    PURCHASES.clone()
}
