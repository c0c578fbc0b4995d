use chrono::NaiveDate;
use contracts::domain::a007_sale::{Sale, SaleDto, SaleLineDto};
use contracts::enums::{PaymentMethod, SaleStatus};
use once_cell::sync::Lazy;

fn line(service: u32, description: &str, quantity: u32, unit_price: f64) -> SaleLineDto {
    SaleLineDto {
        service_id: Some(service),
        description: description.into(),
        quantity,
        unit_price,
    }
}

fn build(
    seq: u32,
    client: u32,
    date: (i32, u32, u32),
    payment: PaymentMethod,
    lines: Vec<SaleLineDto>,
) -> Sale {
    Sale::new_for_insert(
        seq,
        &SaleDto {
            client_id: Some(client),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            payment: Some(payment),
            lines,
            ..SaleDto::default()
        },
    )
}

static SALES: Lazy<Vec<Sale>> = Lazy::new(|| {
    let mut sales = vec![
        build(
            1,
            1,
            (2025, 3, 10),
            PaymentMethod::Cash,
            vec![line(1, "Corte clásico", 1, 25_000.0)],
        ),
        build(
            2,
            2,
            (2025, 3, 10),
            PaymentMethod::Card,
            vec![
                line(3, "Tinte raíz", 1, 90_000.0),
                line(5, "Manicure tradicional", 1, 30_000.0),
            ],
        ),
        build(
            3,
            4,
            (2025, 3, 11),
            PaymentMethod::Transfer,
            vec![line(7, "Keratina", 1, 150_000.0)],
        ),
        build(
            4,
            5,
            (2025, 3, 12),
            PaymentMethod::Cash,
            vec![line(6, "Manicure semipermanente", 1, 55_000.0)],
        ),
    ];
    // la venta 3 quedó devuelta
    sales[2].status = SaleStatus::Refunded;
    sales
});

/// Ventas de ejemplo cargadas al iniciar el módulo
pub fn seed() -> Vec<Sale> {
    SALES.clone()
}
