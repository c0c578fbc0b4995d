use contracts::domain::a004_service::{Service, ServiceDto};
use contracts::enums::ServiceCategory;
use once_cell::sync::Lazy;

fn build(seq: u32, name: &str, category: ServiceCategory, price: f64, minutes: u32) -> Service {
    Service::new_for_insert(
        seq,
        &ServiceDto {
            name: name.into(),
            category: Some(category),
            price,
            duration_minutes: minutes,
            ..ServiceDto::default()
        },
    )
}

static SERVICES: Lazy<Vec<Service>> = Lazy::new(|| {
    vec![
        build(1, "Corte clásico", ServiceCategory::Corte, 25_000.0, 30),
        build(2, "Corte y cepillado", ServiceCategory::Corte, 40_000.0, 45),
        build(3, "Tinte raíz", ServiceCategory::Color, 90_000.0, 90),
        build(4, "Balayage", ServiceCategory::Color, 180_000.0, 150),
        build(5, "Manicure tradicional", ServiceCategory::Manicure, 30_000.0, 40),
        build(6, "Manicure semipermanente", ServiceCategory::Manicure, 55_000.0, 60),
        build(7, "Keratina", ServiceCategory::Tratamiento, 150_000.0, 120),
        build(8, "Peinado de fiesta", ServiceCategory::Peinado, 70_000.0, 60),
    ]
});

/// Catálogo de ejemplo cargado al iniciar el módulo
pub fn seed() -> Vec<Service> {
    SERVICES.clone()
}
