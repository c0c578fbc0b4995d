use contracts::domain::a010_supply::{Supply, SupplyDto};
use contracts::enums::SupplyCategory;
use once_cell::sync::Lazy;

fn build(
    seq: u32,
    name: &str,
    category: SupplyCategory,
    stock: u32,
    unit: &str,
    min_stock: u32,
) -> Supply {
    Supply::new_for_insert(
        seq,
        &SupplyDto {
            name: name.into(),
            category: Some(category),
            stock,
            unit: unit.into(),
            min_stock,
            ..SupplyDto::default()
        },
    )
}

static SUPPLIES: Lazy<Vec<Supply>> = Lazy::new(|| {
    vec![
        build(1, "Shampoo profesional 1L", SupplyCategory::Capilar, 18, "unidad", 6),
        build(2, "Acondicionador 1L", SupplyCategory::Capilar, 4, "unidad", 6),
        build(3, "Ampolla keratina", SupplyCategory::Capilar, 25, "unidad", 10),
        build(4, "Tinte tubo 60ml", SupplyCategory::Coloracion, 32, "unidad", 15),
        build(5, "Agua oxigenada 20vol", SupplyCategory::Coloracion, 8, "litro", 4),
        build(6, "Esmalte semipermanente", SupplyCategory::Unas, 12, "unidad", 15),
        build(7, "Tijera de corte", SupplyCategory::Herramientas, 6, "unidad", 2),
        build(8, "Guantes de nitrilo", SupplyCategory::Desechables, 180, "par", 50),
    ]
});

/// Inventario de ejemplo cargado al iniciar el módulo
pub fn seed() -> Vec<Supply> {
    SUPPLIES.clone()
}
