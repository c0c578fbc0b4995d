use contracts::domain::a009_supplier::{Supplier, SupplierDto};
use once_cell::sync::Lazy;

fn build(seq: u32, name: &str, nit: &str, contact: &str, email: &str, phone: &str) -> Supplier {
    Supplier::new_for_insert(
        seq,
        &SupplierDto {
            name: name.into(),
            nit: nit.into(),
            contact_name: contact.into(),
            email: email.into(),
            phone: phone.into(),
            ..SupplierDto::default()
        },
    )
}

static SUPPLIERS: Lazy<Vec<Supplier>> = Lazy::new(|| {
    vec![
        build(
            1,
            "Distribelleza S.A.S.",
            "900123456-1",
            "Gloria Henao",
            "ventas@distribelleza.co",
            "6042345678",
        ),
        build(
            2,
            "Coloración Andina",
            "901234567-2",
            "Mario Salazar",
            "pedidos@colandina.co",
            "6043456789",
        ),
        build(
            3,
            "Insumos del Valle",
            "805678901-3",
            "Patricia Giraldo",
            "contacto@insuvalle.co",
            "6024567890",
        ),
        build(
            4,
            "BellePro Importados",
            "830456789-4",
            "Ricardo Peña",
            "info@bellepro.co",
            "6015678901",
        ),
    ]
});

/// Proveedores de ejemplo cargados al iniciar el módulo
pub fn seed() -> Vec<Supplier> {
    SUPPLIERS.clone()
}
