use contracts::domain::a003_client::{Client, ClientDto};
use once_cell::sync::Lazy;

fn build(seq: u32, first: &str, last: &str, document: &str, email: &str, phone: &str) -> Client {
    Client::new_for_insert(
        seq,
        &ClientDto {
            first_name: first.into(),
            last_name: last.into(),
            document_id: document.into(),
            email: email.into(),
            phone: phone.into(),
            ..ClientDto::default()
        },
    )
}

static CLIENTS: Lazy<Vec<Client>> = Lazy::new(|| {
    vec![
        build(1, "Sofía", "Cardona", "1020304050", "sofia.c@gmail.com", "3105551020"),
        build(2, "Valentina", "Rojas", "1030405060", "valen.rojas@gmail.com", "3115551030"),
        build(3, "Andrés", "Palacio", "71456789", "apalacio@hotmail.com", "3125551040"),
        build(4, "Carolina", "Bedoya", "43123456", "caro.bedoya@gmail.com", "3135551050"),
        build(5, "Manuela", "Zapata", "1040506070", "manu.zapata@gmail.com", "3145551060"),
        build(6, "Felipe", "Arango", "98765432", "farango@yahoo.com", "3155551070"),
    ]
});

/// Clientes de ejemplo cargados al iniciar el módulo
pub fn seed() -> Vec<Client> {
    CLIENTS.clone()
}
