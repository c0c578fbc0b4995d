use contracts::domain::a001_user::{User, UserDto};
use once_cell::sync::Lazy;

fn build(seq: u32, first: &str, last: &str, email: &str, phone: &str, role: u32) -> User {
    User::new_for_insert(
        seq,
        &UserDto {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            phone: phone.into(),
            role_id: Some(role),
            ..UserDto::default()
        },
    )
}

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    let mut users = vec![
        build(1, "Marcela", "Quintero", "marcela@asthro.co", "3001112233", 1),
        build(2, "Julián", "Pardo", "julian@asthro.co", "3014445566", 2),
        build(3, "Daniela", "Osorio", "daniela@asthro.co", "3027778899", 2),
        build(4, "Camilo", "Restrepo", "camilo@asthro.co", "3103334455", 3),
    ];
    // la cuenta administradora es el registro centinela
    users[0].base.metadata.is_protected = true;
    users
});

/// Usuarios de ejemplo cargados al iniciar el módulo
pub fn seed() -> Vec<User> {
    USERS.clone()
}
