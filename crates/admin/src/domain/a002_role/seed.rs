use contracts::domain::a002_role::{Role, RoleDto};
use contracts::system::auth::permissions;
use once_cell::sync::Lazy;

fn build(seq: u32, name: &str, granted: &[&str]) -> Role {
    Role::new_for_insert(
        seq,
        &RoleDto {
            name: name.into(),
            permissions: granted.iter().map(|p| p.to_string()).collect(),
            ..RoleDto::default()
        },
    )
}

static ROLES: Lazy<Vec<Role>> = Lazy::new(|| {
    let mut roles = vec![
        Role::new_for_insert(
            1,
            &RoleDto {
                name: "Administrador".into(),
                permissions: permissions::all().iter().map(|p| p.to_string()).collect(),
                ..RoleDto::default()
            },
        ),
        build(
            2,
            "Estilista",
            &[
                permissions::DASHBOARD,
                permissions::APPOINTMENTS,
                permissions::CLIENTS,
                permissions::SCHEDULES,
            ],
        ),
        build(
            3,
            "Recepción",
            &[
                permissions::DASHBOARD,
                permissions::APPOINTMENTS,
                permissions::CLIENTS,
                permissions::SALES,
            ],
        ),
    ];
    // el rol administrador es el registro centinela
    roles[0].base.metadata.is_protected = true;
    roles
});

/// Roles de ejemplo cargados al iniciar el módulo
pub fn seed() -> Vec<Role> {
    ROLES.clone()
}
