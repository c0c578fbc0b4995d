use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Claves de permiso por módulo
///
/// Cada módulo de administración tiene una sola clave que habilita sus
/// controles de mutación (crear, editar, eliminar, cambiar estado).
pub mod permissions {
    pub const DASHBOARD: &str = "dashboard";
    pub const USERS: &str = "usuarios";
    pub const ROLES: &str = "roles";
    pub const CLIENTS: &str = "clientes";
    pub const SERVICES: &str = "servicios";
    pub const SCHEDULES: &str = "horarios";
    pub const APPOINTMENTS: &str = "citas";
    pub const SALES: &str = "ventas";
    pub const PURCHASES: &str = "compras";
    pub const SUPPLIERS: &str = "proveedores";
    pub const SUPPLIES: &str = "insumos";
    pub const DELIVERIES: &str = "abastecimientos";

    pub fn all() -> Vec<&'static str> {
        vec![
            DASHBOARD,
            USERS,
            ROLES,
            CLIENTS,
            SERVICES,
            SCHEDULES,
            APPOINTMENTS,
            SALES,
            PURCHASES,
            SUPPLIERS,
            SUPPLIES,
            DELIVERIES,
        ]
    }
}

/// Capacidades de la sesión actual
///
/// Objeto de capacidades inyectado al construir cada servicio de lista;
/// reemplaza al predicado ambiental `hasPermission`. La consulta es pura
/// y sin efectos secundarios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    granted: BTreeSet<String>,
}

impl Capabilities {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Capacidades del administrador: todas las claves conocidas
    pub fn full() -> Self {
        Self::new(permissions::all())
    }

    /// Sin capacidad alguna (solo lectura)
    pub fn read_only() -> Self {
        Self::default()
    }

    pub fn allows(&self, key: &str) -> bool {
        self.granted.contains(key)
    }

    pub fn granted_keys(&self) -> impl Iterator<Item = &str> {
        self.granted.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_allows_every_module() {
        let caps = Capabilities::full();
        for key in permissions::all() {
            assert!(caps.allows(key));
        }
    }

    #[test]
    fn test_partial_grant() {
        let caps = Capabilities::new([permissions::CLIENTS, permissions::APPOINTMENTS]);
        assert!(caps.allows(permissions::CLIENTS));
        assert!(!caps.allows(permissions::SALES));
        assert!(!Capabilities::read_only().allows(permissions::CLIENTS));
    }
}
