use super::auth::{permissions, Capabilities};
use serde::{Deserialize, Serialize};

/// Agrupaciones fijas de la barra lateral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Principal,
    Configuracion,
    Gestion,
    Inventario,
}

impl MenuCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            MenuCategory::Principal => "Principal",
            MenuCategory::Configuracion => "Configuración",
            MenuCategory::Gestion => "Gestión",
            MenuCategory::Inventario => "Inventario",
        }
    }

    pub fn all() -> Vec<MenuCategory> {
        vec![
            MenuCategory::Principal,
            MenuCategory::Configuracion,
            MenuCategory::Gestion,
            MenuCategory::Inventario,
        ]
    }
}

/// Entrada del menú lateral; configuración pura, sin lógica
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub permission: &'static str,
    pub category: MenuCategory,
}

/// Menú completo en el orden de presentación
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        id: "dashboard",
        label: "Dashboard",
        icon: "layout-dashboard",
        permission: permissions::DASHBOARD,
        category: MenuCategory::Principal,
    },
    MenuEntry {
        id: "usuarios",
        label: "Usuarios",
        icon: "users",
        permission: permissions::USERS,
        category: MenuCategory::Configuracion,
    },
    MenuEntry {
        id: "roles",
        label: "Roles",
        icon: "shield",
        permission: permissions::ROLES,
        category: MenuCategory::Configuracion,
    },
    MenuEntry {
        id: "clientes",
        label: "Clientes",
        icon: "contact",
        permission: permissions::CLIENTS,
        category: MenuCategory::Gestion,
    },
    MenuEntry {
        id: "citas",
        label: "Citas",
        icon: "calendar-check",
        permission: permissions::APPOINTMENTS,
        category: MenuCategory::Gestion,
    },
    MenuEntry {
        id: "horarios",
        label: "Horarios",
        icon: "clock",
        permission: permissions::SCHEDULES,
        category: MenuCategory::Gestion,
    },
    MenuEntry {
        id: "servicios",
        label: "Servicios",
        icon: "scissors",
        permission: permissions::SERVICES,
        category: MenuCategory::Gestion,
    },
    MenuEntry {
        id: "ventas",
        label: "Ventas",
        icon: "receipt",
        permission: permissions::SALES,
        category: MenuCategory::Gestion,
    },
    MenuEntry {
        id: "compras",
        label: "Compras",
        icon: "shopping-cart",
        permission: permissions::PURCHASES,
        category: MenuCategory::Inventario,
    },
    MenuEntry {
        id: "proveedores",
        label: "Proveedores",
        icon: "truck",
        permission: permissions::SUPPLIERS,
        category: MenuCategory::Inventario,
    },
    MenuEntry {
        id: "insumos",
        label: "Insumos",
        icon: "package",
        permission: permissions::SUPPLIES,
        category: MenuCategory::Inventario,
    },
    MenuEntry {
        id: "abastecimientos",
        label: "Abastecimientos",
        icon: "package-check",
        permission: permissions::DELIVERIES,
        category: MenuCategory::Inventario,
    },
];

/// Entradas visibles para las capacidades dadas, en el orden del menú
pub fn visible_for(caps: &Capabilities) -> Vec<&'static MenuEntry> {
    MENU.iter()
        .filter(|entry| caps.allows(entry.permission))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_capabilities_see_whole_menu() {
        assert_eq!(visible_for(&Capabilities::full()).len(), MENU.len());
    }

    #[test]
    fn test_menu_filtered_by_permission() {
        let caps = Capabilities::new([permissions::CLIENTS, permissions::APPOINTMENTS]);
        let visible = visible_for(&caps);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, "clientes");
        assert_eq!(visible[1].id, "citas");
    }

    #[test]
    fn test_menu_ids_are_unique() {
        let mut ids: Vec<_> = MENU.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), MENU.len());
    }
}
