pub mod aggregate;

pub use aggregate::{Role, RoleDto, RoleId};
