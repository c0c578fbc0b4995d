use crate::domain::a002_role::RoleId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::RecordStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl UserId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for UserId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(UserId::new)
            .map_err(|e| format!("Id de usuario inválido: {}", e))
    }

    fn from_seq(seq: u32) -> Self {
        Self(seq)
    }

    fn seq(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Usuario del sistema (empleados y administradores)
///
/// `description` guarda el nombre completo denormalizado; se recalcula en
/// cada guardado a partir de nombre y apellido, nunca en caliente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseRecord<UserId>,

    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub email: String,

    pub phone: String,

    #[serde(rename = "roleId")]
    pub role_id: RoleId,

    pub status: RecordStatus,
}

impl User {
    fn display_name(first_name: &str, last_name: &str) -> String {
        format!("{} {}", first_name.trim(), last_name.trim())
    }

    pub fn new_for_insert(seq: u32, dto: &UserDto) -> Self {
        let mut base = BaseRecord::new(
            UserId::from_seq(seq),
            format!("USR-{:03}", seq),
            Self::display_name(&dto.first_name, &dto.last_name),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
            role_id: RoleId::new(dto.role_id.unwrap_or_default()),
            status: RecordStatus::Active,
        }
    }

    /// Reemplazo completo de los campos editables; el estado solo cambia
    /// por el interruptor activar/desactivar, nunca por la edición
    pub fn update(&mut self, dto: &UserDto) {
        self.first_name = dto.first_name.clone();
        self.last_name = dto.last_name.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        if let Some(role_id) = dto.role_id {
            self.role_id = RoleId::new(role_id);
        }
        self.base.comment = dto.comment.clone();

        // Recalcular el nombre denormalizado al guardar
        self.base.description = Self::display_name(&self.first_name, &self.last_name);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("El nombre no puede estar vacío".into());
        }
        if self.last_name.trim().is_empty() {
            return Err("El apellido no puede estar vacío".into());
        }
        if self.email.trim().is_empty() {
            return Err("El correo no puede estar vacío".into());
        }
        if !self.email.contains('@') {
            return Err("El correo no es válido".into());
        }
        Ok(())
    }
}

impl AggregateRoot for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "Usuario"
    }

    fn list_name() -> &'static str {
        "Usuarios"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserDto {
    pub id: Option<u32>,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "roleId")]
    pub role_id: Option<u32>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_recomputed_on_update() {
        let dto = UserDto {
            first_name: "Laura".into(),
            last_name: "Mejía".into(),
            email: "laura@asthro.co".into(),
            role_id: Some(2),
            ..UserDto::default()
        };
        let mut user = User::new_for_insert(1, &dto);
        assert_eq!(user.base.description, "Laura Mejía");
        assert_eq!(user.base.code, "USR-001");

        let edited = UserDto {
            last_name: "Mejía Ríos".into(),
            ..dto
        };
        user.update(&edited);
        assert_eq!(user.base.description, "Laura Mejía Ríos");
    }

    #[test]
    fn test_validate_requires_valid_email() {
        let dto = UserDto {
            first_name: "Laura".into(),
            last_name: "Mejía".into(),
            email: "sin-arroba".into(),
            role_id: Some(2),
            ..UserDto::default()
        };
        let user = User::new_for_insert(1, &dto);
        assert!(user.validate().is_err());
    }
}
