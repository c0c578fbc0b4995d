use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::RecordStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub u32);

impl RoleId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for RoleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(RoleId::new)
            .map_err(|e| format!("Id de rol inválido: {}", e))
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

/// Rol con su lista de permisos
///
/// El rol administrador sembrado es un registro centinela: su bandera
/// `is_protected` hace que el núcleo rechace desactivarlo o eliminarlo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(flatten)]
    pub base: BaseRecord<RoleId>,

    /// Claves de permiso otorgadas (ver `system::auth::permissions`)
    pub permissions: Vec<String>,

    pub status: RecordStatus,
}

impl Role {
    pub fn new_for_insert(seq: u32, dto: &RoleDto) -> Self {
        let mut base = BaseRecord::new(
            RoleId::from_seq(seq),
            format!("ROL-{:03}", seq),
            dto.name.trim().to_string(),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            permissions: dto.permissions.clone(),
            status: RecordStatus::Active,
        }
    }

    pub fn update(&mut self, dto: &RoleDto) {
        self.base.description = dto.name.trim().to_string();
        self.permissions = dto.permissions.clone();
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("El nombre del rol no puede estar vacío".into());
        }
        if self.permissions.is_empty() {
            return Err("El rol debe otorgar al menos un permiso".into());
        }
        Ok(())
    }

    pub fn grants(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

impl AggregateRoot for Role {
    type Id = RoleId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "roles"
    }

    fn element_name() -> &'static str {
        "Rol"
    }

    fn list_name() -> &'static str {
        "Roles"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RoleDto {
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub comment: Option<String>,
}
