use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::RecordStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub u32);

impl SupplierId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(SupplierId::new)
            .map_err(|e| format!("Id de proveedor inválido: {}", e))
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

/// Proveedor de insumos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(flatten)]
    pub base: BaseRecord<SupplierId>,

    /// NIT o documento tributario
    pub nit: String,

    #[serde(rename = "contactName")]
    pub contact_name: String,

    pub email: String,

    pub phone: String,

    pub status: RecordStatus,
}

impl Supplier {
    pub fn new_for_insert(seq: u32, dto: &SupplierDto) -> Self {
        let mut base = BaseRecord::new(
            SupplierId::from_seq(seq),
            format!("PRV-{:03}", seq),
            dto.name.trim().to_string(),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            nit: dto.nit.clone(),
            contact_name: dto.contact_name.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
            status: RecordStatus::Active,
        }
    }

    pub fn update(&mut self, dto: &SupplierDto) {
        self.base.description = dto.name.trim().to_string();
        self.nit = dto.nit.clone();
        self.contact_name = dto.contact_name.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("La razón social no puede estar vacía".into());
        }
        if self.nit.trim().is_empty() {
            return Err("El NIT no puede estar vacío".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

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
        "a009"
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Proveedor"
    }

    fn list_name() -> &'static str {
        "Proveedores"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SupplierDto {
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub nit: String,
    #[serde(rename = "contactName", default)]
    pub contact_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub comment: Option<String>,
}
