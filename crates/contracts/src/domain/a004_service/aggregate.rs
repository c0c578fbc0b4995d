use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::{RecordStatus, ServiceCategory};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub u32);

impl ServiceId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ServiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(ServiceId::new)
            .map_err(|e| format!("Id de servicio inválido: {}", e))
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

/// Servicio del catálogo del salón
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(flatten)]
    pub base: BaseRecord<ServiceId>,

    pub category: ServiceCategory,

    /// Precio en pesos
    pub price: f64,

    /// Duración en minutos
    #[serde(rename = "durationMinutes")]
    pub duration_minutes: u32,

    pub status: RecordStatus,
}

impl Service {
    pub fn new_for_insert(seq: u32, dto: &ServiceDto) -> Self {
        let mut base = BaseRecord::new(
            ServiceId::from_seq(seq),
            format!("SRV-{:03}", seq),
            dto.name.trim().to_string(),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            category: dto.category.unwrap_or(ServiceCategory::Corte),
            price: dto.price,
            duration_minutes: dto.duration_minutes,
            status: RecordStatus::Active,
        }
    }

    pub fn update(&mut self, dto: &ServiceDto) {
        self.base.description = dto.name.trim().to_string();
        if let Some(category) = dto.category {
            self.category = category;
        }
        self.price = dto.price;
        self.duration_minutes = dto.duration_minutes;
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("El nombre del servicio no puede estar vacío".into());
        }
        if self.price <= 0.0 {
            return Err("El precio debe ser mayor que cero".into());
        }
        if self.duration_minutes == 0 {
            return Err("La duración debe ser mayor que cero".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Service {
    type Id = ServiceId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "services"
    }

    fn element_name() -> &'static str {
        "Servicio"
    }

    fn list_name() -> &'static str {
        "Servicios"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServiceDto {
    pub id: Option<u32>,
    pub name: String,
    pub category: Option<ServiceCategory>,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "durationMinutes", default)]
    pub duration_minutes: u32,
    pub comment: Option<String>,
}
