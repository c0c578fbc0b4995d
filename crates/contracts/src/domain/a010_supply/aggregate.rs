use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::{RecordStatus, SupplyCategory};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplyId(pub u32);

impl SupplyId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for SupplyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(SupplyId::new)
            .map_err(|e| format!("Id de insumo inválido: {}", e))
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

/// Insumo del inventario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    #[serde(flatten)]
    pub base: BaseRecord<SupplyId>,

    pub category: SupplyCategory,

    /// Existencias en la unidad declarada
    pub stock: u32,

    /// Unidad de medida ("ml", "unidad", "caja")
    pub unit: String,

    /// Umbral de alerta de existencias
    #[serde(rename = "minStock")]
    pub min_stock: u32,

    pub status: RecordStatus,
}

impl Supply {
    pub fn new_for_insert(seq: u32, dto: &SupplyDto) -> Self {
        let mut base = BaseRecord::new(
            SupplyId::from_seq(seq),
            format!("INS-{:03}", seq),
            dto.name.trim().to_string(),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            category: dto.category.unwrap_or(SupplyCategory::Capilar),
            stock: dto.stock,
            unit: dto.unit.clone(),
            min_stock: dto.min_stock,
            status: RecordStatus::Active,
        }
    }

    pub fn update(&mut self, dto: &SupplyDto) {
        self.base.description = dto.name.trim().to_string();
        if let Some(category) = dto.category {
            self.category = category;
        }
        self.stock = dto.stock;
        self.unit = dto.unit.clone();
        self.min_stock = dto.min_stock;
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("El nombre del insumo no puede estar vacío".into());
        }
        if self.unit.trim().is_empty() {
            return Err("La unidad de medida no puede estar vacía".into());
        }
        Ok(())
    }

    /// Existencias en o por debajo del umbral de alerta
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

impl AggregateRoot for Supply {
    type Id = SupplyId;

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
        "a010"
    }

    fn collection_name() -> &'static str {
        "supplies"
    }

    fn element_name() -> &'static str {
        "Insumo"
    }

    fn list_name() -> &'static str {
        "Insumos"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SupplyDto {
    pub id: Option<u32>,
    pub name: String,
    pub category: Option<SupplyCategory>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub unit: String,
    #[serde(rename = "minStock", default)]
    pub min_stock: u32,
    pub comment: Option<String>,
}
