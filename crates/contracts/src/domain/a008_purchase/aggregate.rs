use crate::domain::a009_supplier::SupplierId;
use crate::domain::a010_supply::SupplyId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::PurchaseStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseId(pub u32);

impl PurchaseId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for PurchaseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(PurchaseId::new)
            .map_err(|e| format!("Id de compra inválido: {}", e))
    }

    fn from_seq(seq: u32) -> Self {
        Self(seq)
    }

    fn seq(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Line items
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    #[serde(rename = "supplyId")]
    pub supply_id: SupplyId,
    pub description: String,
    pub quantity: u32,
    #[serde(rename = "unitCost")]
    pub unit_cost: f64,
}

impl PurchaseLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_cost * f64::from(self.quantity)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Compra de insumos a un proveedor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(flatten)]
    pub base: BaseRecord<PurchaseId>,

    #[serde(rename = "supplierId")]
    pub supplier_id: SupplierId,

    pub date: NaiveDate,

    pub lines: Vec<PurchaseLine>,

    pub total: f64,

    pub status: PurchaseStatus,
}

impl Purchase {
    fn compute_total(lines: &[PurchaseLine]) -> f64 {
        lines.iter().map(PurchaseLine::subtotal).sum()
    }

    fn lines_from_dto(dto: &PurchaseDto) -> Vec<PurchaseLine> {
        dto.lines
            .iter()
            .map(|line| PurchaseLine {
                supply_id: SupplyId::new(line.supply_id.unwrap_or_default()),
                description: line.description.clone(),
                quantity: line.quantity,
                unit_cost: line.unit_cost,
            })
            .collect()
    }

    pub fn new_for_insert(seq: u32, dto: &PurchaseDto) -> Self {
        let code = format!("CMP-{:03}", seq);
        let mut base = BaseRecord::new(
            PurchaseId::from_seq(seq),
            code.clone(),
            format!("Compra {}", code),
        );
        base.comment = dto.comment.clone();

        let lines = Self::lines_from_dto(dto);
        let total = Self::compute_total(&lines);

        Self {
            base,
            supplier_id: SupplierId::new(dto.supplier_id.unwrap_or_default()),
            date: dto.date.unwrap_or_default(),
            lines,
            total,
            status: PurchaseStatus::Approved,
        }
    }

    /// Reemplazo completo de los renglones; el total se recalcula al guardar
    pub fn update(&mut self, dto: &PurchaseDto) {
        if let Some(supplier_id) = dto.supplier_id {
            self.supplier_id = SupplierId::new(supplier_id);
        }
        if let Some(date) = dto.date {
            self.date = date;
        }
        self.lines = Self::lines_from_dto(dto);
        self.total = Self::compute_total(&self.lines);
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.supplier_id.value() == 0 {
            return Err("La compra requiere un proveedor".into());
        }
        if self.lines.is_empty() {
            return Err("La compra debe tener al menos un renglón".into());
        }
        for line in &self.lines {
            if line.quantity == 0 {
                return Err("La cantidad debe ser mayor que cero".into());
            }
            if line.unit_cost <= 0.0 {
                return Err("El costo unitario debe ser mayor que cero".into());
            }
        }
        Ok(())
    }
}

impl AggregateRoot for Purchase {
    type Id = PurchaseId;

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
        "a008"
    }

    fn collection_name() -> &'static str {
        "purchases"
    }

    fn element_name() -> &'static str {
        "Compra"
    }

    fn list_name() -> &'static str {
        "Compras"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PurchaseLineDto {
    #[serde(rename = "supplyId")]
    pub supply_id: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(rename = "unitCost", default)]
    pub unit_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PurchaseDto {
    pub id: Option<u32>,
    #[serde(rename = "supplierId")]
    pub supplier_id: Option<u32>,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub lines: Vec<PurchaseLineDto>,
    pub comment: Option<String>,
}
