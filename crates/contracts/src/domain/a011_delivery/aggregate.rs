use crate::domain::a009_supplier::SupplierId;
use crate::domain::a010_supply::SupplyId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::DeliveryStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryId(pub u32);

impl DeliveryId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for DeliveryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(DeliveryId::new)
            .map_err(|e| format!("Id de entrega inválido: {}", e))
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

/// Entrega de insumos de un proveedor (abastecimiento)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(flatten)]
    pub base: BaseRecord<DeliveryId>,

    #[serde(rename = "supplyId")]
    pub supply_id: SupplyId,

    #[serde(rename = "supplierId")]
    pub supplier_id: SupplierId,

    pub quantity: u32,

    #[serde(rename = "expectedDate")]
    pub expected_date: NaiveDate,

    pub status: DeliveryStatus,
}

impl Delivery {
    pub fn new_for_insert(seq: u32, dto: &DeliveryDto) -> Self {
        let code = format!("ENT-{:03}", seq);
        let mut base = BaseRecord::new(
            DeliveryId::from_seq(seq),
            code.clone(),
            format!("Entrega {}", code),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            supply_id: SupplyId::new(dto.supply_id.unwrap_or_default()),
            supplier_id: SupplierId::new(dto.supplier_id.unwrap_or_default()),
            quantity: dto.quantity,
            expected_date: dto.expected_date.unwrap_or_default(),
            status: DeliveryStatus::Pending,
        }
    }

    pub fn update(&mut self, dto: &DeliveryDto) {
        if let Some(supply_id) = dto.supply_id {
            self.supply_id = SupplyId::new(supply_id);
        }
        if let Some(supplier_id) = dto.supplier_id {
            self.supplier_id = SupplierId::new(supplier_id);
        }
        self.quantity = dto.quantity;
        if let Some(expected_date) = dto.expected_date {
            self.expected_date = expected_date;
        }
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.supply_id.value() == 0 {
            return Err("La entrega requiere un insumo".into());
        }
        if self.supplier_id.value() == 0 {
            return Err("La entrega requiere un proveedor".into());
        }
        if self.quantity == 0 {
            return Err("La cantidad debe ser mayor que cero".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Delivery {
    type Id = DeliveryId;

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
        "a011"
    }

    fn collection_name() -> &'static str {
        "deliveries"
    }

    fn element_name() -> &'static str {
        "Entrega"
    }

    fn list_name() -> &'static str {
        "Entregas"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeliveryDto {
    pub id: Option<u32>,
    #[serde(rename = "supplyId")]
    pub supply_id: Option<u32>,
    #[serde(rename = "supplierId")]
    pub supplier_id: Option<u32>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(rename = "expectedDate")]
    pub expected_date: Option<NaiveDate>,
    pub comment: Option<String>,
}
