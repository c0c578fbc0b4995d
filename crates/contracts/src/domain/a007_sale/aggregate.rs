use crate::domain::a003_client::ClientId;
use crate::domain::a004_service::ServiceId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::{PaymentMethod, SaleStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleId(pub u32);

impl SaleId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for SaleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(SaleId::new)
            .map_err(|e| format!("Id de venta inválido: {}", e))
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

/// Renglón de una venta
///
/// `description` congela el nombre del servicio en el momento de la
/// venta; no se actualiza si el catálogo cambia después.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,
    pub description: String,
    pub quantity: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

impl SaleLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Venta de servicios a un cliente
///
/// El total es denormalizado: se recalcula como la suma de los renglones
/// al guardar. Las ventas nacen completadas; solo admiten devolución.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(flatten)]
    pub base: BaseRecord<SaleId>,

    #[serde(rename = "clientId")]
    pub client_id: ClientId,

    pub date: NaiveDate,

    pub payment: PaymentMethod,

    pub lines: Vec<SaleLine>,

    pub total: f64,

    pub status: SaleStatus,
}

impl Sale {
    fn compute_total(lines: &[SaleLine]) -> f64 {
        lines.iter().map(SaleLine::subtotal).sum()
    }

    pub fn new_for_insert(seq: u32, dto: &SaleDto) -> Self {
        let code = format!("VNT-{:03}", seq);
        let mut base = BaseRecord::new(
            SaleId::from_seq(seq),
            code.clone(),
            format!("Venta {}", code),
        );
        base.comment = dto.comment.clone();

        let lines: Vec<SaleLine> = dto
            .lines
            .iter()
            .map(|line| SaleLine {
                service_id: ServiceId::new(line.service_id.unwrap_or_default()),
                description: line.description.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect();
        let total = Self::compute_total(&lines);

        Self {
            base,
            client_id: ClientId::new(dto.client_id.unwrap_or_default()),
            date: dto.date.unwrap_or_default(),
            payment: dto.payment.unwrap_or(PaymentMethod::Cash),
            lines,
            total,
            status: SaleStatus::Completed,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.value() == 0 {
            return Err("La venta requiere un cliente".into());
        }
        if self.lines.is_empty() {
            return Err("La venta debe tener al menos un renglón".into());
        }
        for line in &self.lines {
            if line.quantity == 0 {
                return Err("La cantidad debe ser mayor que cero".into());
            }
            if line.unit_price <= 0.0 {
                return Err("El precio unitario debe ser mayor que cero".into());
            }
        }
        Ok(())
    }
}

impl AggregateRoot for Sale {
    type Id = SaleId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "sales"
    }

    fn element_name() -> &'static str {
        "Venta"
    }

    fn list_name() -> &'static str {
        "Ventas"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SaleLineDto {
    #[serde(rename = "serviceId")]
    pub service_id: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SaleDto {
    pub id: Option<u32>,
    #[serde(rename = "clientId")]
    pub client_id: Option<u32>,
    pub date: Option<NaiveDate>,
    pub payment: Option<PaymentMethod>,
    #[serde(default)]
    pub lines: Vec<SaleLineDto>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_lines() {
        let dto = SaleDto {
            client_id: Some(1),
            payment: Some(PaymentMethod::Card),
            lines: vec![
                SaleLineDto {
                    service_id: Some(1),
                    description: "Corte clásico".into(),
                    quantity: 2,
                    unit_price: 25_000.0,
                },
                SaleLineDto {
                    service_id: Some(3),
                    description: "Manicure".into(),
                    quantity: 1,
                    unit_price: 30_000.0,
                },
            ],
            ..SaleDto::default()
        };
        let sale = Sale::new_for_insert(4, &dto);
        assert_eq!(sale.base.code, "VNT-004");
        assert_eq!(sale.total, 80_000.0);
        assert_eq!(sale.status, SaleStatus::Completed);
    }
}
