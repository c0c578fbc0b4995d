use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use contracts::domain::a007_sale::{Sale, SaleDto, SaleId};
use contracts::enums::SaleStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 5;
pub const FILTER_STATUS: &str = "status";
pub const FILTER_PAYMENT: &str = "payment";

impl Searchable for Sale {
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.base.code.to_lowercase().contains(&term)
            || self
                .lines
                .iter()
                .any(|line| line.description.to_lowercase().contains(&term))
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_STATUS => Some(self.status.code().to_string()),
            FILTER_PAYMENT => Some(self.payment.code().to_string()),
            _ => None,
        }
    }
}

impl Lifecycle for Sale {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }

    fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Módulo de ventas
///
/// Una venta completada no se edita ni se elimina; la única operación
/// posterior es la devolución, y la devolución es definitiva. La regla
/// vive aquí y no en la UI: invocar `remove` directamente también falla.
pub struct SaleService {
    list: ListController<Sale>,
    caps: Capabilities,
}

impl SaleService {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<Sale>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<Sale> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&Sale> {
        self.list.page_slice()
    }

    pub fn set_search(&mut self, term: &str) {
        self.list.set_search(term);
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_STATUS, value);
    }

    pub fn set_payment_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_PAYMENT, value);
    }

    pub fn goto_page(&mut self, page: usize) {
        self.list.goto_page(page);
    }

    fn ensure_manage(&self) -> Result<(), MutationError> {
        if self.caps.allows(permissions::SALES) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::SALES))
        }
    }

    pub fn create(&mut self, dto: &SaleDto) -> Result<Sale, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let sale = Sale::new_for_insert(seq, dto);
            sale.validate().map_err(MutationError::invalid)?;
            Ok(sale)
        })
    }

    /// Devolución de una venta completada
    pub fn refund(&mut self, id: SaleId) -> Result<Sale, MutationError> {
        self.ensure_manage()?;
        self.list.transition(id, |sale| {
            if !sale.status.can_transition(SaleStatus::Refunded) {
                return Err(MutationError::invalid(format!(
                    "La venta en estado {} no admite devolución",
                    sale.status.display_name()
                )));
            }
            sale.status = SaleStatus::Refunded;
            Ok(())
        })
    }

    /// Las ventas registradas no se eliminan
    pub fn remove(&mut self, id: SaleId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        let entity = "Venta";
        let Some(sale) = self.list.find(id) else {
            return Err(MutationError::not_found(entity, id.value().to_string()));
        };
        // una venta completada tampoco se borra: el comprobante ya existe
        Err(MutationError::terminal(
            entity,
            id.value().to_string(),
            sale.status.code(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a007_sale::SaleLineDto;
    use contracts::enums::PaymentMethod;

    fn dto() -> SaleDto {
        SaleDto {
            client_id: Some(1),
            date: NaiveDate::from_ymd_opt(2025, 3, 12),
            payment: Some(PaymentMethod::Cash),
            lines: vec![SaleLineDto {
                service_id: Some(1),
                description: "Corte clásico".into(),
                quantity: 1,
                unit_price: 25_000.0,
            }],
            ..SaleDto::default()
        }
    }

    #[test]
    fn test_sale_codes_are_sequential() {
        let mut svc = SaleService::new(Capabilities::full());
        let next = svc.create(&dto()).unwrap();
        assert_eq!(next.base.code, "VNT-005");
    }

    #[test]
    fn test_refund_is_terminal() {
        let mut svc = SaleService::new(Capabilities::full());
        let sale = svc.create(&dto()).unwrap();
        let id = sale.base.id;

        assert_eq!(svc.refund(id).unwrap().status, SaleStatus::Refunded);
        // la devolución es definitiva
        assert!(matches!(
            svc.refund(id).unwrap_err(),
            MutationError::Terminal { .. }
        ));
    }

    #[test]
    fn test_completed_sale_cannot_be_removed() {
        let mut svc = SaleService::new(Capabilities::full());
        let id = svc.list().items()[0].base.id;
        let count = svc.list().len();
        assert!(matches!(
            svc.remove(id).unwrap_err(),
            MutationError::Terminal { .. }
        ));
        assert_eq!(svc.list().len(), count);
    }

    #[test]
    fn test_empty_sale_is_refused() {
        let mut svc = SaleService::new(Capabilities::full());
        let err = svc
            .create(&SaleDto {
                client_id: Some(1),
                payment: Some(PaymentMethod::Card),
                lines: Vec::new(),
                ..SaleDto::default()
            })
            .unwrap_err();
        assert!(matches!(err, MutationError::Validation(_)));
    }
}
