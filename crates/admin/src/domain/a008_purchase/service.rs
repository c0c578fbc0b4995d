use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use contracts::domain::a008_purchase::{Purchase, PurchaseDto, PurchaseId};
use contracts::enums::PurchaseStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 5;
pub const FILTER_STATUS: &str = "status";
pub const FILTER_SUPPLIER: &str = "supplier";

impl Searchable for Purchase {
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
            FILTER_SUPPLIER => Some(self.supplier_id.value().to_string()),
            _ => None,
        }
    }
}

impl Lifecycle for Purchase {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }

    fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Módulo de compras
///
/// Una compra aprobada se edita o se anula; la anulación es terminal.
pub struct PurchaseService {
    list: ListController<Purchase>,
    caps: Capabilities,
}

impl PurchaseService {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<Purchase>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<Purchase> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&Purchase> {
        self.list.page_slice()
    }

    pub fn set_search(&mut self, term: &str) {
        self.list.set_search(term);
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_STATUS, value);
    }

    pub fn set_supplier_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_SUPPLIER, value);
    }

    pub fn goto_page(&mut self, page: usize) {
        self.list.goto_page(page);
    }

    fn ensure_manage(&self) -> Result<(), MutationError> {
        if self.caps.allows(permissions::PURCHASES) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::PURCHASES))
        }
    }

    pub fn create(&mut self, dto: &PurchaseDto) -> Result<Purchase, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let purchase = Purchase::new_for_insert(seq, dto);
            purchase.validate().map_err(MutationError::invalid)?;
            Ok(purchase)
        })
    }

    pub fn update(&mut self, id: PurchaseId, dto: &PurchaseDto) -> Result<Purchase, MutationError> {
        self.ensure_manage()?;
        self.list.update(id, |purchase| {
            purchase.update(dto);
            purchase.validate().map_err(MutationError::invalid)
        })
    }

    pub fn cancel(&mut self, id: PurchaseId) -> Result<Purchase, MutationError> {
        self.ensure_manage()?;
        self.list.transition(id, |purchase| {
            if !purchase.status.can_transition(PurchaseStatus::Cancelled) {
                return Err(MutationError::invalid(format!(
                    "La compra en estado {} no admite anulación",
                    purchase.status.display_name()
                )));
            }
            purchase.status = PurchaseStatus::Cancelled;
            Ok(())
        })
    }

    pub fn remove(&mut self, id: PurchaseId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        self.list.remove(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a008_purchase::PurchaseLineDto;

    fn dto() -> PurchaseDto {
        PurchaseDto {
            supplier_id: Some(1),
            date: NaiveDate::from_ymd_opt(2025, 3, 14),
            lines: vec![PurchaseLineDto {
                supply_id: Some(1),
                description: "Shampoo profesional 1L".into(),
                quantity: 12,
                unit_cost: 28_000.0,
            }],
            ..PurchaseDto::default()
        }
    }

    #[test]
    fn test_total_recomputed_on_update() {
        let mut svc = PurchaseService::with_items(Vec::new(), Capabilities::full());
        let purchase = svc.create(&dto()).unwrap();
        assert_eq!(purchase.total, 336_000.0);

        let mut edited = dto();
        edited.lines[0].quantity = 6;
        let updated = svc.update(purchase.base.id, &edited).unwrap();
        assert_eq!(updated.total, 168_000.0);
    }

    #[test]
    fn test_cancelled_purchase_is_terminal() {
        let mut svc = PurchaseService::with_items(Vec::new(), Capabilities::full());
        let id = svc.create(&dto()).unwrap().base.id;
        assert_eq!(svc.cancel(id).unwrap().status, PurchaseStatus::Cancelled);

        assert!(matches!(
            svc.update(id, &dto()).unwrap_err(),
            MutationError::Terminal { .. }
        ));
        assert!(matches!(
            svc.cancel(id).unwrap_err(),
            MutationError::Terminal { .. }
        ));
        assert!(matches!(
            svc.remove(id).unwrap_err(),
            MutationError::Terminal { .. }
        ));
    }

    #[test]
    fn test_approved_purchase_can_be_removed() {
        let mut svc = PurchaseService::with_items(Vec::new(), Capabilities::full());
        let id = svc.create(&dto()).unwrap().base.id;
        svc.remove(id).unwrap();
        assert!(svc.list().is_empty());
    }
}
