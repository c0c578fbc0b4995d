use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use contracts::domain::a011_delivery::{Delivery, DeliveryDto, DeliveryId};
use contracts::enums::DeliveryStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 5;
pub const FILTER_STATUS: &str = "status";
pub const FILTER_SUPPLIER: &str = "supplier";

impl Searchable for Delivery {
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.base.code.to_lowercase().contains(&term)
            || self.base.description.to_lowercase().contains(&term)
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_STATUS => Some(self.status.code().to_string()),
            FILTER_SUPPLIER => Some(self.supplier_id.value().to_string()),
            _ => None,
        }
    }
}

impl Lifecycle for Delivery {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }

    fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Módulo de abastecimientos (entregas de insumos)
///
/// Solo las entregas pendientes se editan, se reciben, se anulan o se
/// eliminan; recibida y anulada son estados terminales.
pub struct DeliveryService {
    list: ListController<Delivery>,
    caps: Capabilities,
}

impl DeliveryService {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<Delivery>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<Delivery> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&Delivery> {
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
        if self.caps.allows(permissions::DELIVERIES) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::DELIVERIES))
        }
    }

    pub fn create(&mut self, dto: &DeliveryDto) -> Result<Delivery, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let delivery = Delivery::new_for_insert(seq, dto);
            delivery.validate().map_err(MutationError::invalid)?;
            Ok(delivery)
        })
    }

    pub fn update(&mut self, id: DeliveryId, dto: &DeliveryDto) -> Result<Delivery, MutationError> {
        self.ensure_manage()?;
        self.list.update(id, |delivery| {
            delivery.update(dto);
            delivery.validate().map_err(MutationError::invalid)
        })
    }

    fn transition_to(
        &mut self,
        id: DeliveryId,
        next: DeliveryStatus,
    ) -> Result<Delivery, MutationError> {
        self.ensure_manage()?;
        self.list.transition(id, |delivery| {
            if !delivery.status.can_transition(next) {
                return Err(MutationError::invalid(format!(
                    "La entrega no puede pasar de {} a {}",
                    delivery.status.display_name(),
                    next.display_name()
                )));
            }
            delivery.status = next;
            Ok(())
        })
    }

    /// Marcar la entrega como recibida
    pub fn complete(&mut self, id: DeliveryId) -> Result<Delivery, MutationError> {
        self.transition_to(id, DeliveryStatus::Completed)
    }

    pub fn cancel(&mut self, id: DeliveryId) -> Result<Delivery, MutationError> {
        self.transition_to(id, DeliveryStatus::Cancelled)
    }

    pub fn remove(&mut self, id: DeliveryId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        self.list.remove(id).map(|_| ())
    }
}
