use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use contracts::domain::a004_service::{Service, ServiceDto, ServiceId};
use contracts::enums::RecordStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 8;
pub const FILTER_STATUS: &str = "status";
pub const FILTER_CATEGORY: &str = "category";

impl Searchable for Service {
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.base.description.to_lowercase().contains(&term)
            || self.base.code.to_lowercase().contains(&term)
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_STATUS => Some(self.status.code().to_string()),
            FILTER_CATEGORY => Some(self.category.code().to_string()),
            _ => None,
        }
    }
}

impl Lifecycle for Service {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

/// Catálogo de servicios del salón
pub struct ServiceCatalog {
    list: ListController<Service>,
    caps: Capabilities,
}

impl ServiceCatalog {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<Service>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<Service> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&Service> {
        self.list.page_slice()
    }

    pub fn set_search(&mut self, term: &str) {
        self.list.set_search(term);
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_STATUS, value);
    }

    pub fn set_category_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_CATEGORY, value);
    }

    pub fn goto_page(&mut self, page: usize) {
        self.list.goto_page(page);
    }

    /// Servicios activos, para los selectores de citas y ventas
    pub fn active(&self) -> Vec<&Service> {
        self.list
            .items()
            .iter()
            .filter(|s| s.status.is_active())
            .collect()
    }

    fn ensure_manage(&self) -> Result<(), MutationError> {
        if self.caps.allows(permissions::SERVICES) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::SERVICES))
        }
    }

    pub fn create(&mut self, dto: &ServiceDto) -> Result<Service, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let service = Service::new_for_insert(seq, dto);
            service.validate().map_err(MutationError::invalid)?;
            Ok(service)
        })
    }

    pub fn update(&mut self, id: ServiceId, dto: &ServiceDto) -> Result<Service, MutationError> {
        self.ensure_manage()?;
        self.list.update(id, |service| {
            service.update(dto);
            service.validate().map_err(MutationError::invalid)
        })
    }

    pub fn toggle_status(&mut self, id: ServiceId) -> Result<RecordStatus, MutationError> {
        self.ensure_manage()?;
        let service = self.list.transition(id, |service| {
            service.status = service.status.toggled();
            Ok(())
        })?;
        Ok(service.status)
    }

    pub fn remove(&mut self, id: ServiceId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        self.list.remove(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ServiceCategory;

    #[test]
    fn test_create_corte_scenario() {
        // colección vacía más el borrador {Corte, 50000, 30}
        let mut svc = ServiceCatalog::with_items(Vec::new(), Capabilities::full());
        let created = svc
            .create(&ServiceDto {
                name: "Corte".into(),
                category: Some(ServiceCategory::Corte),
                price: 50_000.0,
                duration_minutes: 30,
                ..ServiceDto::default()
            })
            .unwrap();
        assert_eq!(svc.list().len(), 1);
        assert_eq!(created.base.id.value(), 1);
        assert_eq!(created.status, RecordStatus::Active);
    }

    #[test]
    fn test_nonpositive_price_refused() {
        let mut svc = ServiceCatalog::with_items(Vec::new(), Capabilities::full());
        let err = svc
            .create(&ServiceDto {
                name: "Corte".into(),
                category: Some(ServiceCategory::Corte),
                price: 0.0,
                duration_minutes: 30,
                ..ServiceDto::default()
            })
            .unwrap_err();
        assert!(matches!(err, MutationError::Validation(_)));
        assert!(svc.list().is_empty());
    }

    #[test]
    fn test_category_filter() {
        let mut svc = ServiceCatalog::new(Capabilities::full());
        svc.set_category_filter("manicure");
        assert!(svc
            .page_slice()
            .iter()
            .all(|s| s.category == ServiceCategory::Manicure));
    }
}
