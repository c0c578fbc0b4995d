use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use contracts::domain::a009_supplier::{Supplier, SupplierDto, SupplierId};
use contracts::enums::RecordStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 8;
pub const FILTER_STATUS: &str = "status";

impl Searchable for Supplier {
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [
            self.base.description.as_str(),
            self.nit.as_str(),
            self.contact_name.as_str(),
            self.email.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_STATUS => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

impl Lifecycle for Supplier {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

/// Módulo de proveedores
pub struct SupplierService {
    list: ListController<Supplier>,
    caps: Capabilities,
}

impl SupplierService {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<Supplier>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<Supplier> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&Supplier> {
        self.list.page_slice()
    }

    pub fn set_search(&mut self, term: &str) {
        self.list.set_search(term);
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_STATUS, value);
    }

    pub fn goto_page(&mut self, page: usize) {
        self.list.goto_page(page);
    }

    fn ensure_manage(&self) -> Result<(), MutationError> {
        if self.caps.allows(permissions::SUPPLIERS) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::SUPPLIERS))
        }
    }

    pub fn create(&mut self, dto: &SupplierDto) -> Result<Supplier, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let supplier = Supplier::new_for_insert(seq, dto);
            supplier.validate().map_err(MutationError::invalid)?;
            Ok(supplier)
        })
    }

    pub fn update(&mut self, id: SupplierId, dto: &SupplierDto) -> Result<Supplier, MutationError> {
        self.ensure_manage()?;
        self.list.update(id, |supplier| {
            supplier.update(dto);
            supplier.validate().map_err(MutationError::invalid)
        })
    }

    pub fn toggle_status(&mut self, id: SupplierId) -> Result<RecordStatus, MutationError> {
        self.ensure_manage()?;
        let supplier = self.list.transition(id, |supplier| {
            supplier.status = supplier.status.toggled();
            Ok(())
        })?;
        Ok(supplier.status)
    }

    pub fn remove(&mut self, id: SupplierId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        self.list.remove(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_by_nit() {
        let mut svc = SupplierService::new(Capabilities::full());
        svc.set_search("900123");
        let slice = svc.page_slice();
        assert_eq!(slice.len(), 1);
        assert!(slice[0].nit.starts_with("900123"));
    }

    #[test]
    fn test_create_without_nit_refused() {
        let mut svc = SupplierService::new(Capabilities::full());
        let err = svc
            .create(&SupplierDto {
                name: "Distribelleza".into(),
                ..SupplierDto::default()
            })
            .unwrap_err();
        assert!(matches!(err, MutationError::Validation(_)));
    }
}
