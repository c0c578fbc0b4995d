use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use contracts::domain::a010_supply::{Supply, SupplyDto, SupplyId};
use contracts::enums::RecordStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 10;
pub const FILTER_STATUS: &str = "status";
pub const FILTER_CATEGORY: &str = "category";
pub const FILTER_STOCK: &str = "stock";

/// Valores del filtro de existencias
pub const STOCK_LOW: &str = "low";
pub const STOCK_OK: &str = "ok";

impl Searchable for Supply {
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.base.description.to_lowercase().contains(&term)
            || self.base.code.to_lowercase().contains(&term)
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_STATUS => Some(self.status.code().to_string()),
            FILTER_CATEGORY => Some(self.category.code().to_string()),
            FILTER_STOCK => Some(if self.is_low_stock() { STOCK_LOW } else { STOCK_OK }.to_string()),
            _ => None,
        }
    }
}

impl Lifecycle for Supply {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

/// Módulo de insumos
pub struct SupplyService {
    list: ListController<Supply>,
    caps: Capabilities,
}

impl SupplyService {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<Supply>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<Supply> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&Supply> {
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

    /// Filtro por existencias: "low" muestra solo lo que está en o bajo
    /// el umbral de alerta
    pub fn set_stock_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_STOCK, value);
    }

    pub fn goto_page(&mut self, page: usize) {
        self.list.goto_page(page);
    }

    fn ensure_manage(&self) -> Result<(), MutationError> {
        if self.caps.allows(permissions::SUPPLIES) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::SUPPLIES))
        }
    }

    pub fn create(&mut self, dto: &SupplyDto) -> Result<Supply, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let supply = Supply::new_for_insert(seq, dto);
            supply.validate().map_err(MutationError::invalid)?;
            Ok(supply)
        })
    }

    pub fn update(&mut self, id: SupplyId, dto: &SupplyDto) -> Result<Supply, MutationError> {
        self.ensure_manage()?;
        self.list.update(id, |supply| {
            supply.update(dto);
            supply.validate().map_err(MutationError::invalid)
        })
    }

    pub fn toggle_status(&mut self, id: SupplyId) -> Result<RecordStatus, MutationError> {
        self.ensure_manage()?;
        let supply = self.list.transition(id, |supply| {
            supply.status = supply.status.toggled();
            Ok(())
        })?;
        Ok(supply.status)
    }

    pub fn remove(&mut self, id: SupplyId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        self.list.remove(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_filter() {
        let mut svc = SupplyService::new(Capabilities::full());
        svc.set_stock_filter(STOCK_LOW);
        let slice = svc.page_slice();
        assert!(!slice.is_empty());
        assert!(slice.iter().all(|s| s.is_low_stock()));
    }

    #[test]
    fn test_category_and_stock_filters_combine() {
        let mut svc = SupplyService::new(Capabilities::full());
        svc.set_category_filter("capilar");
        svc.set_stock_filter(STOCK_OK);
        assert!(svc
            .page_slice()
            .iter()
            .all(|s| s.category.code() == "capilar" && !s.is_low_stock()));
    }
}
