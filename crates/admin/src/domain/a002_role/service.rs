use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use contracts::domain::a002_role::{Role, RoleDto, RoleId};
use contracts::enums::RecordStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 5;
pub const FILTER_STATUS: &str = "status";

impl Searchable for Role {
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.base.description.to_lowercase().contains(&term)
            || self.base.code.to_lowercase().contains(&term)
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_STATUS => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

impl Lifecycle for Role {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

/// Módulo de roles
///
/// El rol administrador es centinela: ni se desactiva ni se elimina.
pub struct RoleService {
    list: ListController<Role>,
    caps: Capabilities,
}

impl RoleService {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<Role>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<Role> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&Role> {
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
        if self.caps.allows(permissions::ROLES) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::ROLES))
        }
    }

    pub fn create(&mut self, dto: &RoleDto) -> Result<Role, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let role = Role::new_for_insert(seq, dto);
            role.validate().map_err(MutationError::invalid)?;
            Ok(role)
        })
    }

    pub fn update(&mut self, id: RoleId, dto: &RoleDto) -> Result<Role, MutationError> {
        self.ensure_manage()?;
        self.list.update(id, |role| {
            role.update(dto);
            role.validate().map_err(MutationError::invalid)
        })
    }

    pub fn toggle_status(&mut self, id: RoleId) -> Result<RecordStatus, MutationError> {
        self.ensure_manage()?;
        let role = self.list.transition(id, |role| {
            role.status = role.status.toggled();
            Ok(())
        })?;
        Ok(role.status)
    }

    pub fn remove(&mut self, id: RoleId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        self.list.remove(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_never_mutates() {
        let mut svc = RoleService::new(Capabilities::full());
        let admin_id = svc.list().items()[0].base.id;
        let before = svc.list().items().to_vec();

        assert!(matches!(
            svc.toggle_status(admin_id).unwrap_err(),
            MutationError::Protected { .. }
        ));
        assert!(matches!(
            svc.remove(admin_id).unwrap_err(),
            MutationError::Protected { .. }
        ));
        // la colección queda idéntica tras los rechazos
        assert_eq!(svc.list().items(), &before[..]);
    }

    #[test]
    fn test_regular_role_toggles_and_removes() {
        let mut svc = RoleService::new(Capabilities::full());
        let id = svc.list().items()[1].base.id;
        assert_eq!(svc.toggle_status(id).unwrap(), RecordStatus::Inactive);
        svc.remove(id).unwrap();
        assert!(svc.list().find(id).is_none());
    }

    #[test]
    fn test_create_requires_permissions_list() {
        let mut svc = RoleService::new(Capabilities::full());
        let err = svc
            .create(&RoleDto {
                name: "Auxiliar".into(),
                permissions: Vec::new(),
                ..RoleDto::default()
            })
            .unwrap_err();
        assert!(matches!(err, MutationError::Validation(_)));
    }
}
