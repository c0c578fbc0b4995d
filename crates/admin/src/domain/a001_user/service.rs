use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use contracts::domain::a001_user::{User, UserDto, UserId};
use contracts::enums::RecordStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 8;
pub const FILTER_STATUS: &str = "status";
pub const FILTER_ROLE: &str = "role";

impl Searchable for User {
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [
            self.base.description.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.base.code.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_STATUS => Some(self.status.code().to_string()),
            FILTER_ROLE => Some(self.role_id.value().to_string()),
            _ => None,
        }
    }
}

impl Lifecycle for User {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

/// Módulo de usuarios
///
/// Las mutaciones exigen el permiso "usuarios"; el usuario administrador
/// sembrado es centinela y rechaza desactivación y borrado.
pub struct UserService {
    list: ListController<User>,
    caps: Capabilities,
}

impl UserService {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<User>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<User> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&User> {
        self.list.page_slice()
    }

    pub fn set_search(&mut self, term: &str) {
        self.list.set_search(term);
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_STATUS, value);
    }

    pub fn set_role_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_ROLE, value);
    }

    pub fn goto_page(&mut self, page: usize) {
        self.list.goto_page(page);
    }

    fn ensure_manage(&self) -> Result<(), MutationError> {
        if self.caps.allows(permissions::USERS) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::USERS))
        }
    }

    pub fn create(&mut self, dto: &UserDto) -> Result<User, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let user = User::new_for_insert(seq, dto);
            user.validate().map_err(MutationError::invalid)?;
            Ok(user)
        })
    }

    pub fn update(&mut self, id: UserId, dto: &UserDto) -> Result<User, MutationError> {
        self.ensure_manage()?;
        self.list.update(id, |user| {
            user.update(dto);
            user.validate().map_err(MutationError::invalid)
        })
    }

    pub fn toggle_status(&mut self, id: UserId) -> Result<RecordStatus, MutationError> {
        self.ensure_manage()?;
        let user = self.list.transition(id, |user| {
            user.status = user.status.toggled();
            Ok(())
        })?;
        Ok(user.status)
    }

    pub fn remove(&mut self, id: UserId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        self.list.remove(id).map(|_| ())
    }
}
