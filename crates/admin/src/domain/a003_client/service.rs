use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use contracts::domain::a003_client::{Client, ClientDto, ClientId};
use contracts::enums::RecordStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 10;
pub const FILTER_STATUS: &str = "status";

impl Searchable for Client {
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [
            self.base.description.as_str(),
            self.document_id.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
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

impl Lifecycle for Client {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

/// Módulo de clientes
pub struct ClientService {
    list: ListController<Client>,
    caps: Capabilities,
}

impl ClientService {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<Client>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<Client> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&Client> {
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
        if self.caps.allows(permissions::CLIENTS) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::CLIENTS))
        }
    }

    pub fn create(&mut self, dto: &ClientDto) -> Result<Client, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let client = Client::new_for_insert(seq, dto);
            client.validate().map_err(MutationError::invalid)?;
            Ok(client)
        })
    }

    pub fn update(&mut self, id: ClientId, dto: &ClientDto) -> Result<Client, MutationError> {
        self.ensure_manage()?;
        self.list.update(id, |client| {
            client.update(dto);
            client.validate().map_err(MutationError::invalid)
        })
    }

    pub fn toggle_status(&mut self, id: ClientId) -> Result<RecordStatus, MutationError> {
        self.ensure_manage()?;
        let client = self.list.transition(id, |client| {
            client.status = client.status.toggled();
            Ok(())
        })?;
        Ok(client.status)
    }

    pub fn remove(&mut self, id: ClientId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        self.list.remove(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_by_document() {
        let mut svc = ClientService::new(Capabilities::full());
        svc.set_search("1020");
        let slice = svc.page_slice();
        assert!(!slice.is_empty());
        assert!(slice.iter().all(|c| c.document_id.contains("1020")));
    }

    #[test]
    fn test_update_recomputes_display_name() {
        let mut svc = ClientService::new(Capabilities::full());
        let id = svc.list().items()[0].base.id;
        let updated = svc
            .update(
                id,
                &ClientDto {
                    first_name: "Valentina".into(),
                    last_name: "Rojas Duque".into(),
                    document_id: "1020304050".into(),
                    ..ClientDto::default()
                },
            )
            .unwrap();
        assert_eq!(updated.base.description, "Valentina Rojas Duque");
    }

    #[tokio::test]
    async fn test_modal_submit_commits_through_the_service() {
        use crate::shared::form::FormModel;

        let mut svc = ClientService::with_items(Vec::new(), Capabilities::full());
        let mut modal = FormModel::create(ClientDto::default());
        modal.draft.first_name = "Sofía".into();
        modal.draft.last_name = "Cardona".into();
        modal.draft.document_id = "1020304050".into();

        let svc_ref = &mut svc;
        let created = modal
            .submit(
                |draft| super::super::form::validate(draft),
                |draft| async move { svc_ref.create(&draft) },
            )
            .await
            .unwrap();
        assert_eq!(created.base.id.value(), 1);
        assert_eq!(svc.list().len(), 1);
    }

    #[test]
    fn test_remove_missing_client_is_not_found() {
        let mut svc = ClientService::new(Capabilities::full());
        let err = svc.remove(ClientId::new(999)).unwrap_err();
        assert!(matches!(err, MutationError::NotFound { .. }));
    }
}
