//! Núcleo genérico de listas administrables
//!
//! Cada módulo de administración instancia este controlador una vez: la
//! colección en memoria, el término de búsqueda, los filtros exactos y la
//! página actual viven aquí; la vista filtrada y el corte de página se
//! derivan en cada consulta.

pub mod pagination;

pub use pagination::{page_bounds, page_window, total_pages, PageView};

use crate::shared::error::MutationError;
use contracts::domain::common::{AggregateId, AggregateRoot};
use std::collections::BTreeMap;

/// Valor centinela de filtro que acepta cualquier registro
pub const FILTER_ALL: &str = "all";

/// Búsqueda de texto por los campos que declara cada módulo
pub trait Searchable {
    /// El registro coincide con el término (subcadena, sin distinguir
    /// mayúsculas). El controlador ya descarta el término vacío.
    fn matches_search(&self, term: &str) -> bool;

    /// Valor del registro para un campo de filtro exacto
    fn filter_value(&self, field: &str) -> Option<String>;
}

/// Estado de vida consultado por las mutaciones del núcleo
pub trait Lifecycle {
    /// Código del estado actual, para los mensajes de error
    fn status_code(&self) -> &'static str;

    /// Un registro terminal no admite edición, borrado ni transiciones
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Controlador de lista: colección + búsqueda + filtros + paginación
#[derive(Debug, Clone)]
pub struct ListController<R> {
    items: Vec<R>,
    search: String,
    filters: BTreeMap<&'static str, String>,
    page: usize,
    page_size: usize,
}

impl<R> ListController<R>
where
    R: AggregateRoot + Searchable + Lifecycle + Clone,
{
    pub fn new(items: Vec<R>, page_size: usize) -> Self {
        Self {
            items,
            search: String::new(),
            filters: BTreeMap::new(),
            page: 1,
            page_size,
        }
    }

    // ============================================================================
    // Consultas
    // ============================================================================

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: R::Id) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self, field: &str) -> Option<&str> {
        self.filters.get(field).map(String::as_str)
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn matches(&self, record: &R) -> bool {
        let term = self.search.trim();
        if !term.is_empty() && !record.matches_search(term) {
            return false;
        }
        self.filters
            .iter()
            .all(|(field, value)| record.filter_value(field).as_deref() == Some(value.as_str()))
    }

    /// Vista filtrada: AND de la búsqueda y de cada filtro activo,
    /// conservando el orden de inserción. Función pura del estado; dos
    /// llamadas seguidas devuelven lo mismo.
    pub fn filtered(&self) -> Vec<&R> {
        self.items.iter().filter(|r| self.matches(r)).collect()
    }

    /// Corte de la página actual sobre la vista filtrada
    ///
    /// Si la página quedó fuera de rango el corte es vacío y la UI
    /// muestra "sin registros"; nunca es un error.
    pub fn page_slice(&self) -> Vec<&R> {
        let filtered = self.filtered();
        let (start, end) = page_bounds(self.page, self.page_size, filtered.len());
        filtered[start..end].to_vec()
    }

    pub fn page_view(&self) -> PageView {
        PageView::build(self.page, self.page_size, self.filtered().len())
    }

    // ============================================================================
    // Búsqueda, filtros y navegación
    // ============================================================================

    /// Cambiar el término de búsqueda vuelve a la página 1
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Cambiar un filtro vuelve a la página 1; el valor "all" lo limpia
    pub fn set_filter(&mut self, field: &'static str, value: impl Into<String>) {
        let value = value.into();
        if value == FILTER_ALL {
            self.filters.remove(field);
        } else {
            self.filters.insert(field, value);
        }
        self.page = 1;
    }

    /// Ir a una página concreta; fuera de rango es un no-op
    pub fn goto_page(&mut self, page: usize) {
        let total = total_pages(self.filtered().len(), self.page_size);
        if (1..=total).contains(&page) {
            self.page = page;
        }
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.goto_page(self.page.saturating_sub(1));
    }

    // ============================================================================
    // Mutaciones
    // ============================================================================

    /// Secuencia siguiente, calculada sobre el contenido actual de la
    /// colección en el momento de la llamada
    pub fn next_seq(&self) -> u32 {
        self.items
            .iter()
            .map(|r| r.id().seq())
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Crear un registro; el constructor recibe la secuencia asignada
    pub fn create<F>(&mut self, build: F) -> Result<R, MutationError>
    where
        F: FnOnce(u32) -> Result<R, MutationError>,
    {
        let record = build(self.next_seq())?;
        log::debug!(
            "{} creado: {} ({})",
            R::element_name(),
            record.code(),
            record.id().as_string()
        );
        self.items.push(record.clone());
        Ok(record)
    }

    /// Editar un registro existente
    ///
    /// Los cambios se aplican sobre una copia; si la edición falla la
    /// colección queda exactamente como estaba. En caso de éxito se
    /// estampa la fecha de modificación.
    pub fn update<F>(&mut self, id: R::Id, apply: F) -> Result<R, MutationError>
    where
        F: FnOnce(&mut R) -> Result<(), MutationError>,
    {
        let entity = R::element_name();
        let Some(record) = self.items.iter_mut().find(|r| r.id() == id) else {
            return Err(MutationError::not_found(entity, id.as_string()));
        };
        if record.is_terminal() {
            return Err(MutationError::terminal(
                entity,
                id.as_string(),
                record.status_code(),
            ));
        }

        let mut staged = record.clone();
        apply(&mut staged)?;
        staged.metadata_mut().touch();
        *record = staged.clone();
        Ok(staged)
    }

    /// Eliminar un registro; los protegidos y los terminales se rechazan
    pub fn remove(&mut self, id: R::Id) -> Result<R, MutationError> {
        let entity = R::element_name();
        let Some(position) = self.items.iter().position(|r| r.id() == id) else {
            return Err(MutationError::not_found(entity, id.as_string()));
        };
        let record = &self.items[position];
        if record.metadata().is_protected {
            return Err(MutationError::protected(entity, id.as_string()));
        }
        if record.is_terminal() {
            return Err(MutationError::terminal(
                entity,
                id.as_string(),
                record.status_code(),
            ));
        }
        log::debug!("{} eliminado: {}", entity, id.as_string());
        Ok(self.items.remove(position))
    }

    /// Cambio de estado; la validación de la transición concreta la pone
    /// cada módulo en el cierre
    pub fn transition<F>(&mut self, id: R::Id, apply: F) -> Result<R, MutationError>
    where
        F: FnOnce(&mut R) -> Result<(), MutationError>,
    {
        let entity = R::element_name();
        let Some(record) = self.items.iter_mut().find(|r| r.id() == id) else {
            return Err(MutationError::not_found(entity, id.as_string()));
        };
        if record.metadata().is_protected {
            return Err(MutationError::protected(entity, id.as_string()));
        }
        if record.is_terminal() {
            return Err(MutationError::terminal(
                entity,
                id.as_string(),
                record.status_code(),
            ));
        }

        let mut staged = record.clone();
        apply(&mut staged)?;
        staged.metadata_mut().touch();
        *record = staged.clone();
        Ok(staged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_client::{Client, ClientDto, ClientId};

    fn client_dto(first: &str, last: &str) -> ClientDto {
        ClientDto {
            first_name: first.into(),
            last_name: last.into(),
            document_id: "1000".into(),
            ..ClientDto::default()
        }
    }

    fn controller_with(names: &[(&str, &str)], page_size: usize) -> ListController<Client> {
        let items = names
            .iter()
            .enumerate()
            .map(|(i, &(first, last))| {
                Client::new_for_insert(i as u32 + 1, &client_dto(first, last))
            })
            .collect();
        ListController::new(items, page_size)
    }

    fn twelve() -> ListController<Client> {
        let names: Vec<(String, String)> = (1..=12)
            .map(|i| (format!("Cliente{:02}", i), "Prueba".to_string()))
            .collect();
        let refs: Vec<(&str, &str)> = names
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        controller_with(&refs, 5)
    }

    #[test]
    fn test_create_assigns_distinct_sequential_ids() {
        let mut ctl = ListController::<Client>::new(Vec::new(), 5);
        for i in 0..6 {
            ctl.create(|seq| Ok(Client::new_for_insert(seq, &client_dto("Ana", &format!("L{}", i)))))
                .unwrap();
        }
        let mut ids: Vec<u32> = ctl.items().iter().map(|c| c.base.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_seq_computed_from_current_contents() {
        let mut ctl = controller_with(&[("Ana", "Gómez"), ("Luz", "Marín")], 5);
        assert_eq!(ctl.next_seq(), 3);
        ctl.create(|seq| Ok(Client::new_for_insert(seq, &client_dto("Eva", "Ruiz"))))
            .unwrap();
        assert_eq!(ctl.next_seq(), 4);
    }

    #[test]
    fn test_filtered_is_idempotent() {
        let mut ctl = controller_with(&[("Ana", "Gómez"), ("Luz", "Marín"), ("Eva", "Ruiz")], 5);
        ctl.set_search("a");
        let first: Vec<ClientId> = ctl.filtered().iter().map(|c| c.base.id).collect();
        let second: Vec<ClientId> = ctl.filtered().iter().map(|c| c.base.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_is_case_insensitive_and_preserves_order() {
        let mut ctl = controller_with(&[("Ana", "Gómez"), ("Luz", "Marín"), ("Mariana", "Soto")], 5);
        ctl.set_search("MAR");
        let hits: Vec<&str> = ctl
            .filtered()
            .iter()
            .map(|c| c.base.description.as_str())
            .collect();
        assert_eq!(hits, vec!["Luz Marín", "Mariana Soto"]);
    }

    #[test]
    fn test_unmatched_search_yields_empty_view_not_error() {
        let mut ctl = twelve();
        ctl.set_search("zzz");
        assert!(ctl.filtered().is_empty());
        assert_eq!(ctl.page_view().total_pages, 1);
        assert!(ctl.page_slice().is_empty());
    }

    #[test]
    fn test_pages_cover_filtered_view_exactly_once() {
        let mut ctl = twelve();
        let expected: Vec<ClientId> = ctl.filtered().iter().map(|c| c.base.id).collect();
        let mut seen = Vec::new();
        let total = ctl.page_view().total_pages;
        for page in 1..=total {
            ctl.goto_page(page);
            seen.extend(ctl.page_slice().iter().map(|c| c.base.id));
        }
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_twelve_records_paginate_five_five_two() {
        let mut ctl = twelve();
        assert_eq!(ctl.page_view().total_pages, 3);

        ctl.goto_page(2);
        let page2: Vec<u32> = ctl.page_slice().iter().map(|c| c.base.id.value()).collect();
        assert_eq!(page2, vec![6, 7, 8, 9, 10]);

        ctl.goto_page(3);
        let page3: Vec<u32> = ctl.page_slice().iter().map(|c| c.base.id.value()).collect();
        assert_eq!(page3, vec![11, 12]);
    }

    #[test]
    fn test_goto_out_of_range_is_noop() {
        let mut ctl = twelve();
        ctl.goto_page(2);
        ctl.goto_page(9);
        assert_eq!(ctl.current_page(), 2);
        ctl.goto_page(0);
        assert_eq!(ctl.current_page(), 2);
        ctl.prev_page();
        assert_eq!(ctl.current_page(), 1);
        ctl.prev_page();
        assert_eq!(ctl.current_page(), 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut ctl = twelve();
        ctl.goto_page(3);
        assert_eq!(ctl.current_page(), 3);
        ctl.set_search("cliente");
        assert_eq!(ctl.current_page(), 1);

        ctl.goto_page(2);
        ctl.set_filter("status", "inactive");
        assert_eq!(ctl.current_page(), 1);

        // el centinela "all" limpia el filtro
        ctl.set_filter("status", FILTER_ALL);
        assert_eq!(ctl.filter("status"), None);
        assert_eq!(ctl.filtered().len(), 12);
    }

    #[test]
    fn test_update_not_found_is_surfaced() {
        let mut ctl = controller_with(&[("Ana", "Gómez")], 5);
        let missing = ClientId::new(99);
        let err = ctl.update(missing, |_| Ok(())).unwrap_err();
        assert!(matches!(err, MutationError::NotFound { .. }));
    }

    #[test]
    fn test_failed_update_leaves_collection_unchanged() {
        let mut ctl = controller_with(&[("Ana", "Gómez")], 5);
        let id = ctl.items()[0].base.id;
        let before = ctl.items()[0].clone();
        let err = ctl
            .update(id, |c| {
                c.first_name = "Mutada".into();
                Err(MutationError::invalid("rechazada"))
            })
            .unwrap_err();
        assert!(matches!(err, MutationError::Validation(_)));
        assert_eq!(ctl.items()[0], before);
    }

    #[test]
    fn test_protected_record_refuses_remove_and_transition() {
        let mut ctl = controller_with(&[("Admin", "General")], 5);
        let id = ctl.items()[0].base.id;
        // marcar como centinela, igual que el sembrado del administrador
        ctl.items[0].base.metadata.is_protected = true;

        let err = ctl.remove(id).unwrap_err();
        assert!(matches!(err, MutationError::Protected { .. }));
        let err = ctl.transition(id, |_| Ok(())).unwrap_err();
        assert!(matches!(err, MutationError::Protected { .. }));
        assert_eq!(ctl.len(), 1);
    }
}
