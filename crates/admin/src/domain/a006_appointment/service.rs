use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use contracts::domain::a006_appointment::{Appointment, AppointmentDto, AppointmentId};
use contracts::enums::AppointmentStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 5;
pub const FILTER_STATUS: &str = "status";
pub const FILTER_EMPLOYEE: &str = "employee";
pub const FILTER_DATE: &str = "date";

impl Searchable for Appointment {
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.base.description.to_lowercase().contains(&term)
            || self.base.code.to_lowercase().contains(&term)
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_STATUS => Some(self.status.code().to_string()),
            FILTER_EMPLOYEE => Some(self.employee_id.value().to_string()),
            FILTER_DATE => Some(self.date.format("%Y-%m-%d").to_string()),
            _ => None,
        }
    }
}

impl Lifecycle for Appointment {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }

    fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Módulo de citas
///
/// Las citas avanzan por la tabla de transiciones de `AppointmentStatus`;
/// una cita terminal (completada, cancelada o no asistió) ya no admite
/// edición, borrado ni más transiciones.
pub struct AppointmentService {
    list: ListController<Appointment>,
    caps: Capabilities,
}

impl AppointmentService {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<Appointment>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<Appointment> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&Appointment> {
        self.list.page_slice()
    }

    pub fn set_search(&mut self, term: &str) {
        self.list.set_search(term);
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_STATUS, value);
    }

    pub fn set_employee_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_EMPLOYEE, value);
    }

    /// Filtro exacto por fecha en formato "AAAA-MM-DD"
    pub fn set_date_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_DATE, value);
    }

    pub fn goto_page(&mut self, page: usize) {
        self.list.goto_page(page);
    }

    fn ensure_manage(&self) -> Result<(), MutationError> {
        if self.caps.allows(permissions::APPOINTMENTS) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::APPOINTMENTS))
        }
    }

    pub fn create(&mut self, dto: &AppointmentDto) -> Result<Appointment, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let appointment = Appointment::new_for_insert(seq, dto);
            appointment.validate().map_err(MutationError::invalid)?;
            Ok(appointment)
        })
    }

    pub fn update(
        &mut self,
        id: AppointmentId,
        dto: &AppointmentDto,
    ) -> Result<Appointment, MutationError> {
        self.ensure_manage()?;
        self.list.update(id, |appointment| {
            appointment.update(dto);
            appointment.validate().map_err(MutationError::invalid)
        })
    }

    /// Transición validada contra la tabla de estados
    pub fn transition_status(
        &mut self,
        id: AppointmentId,
        next: AppointmentStatus,
    ) -> Result<Appointment, MutationError> {
        self.ensure_manage()?;
        self.list.transition(id, |appointment| {
            if !appointment.status.can_transition(next) {
                return Err(MutationError::invalid(format!(
                    "La cita no puede pasar de {} a {}",
                    appointment.status.display_name(),
                    next.display_name()
                )));
            }
            appointment.status = next;
            Ok(())
        })
    }

    pub fn confirm(&mut self, id: AppointmentId) -> Result<Appointment, MutationError> {
        self.transition_status(id, AppointmentStatus::Confirmed)
    }

    pub fn start(&mut self, id: AppointmentId) -> Result<Appointment, MutationError> {
        self.transition_status(id, AppointmentStatus::InProgress)
    }

    pub fn complete(&mut self, id: AppointmentId) -> Result<Appointment, MutationError> {
        self.transition_status(id, AppointmentStatus::Completed)
    }

    pub fn cancel(&mut self, id: AppointmentId) -> Result<Appointment, MutationError> {
        self.transition_status(id, AppointmentStatus::Cancelled)
    }

    pub fn mark_no_show(&mut self, id: AppointmentId) -> Result<Appointment, MutationError> {
        self.transition_status(id, AppointmentStatus::NoShow)
    }

    pub fn remove(&mut self, id: AppointmentId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        self.list.remove(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn dto(client: u32, employee: u32, service: u32, day: u32, hour: u32) -> AppointmentDto {
        AppointmentDto {
            client_id: Some(client),
            employee_id: Some(employee),
            service_id: Some(service),
            date: NaiveDate::from_ymd_opt(2025, 3, day),
            time: NaiveTime::from_hms_opt(hour, 0, 0),
            ..AppointmentDto::default()
        }
    }

    fn service_with_one() -> (AppointmentService, AppointmentId) {
        let mut svc = AppointmentService::with_items(Vec::new(), Capabilities::full());
        let appointment = svc.create(&dto(1, 2, 1, 10, 9)).unwrap();
        (svc, appointment.base.id)
    }

    #[test]
    fn test_ladder_to_completed() {
        let (mut svc, id) = service_with_one();
        assert_eq!(svc.confirm(id).unwrap().status, AppointmentStatus::Confirmed);
        assert_eq!(svc.start(id).unwrap().status, AppointmentStatus::InProgress);
        assert_eq!(svc.complete(id).unwrap().status, AppointmentStatus::Completed);
    }

    #[test]
    fn test_no_jump_from_pending_to_completed() {
        let (mut svc, id) = service_with_one();
        let err = svc.complete(id).unwrap_err();
        assert!(matches!(err, MutationError::Validation(_)));
        assert_eq!(
            svc.list().find(id).unwrap().status,
            AppointmentStatus::Pending
        );
    }

    #[test]
    fn test_completed_appointment_is_immutable() {
        let (mut svc, id) = service_with_one();
        svc.confirm(id).unwrap();
        svc.start(id).unwrap();
        svc.complete(id).unwrap();
        let before = svc.list().items().to_vec();

        assert!(matches!(
            svc.update(id, &dto(1, 2, 1, 10, 11)).unwrap_err(),
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
        // tres rechazos, cero cambios
        assert_eq!(svc.list().items(), &before[..]);
    }

    #[test]
    fn test_pending_appointment_can_be_removed() {
        let (mut svc, id) = service_with_one();
        svc.remove(id).unwrap();
        assert!(svc.list().is_empty());
    }

    #[test]
    fn test_date_filter_shows_one_day_only() {
        let mut svc = AppointmentService::new(Capabilities::full());
        svc.set_date_filter("2025-03-10");
        assert!(svc
            .page_slice()
            .iter()
            .all(|a| a.date == NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
    }
}
