use crate::shared::error::MutationError;
use crate::shared::list::{Lifecycle, ListController, PageView, Searchable};
use chrono::Weekday;
use contracts::domain::a005_schedule::{Schedule, ScheduleDto, ScheduleId};
use contracts::enums::RecordStatus;
use contracts::system::auth::{permissions, Capabilities};

pub const PAGE_SIZE: usize = 10;
pub const FILTER_EMPLOYEE: &str = "employee";
pub const FILTER_WEEKDAY: &str = "weekday";

/// Código estable del día para el filtro exacto
pub fn weekday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

impl Searchable for Schedule {
    fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.base.description.to_lowercase().contains(&term)
            || self.base.code.to_lowercase().contains(&term)
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_EMPLOYEE => Some(self.employee_id.value().to_string()),
            FILTER_WEEKDAY => Some(weekday_code(self.weekday).to_string()),
            _ => None,
        }
    }
}

impl Lifecycle for Schedule {
    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

/// Módulo de horarios de trabajo
pub struct ScheduleService {
    list: ListController<Schedule>,
    caps: Capabilities,
}

impl ScheduleService {
    pub fn new(caps: Capabilities) -> Self {
        Self::with_items(super::seed::seed(), caps)
    }

    pub fn with_items(items: Vec<Schedule>, caps: Capabilities) -> Self {
        Self {
            list: ListController::new(items, PAGE_SIZE),
            caps,
        }
    }

    pub fn list(&self) -> &ListController<Schedule> {
        &self.list
    }

    pub fn page(&self) -> PageView {
        self.list.page_view()
    }

    pub fn page_slice(&self) -> Vec<&Schedule> {
        self.list.page_slice()
    }

    pub fn set_search(&mut self, term: &str) {
        self.list.set_search(term);
    }

    pub fn set_employee_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_EMPLOYEE, value);
    }

    pub fn set_weekday_filter(&mut self, value: &str) {
        self.list.set_filter(FILTER_WEEKDAY, value);
    }

    pub fn goto_page(&mut self, page: usize) {
        self.list.goto_page(page);
    }

    /// Franjas activas, para el chequeo de disponibilidad de citas
    pub fn active(&self) -> Vec<&Schedule> {
        self.list
            .items()
            .iter()
            .filter(|s| s.status.is_active())
            .collect()
    }

    fn ensure_manage(&self) -> Result<(), MutationError> {
        if self.caps.allows(permissions::SCHEDULES) {
            Ok(())
        } else {
            Err(MutationError::forbidden(permissions::SCHEDULES))
        }
    }

    pub fn create(&mut self, dto: &ScheduleDto) -> Result<Schedule, MutationError> {
        self.ensure_manage()?;
        self.list.create(|seq| {
            let schedule = Schedule::new_for_insert(seq, dto);
            schedule.validate().map_err(MutationError::invalid)?;
            Ok(schedule)
        })
    }

    pub fn update(&mut self, id: ScheduleId, dto: &ScheduleDto) -> Result<Schedule, MutationError> {
        self.ensure_manage()?;
        self.list.update(id, |schedule| {
            schedule.update(dto);
            schedule.validate().map_err(MutationError::invalid)
        })
    }

    pub fn toggle_status(&mut self, id: ScheduleId) -> Result<RecordStatus, MutationError> {
        self.ensure_manage()?;
        let schedule = self.list.transition(id, |schedule| {
            schedule.status = schedule.status.toggled();
            Ok(())
        })?;
        Ok(schedule.status)
    }

    pub fn remove(&mut self, id: ScheduleId) -> Result<(), MutationError> {
        self.ensure_manage()?;
        self.list.remove(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_inverted_times_refused() {
        let mut svc = ScheduleService::with_items(Vec::new(), Capabilities::full());
        let err = svc
            .create(&ScheduleDto {
                employee_id: Some(2),
                weekday: Some(Weekday::Mon),
                start_time: NaiveTime::from_hms_opt(18, 0, 0),
                end_time: NaiveTime::from_hms_opt(8, 0, 0),
                ..ScheduleDto::default()
            })
            .unwrap_err();
        assert!(matches!(err, MutationError::Validation(_)));
    }

    #[test]
    fn test_weekday_filter() {
        let mut svc = ScheduleService::new(Capabilities::full());
        svc.set_weekday_filter("sat");
        assert!(svc
            .page_slice()
            .iter()
            .all(|s| s.weekday == Weekday::Sat));
    }

    #[test]
    fn test_employee_filter_combines_with_weekday() {
        let mut svc = ScheduleService::new(Capabilities::full());
        svc.set_employee_filter("2");
        svc.set_weekday_filter("mon");
        let slice = svc.page_slice();
        assert!(!slice.is_empty());
        assert!(slice
            .iter()
            .all(|s| s.employee_id.value() == 2 && s.weekday == Weekday::Mon));
    }
}
