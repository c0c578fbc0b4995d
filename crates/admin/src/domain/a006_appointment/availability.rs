//! Disponibilidad de franjas de cita
//!
//! Predicado puro sobre las colecciones de horarios y citas; no lee ni
//! escribe estado de ningún controlador.

use chrono::{Datelike, NaiveDate, NaiveTime};
use contracts::domain::a001_user::UserId;
use contracts::domain::a005_schedule::Schedule;
use contracts::domain::a006_appointment::{Appointment, AppointmentId};

/// Un empleado está disponible en una franja si tiene una ventana de
/// trabajo activa que cubre ese día y hora, y ninguna cita no cancelada
/// ocupa ya la misma fecha y hora.
pub fn is_available(
    employee_id: UserId,
    date: NaiveDate,
    time: NaiveTime,
    schedules: &[Schedule],
    appointments: &[Appointment],
) -> bool {
    is_available_excluding(employee_id, date, time, schedules, appointments, None)
}

/// Variante para la edición: la cita que se está editando no cuenta como
/// conflicto consigo misma.
pub fn is_available_excluding(
    employee_id: UserId,
    date: NaiveDate,
    time: NaiveTime,
    schedules: &[Schedule],
    appointments: &[Appointment],
    exclude: Option<AppointmentId>,
) -> bool {
    let weekday = date.weekday();
    let has_window = schedules
        .iter()
        .any(|s| s.employee_id == employee_id && s.status.is_active() && s.covers(weekday, time));
    if !has_window {
        return false;
    }

    !appointments
        .iter()
        .filter(|a| Some(a.base.id) != exclude)
        .any(|a| a.occupies(employee_id, date, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use contracts::domain::a005_schedule::ScheduleDto;
    use contracts::domain::a006_appointment::AppointmentDto;
    use contracts::enums::AppointmentStatus;

    fn hm(hours: u32, minutes: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hours, minutes, 0).unwrap()
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn monday_schedule() -> Vec<Schedule> {
        vec![Schedule::new_for_insert(
            1,
            &ScheduleDto {
                employee_id: Some(1),
                weekday: Some(Weekday::Mon),
                start_time: Some(hm(8, 0)),
                end_time: Some(hm(18, 0)),
                ..ScheduleDto::default()
            },
        )]
    }

    fn booked_at_ten() -> Vec<Appointment> {
        let mut appointment = Appointment::new_for_insert(
            1,
            &AppointmentDto {
                client_id: Some(1),
                employee_id: Some(1),
                service_id: Some(1),
                date: Some(ymd(2025, 3, 10)),
                time: Some(hm(10, 0)),
                ..AppointmentDto::default()
            },
        );
        appointment.status = AppointmentStatus::Confirmed;
        vec![appointment]
    }

    #[test]
    fn test_slot_taken_by_confirmed_appointment() {
        // 2025-03-10 es lunes
        let employee = UserId::new(1);
        assert!(!is_available(
            employee,
            ymd(2025, 3, 10),
            hm(10, 0),
            &monday_schedule(),
            &booked_at_ten(),
        ));
    }

    #[test]
    fn test_free_slot_inside_window() {
        let employee = UserId::new(1);
        assert!(is_available(
            employee,
            ymd(2025, 3, 10),
            hm(11, 0),
            &monday_schedule(),
            &booked_at_ten(),
        ));
    }

    #[test]
    fn test_day_without_schedule_is_unavailable() {
        // 2025-03-11 es martes y no hay franja configurada
        let employee = UserId::new(1);
        assert!(!is_available(
            employee,
            ymd(2025, 3, 11),
            hm(10, 0),
            &monday_schedule(),
            &booked_at_ten(),
        ));
    }

    #[test]
    fn test_cancelled_appointment_frees_the_slot() {
        let employee = UserId::new(1);
        let mut appointments = booked_at_ten();
        appointments[0].status = AppointmentStatus::Cancelled;
        assert!(is_available(
            employee,
            ymd(2025, 3, 10),
            hm(10, 0),
            &monday_schedule(),
            &appointments,
        ));
    }

    #[test]
    fn test_inactive_window_does_not_count() {
        let employee = UserId::new(1);
        let mut schedules = monday_schedule();
        schedules[0].status = contracts::enums::RecordStatus::Inactive;
        assert!(!is_available(
            employee,
            ymd(2025, 3, 10),
            hm(11, 0),
            &schedules,
            &[],
        ));
    }

    #[test]
    fn test_editing_does_not_conflict_with_itself() {
        let employee = UserId::new(1);
        let appointments = booked_at_ten();
        let own_id = appointments[0].base.id;
        assert!(is_available_excluding(
            employee,
            ymd(2025, 3, 10),
            hm(10, 0),
            &monday_schedule(),
            &appointments,
            Some(own_id),
        ));
    }
}
