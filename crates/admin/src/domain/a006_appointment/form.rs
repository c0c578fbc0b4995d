use super::availability::is_available_excluding;
use crate::shared::error::FieldErrors;
use contracts::domain::a001_user::User;
use contracts::domain::a003_client::Client;
use contracts::domain::a004_service::Service;
use contracts::domain::a005_schedule::Schedule;
use contracts::domain::a006_appointment::{Appointment, AppointmentDto, AppointmentId};
use contracts::domain::common::AggregateId;

/// Validación del borrador de cita
///
/// Todas las instantáneas de referencia vienen del llamador. Además de
/// los chequeos referenciales se valida la disponibilidad de la franja;
/// al editar, la cita no entra en conflicto consigo misma.
pub fn validate(
    dto: &AppointmentDto,
    clients: &[Client],
    employees: &[User],
    services: &[Service],
    schedules: &[Schedule],
    appointments: &[Appointment],
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match dto.client_id {
        None => {
            errors.insert("clientId", "Seleccione un cliente".into());
        }
        Some(client_id) => {
            if !clients.iter().any(|c| c.base.id.value() == client_id) {
                errors.insert("clientId", "El cliente seleccionado no existe".into());
            }
        }
    }

    match dto.service_id {
        None => {
            errors.insert("serviceId", "Seleccione un servicio".into());
        }
        Some(service_id) => {
            if !services.iter().any(|s| s.base.id.value() == service_id) {
                errors.insert("serviceId", "El servicio seleccionado no existe".into());
            }
        }
    }

    let employee = match dto.employee_id {
        None => {
            errors.insert("employeeId", "Seleccione un empleado".into());
            None
        }
        Some(employee_id) => {
            let found = employees.iter().find(|u| u.base.id.value() == employee_id);
            if found.is_none() {
                errors.insert("employeeId", "El empleado seleccionado no existe".into());
            }
            found
        }
    };

    if dto.date.is_none() {
        errors.insert("date", "La fecha es obligatoria".into());
    }
    if dto.time.is_none() {
        errors.insert("time", "La hora es obligatoria".into());
    }

    if let (Some(employee), Some(date), Some(time)) = (employee, dto.date, dto.time) {
        let own_id = dto.id.map(AppointmentId::from_seq);
        if !is_available_excluding(employee.base.id, date, time, schedules, appointments, own_id) {
            errors.insert(
                "time",
                "El empleado no está disponible en esa fecha y hora".into(),
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Weekday};
    use contracts::domain::a001_user::UserDto;
    use contracts::domain::a003_client::ClientDto;
    use contracts::domain::a004_service::ServiceDto;
    use contracts::domain::a005_schedule::ScheduleDto;
    use contracts::enums::{AppointmentStatus, ServiceCategory};

    fn fixtures() -> (Vec<Client>, Vec<User>, Vec<Service>, Vec<Schedule>, Vec<Appointment>) {
        let clients = vec![Client::new_for_insert(
            1,
            &ClientDto {
                first_name: "Sofía".into(),
                last_name: "Cardona".into(),
                document_id: "1020304050".into(),
                ..ClientDto::default()
            },
        )];
        let employees = vec![User::new_for_insert(
            2,
            &UserDto {
                first_name: "Julián".into(),
                last_name: "Pardo".into(),
                email: "julian@asthro.co".into(),
                role_id: Some(2),
                ..UserDto::default()
            },
        )];
        let services = vec![Service::new_for_insert(
            1,
            &ServiceDto {
                name: "Corte clásico".into(),
                category: Some(ServiceCategory::Corte),
                price: 25_000.0,
                duration_minutes: 30,
                ..ServiceDto::default()
            },
        )];
        let schedules = vec![Schedule::new_for_insert(
            1,
            &ScheduleDto {
                employee_id: Some(2),
                weekday: Some(Weekday::Mon),
                start_time: NaiveTime::from_hms_opt(8, 0, 0),
                end_time: NaiveTime::from_hms_opt(18, 0, 0),
                ..ScheduleDto::default()
            },
        )];
        let mut booked = Appointment::new_for_insert(
            1,
            &AppointmentDto {
                client_id: Some(1),
                employee_id: Some(2),
                service_id: Some(1),
                date: NaiveDate::from_ymd_opt(2025, 3, 10),
                time: NaiveTime::from_hms_opt(10, 0, 0),
                ..AppointmentDto::default()
            },
        );
        booked.status = AppointmentStatus::Confirmed;
        (clients, employees, services, schedules, vec![booked])
    }

    fn draft(day: u32, hour: u32) -> AppointmentDto {
        AppointmentDto {
            client_id: Some(1),
            employee_id: Some(2),
            service_id: Some(1),
            date: NaiveDate::from_ymd_opt(2025, 3, day),
            time: NaiveTime::from_hms_opt(hour, 0, 0),
            ..AppointmentDto::default()
        }
    }

    #[test]
    fn test_conflicting_slot_is_reported_on_time_field() {
        let (clients, employees, services, schedules, appointments) = fixtures();
        let errors = validate(
            &draft(10, 10),
            &clients,
            &employees,
            &services,
            &schedules,
            &appointments,
        );
        assert!(errors
            .get("time")
            .is_some_and(|msg| msg.contains("disponible")));
    }

    #[test]
    fn test_free_slot_passes() {
        let (clients, employees, services, schedules, appointments) = fixtures();
        let errors = validate(
            &draft(10, 11),
            &clients,
            &employees,
            &services,
            &schedules,
            &appointments,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_editing_own_slot_passes() {
        let (clients, employees, services, schedules, appointments) = fixtures();
        let mut dto = draft(10, 10);
        dto.id = Some(1);
        let errors = validate(
            &dto,
            &clients,
            &employees,
            &services,
            &schedules,
            &appointments,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unknown_references_reported_per_field() {
        let (clients, employees, services, schedules, appointments) = fixtures();
        let mut dto = draft(10, 11);
        dto.client_id = Some(9);
        dto.service_id = Some(9);
        let errors = validate(
            &dto,
            &clients,
            &employees,
            &services,
            &schedules,
            &appointments,
        );
        assert!(errors.contains_key("clientId"));
        assert!(errors.contains_key("serviceId"));
    }
}
