use chrono::{NaiveDate, NaiveTime};
use contracts::domain::a006_appointment::{Appointment, AppointmentDto};
use contracts::enums::AppointmentStatus;
use once_cell::sync::Lazy;

fn build(
    seq: u32,
    client: u32,
    employee: u32,
    service: u32,
    date: (i32, u32, u32),
    time: (u32, u32),
    status: AppointmentStatus,
) -> Appointment {
    let mut appointment = Appointment::new_for_insert(
        seq,
        &AppointmentDto {
            client_id: Some(client),
            employee_id: Some(employee),
            service_id: Some(service),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            time: NaiveTime::from_hms_opt(time.0, time.1, 0),
            ..AppointmentDto::default()
        },
    );
    appointment.status = status;
    appointment
}

static APPOINTMENTS: Lazy<Vec<Appointment>> = Lazy::new(|| {
    vec![
        build(1, 1, 2, 1, (2025, 3, 10), (9, 0), AppointmentStatus::Completed),
        build(2, 2, 2, 3, (2025, 3, 10), (10, 0), AppointmentStatus::Confirmed),
        build(3, 3, 3, 5, (2025, 3, 10), (14, 0), AppointmentStatus::Pending),
        build(4, 4, 2, 2, (2025, 3, 11), (11, 0), AppointmentStatus::Cancelled),
        build(5, 5, 3, 6, (2025, 3, 12), (15, 0), AppointmentStatus::Pending),
        build(6, 6, 2, 8, (2025, 3, 14), (16, 0), AppointmentStatus::NoShow),
    ]
});

/// Citas de ejemplo cargadas al iniciar el módulo
pub fn seed() -> Vec<Appointment> {
    APPOINTMENTS.clone()
}
