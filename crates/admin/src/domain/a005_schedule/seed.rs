use chrono::{NaiveTime, Weekday};
use contracts::domain::a005_schedule::{Schedule, ScheduleDto};
use once_cell::sync::Lazy;

fn hm(hours: u32, minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hours, minutes, 0).expect("hora de ejemplo inválida")
}

fn build(seq: u32, employee: u32, weekday: Weekday, start: NaiveTime, end: NaiveTime) -> Schedule {
    Schedule::new_for_insert(
        seq,
        &ScheduleDto {
            employee_id: Some(employee),
            weekday: Some(weekday),
            start_time: Some(start),
            end_time: Some(end),
            ..ScheduleDto::default()
        },
    )
}

static SCHEDULES: Lazy<Vec<Schedule>> = Lazy::new(|| {
    vec![
        // Julián: lunes a viernes, jornada completa
        build(1, 2, Weekday::Mon, hm(8, 0), hm(18, 0)),
        build(2, 2, Weekday::Tue, hm(8, 0), hm(18, 0)),
        build(3, 2, Weekday::Wed, hm(8, 0), hm(18, 0)),
        build(4, 2, Weekday::Thu, hm(8, 0), hm(18, 0)),
        build(5, 2, Weekday::Fri, hm(8, 0), hm(18, 0)),
        // Daniela: media jornada y sábados
        build(6, 3, Weekday::Mon, hm(13, 0), hm(19, 0)),
        build(7, 3, Weekday::Wed, hm(13, 0), hm(19, 0)),
        build(8, 3, Weekday::Sat, hm(9, 0), hm(14, 0)),
    ]
});

/// Horarios de ejemplo cargados al iniciar el módulo
pub fn seed() -> Vec<Schedule> {
    SCHEDULES.clone()
}
