pub mod aggregate;

pub use aggregate::{weekday_display_name, Schedule, ScheduleDto, ScheduleId};
