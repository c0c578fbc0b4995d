pub mod aggregate;

pub use aggregate::{Appointment, AppointmentDto, AppointmentId};
