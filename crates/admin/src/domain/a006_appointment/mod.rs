pub mod availability;
pub mod form;
pub mod seed;
pub mod service;

pub use availability::is_available;
pub use service::AppointmentService;
