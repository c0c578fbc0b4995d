pub mod repository;
pub mod service;

pub use service::{salon_summary, summary};
