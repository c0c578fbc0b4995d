pub mod form;
pub mod seed;
pub mod service;

pub use service::SupplierService;
