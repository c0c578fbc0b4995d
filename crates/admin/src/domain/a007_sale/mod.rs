pub mod form;
pub mod receipt;
pub mod seed;
pub mod service;

pub use receipt::{render_receipt, resolve_receipt, SaleReceipt};
pub use service::SaleService;
