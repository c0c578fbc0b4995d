pub mod aggregate;

pub use aggregate::{Purchase, PurchaseDto, PurchaseId, PurchaseLine, PurchaseLineDto};
