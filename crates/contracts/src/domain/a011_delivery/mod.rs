pub mod aggregate;

pub use aggregate::{Delivery, DeliveryDto, DeliveryId};
