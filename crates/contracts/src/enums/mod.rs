pub mod appointment_status;
pub mod delivery_status;
pub mod payment_method;
pub mod purchase_status;
pub mod record_status;
pub mod sale_status;
pub mod service_category;
pub mod supply_category;

pub use appointment_status::AppointmentStatus;
pub use delivery_status::DeliveryStatus;
pub use payment_method::PaymentMethod;
pub use purchase_status::PurchaseStatus;
pub use record_status::RecordStatus;
pub use sale_status::SaleStatus;
pub use service_category::ServiceCategory;
pub use supply_category::SupplyCategory;
