pub mod a001_user;
pub mod a002_role;
pub mod a003_client;
pub mod a004_service;
pub mod a005_schedule;
pub mod a006_appointment;
pub mod a007_sale;
pub mod a008_purchase;
pub mod a009_supplier;
pub mod a010_supply;
pub mod a011_delivery;
