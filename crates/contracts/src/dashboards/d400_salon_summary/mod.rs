pub mod dto;

pub use dto::{
    AppointmentCounters, BreakdownRow, Period, PeriodStats, SalonSummaryRequest,
    SalonSummaryResponse, ServiceRevenue,
};
