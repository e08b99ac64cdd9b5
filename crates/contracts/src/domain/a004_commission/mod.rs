pub mod aggregate;
pub mod summary;
pub mod table;

pub use aggregate::{Commission, CommissionStatus, RevenueData};
