pub mod aggregate;
pub mod detail;
pub mod summary;
pub mod table;

pub use aggregate::{AdoptionHealth, Contact, Customer, UsageTrend};
pub use detail::RenewalUrgency;
