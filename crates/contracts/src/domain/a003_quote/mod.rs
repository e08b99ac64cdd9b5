pub mod aggregate;
pub mod pricing;
pub mod request;
pub mod summary;
pub mod table;

pub use aggregate::{Quote, QuoteStatus, QuotesData};
pub use request::QuoteRequest;
