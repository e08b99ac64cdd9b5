pub mod aggregate;
pub mod registration;
pub mod summary;
pub mod table;
pub mod trend;

pub use aggregate::{Deal, DealStage, DealStatus};
pub use registration::DealRegistrationRequest;
pub use trend::{PipelinePoint, TrendRange};
