pub mod aggregate;

pub use aggregate::{Resource, ResourceCategory, ResourcesData};
