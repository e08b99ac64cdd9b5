pub mod aggregate;
pub mod summary;

pub use aggregate::{TrackStatus, TrainingData, TrainingModule, TrainingTrack};
