mod dashboard;
mod trend;

pub use dashboard::OverviewDashboard;
