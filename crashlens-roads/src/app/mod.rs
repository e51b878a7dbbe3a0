mod batch_summary;
mod road_data_app;
mod road_data_runner;

pub use batch_summary::{BatchSummary, JurisdictionFailure};
pub use road_data_app::RoadDataApp;
pub use road_data_runner::RoadDataRunner;
