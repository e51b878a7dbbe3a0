pub mod geometry_ops;
pub mod jurisdiction;
pub mod overpass;
pub mod road;
pub mod storage;
mod road_data_error;

pub use road_data_error::RoadDataError;
