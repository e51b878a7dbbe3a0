mod fc_breakdown;
mod functional_class;
mod highway_category;
mod jurisdiction_dataset;
mod road_record;
pub mod road_ops;

pub use fc_breakdown::FcBreakdown;
pub use functional_class::FunctionalClass;
pub use highway_category::{HighwayCategory, QUERY_CATEGORIES};
pub use jurisdiction_dataset::{JurisdictionDataset, DATASET_VERSION};
pub use road_record::RoadRecord;
