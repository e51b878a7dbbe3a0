mod bounding_box;
mod jurisdiction;
mod jurisdiction_registry;
mod jurisdiction_type;

pub use bounding_box::BoundingBox;
pub use jurisdiction::Jurisdiction;
pub use jurisdiction_registry::JurisdictionRegistry;
pub use jurisdiction_type::JurisdictionType;
