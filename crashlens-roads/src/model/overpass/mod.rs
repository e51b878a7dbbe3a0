mod fetch_error;
mod osm_way_id;
mod overpass_client;
mod overpass_query;
mod overpass_response;
mod overpass_transport;
mod tag_filter;
#[cfg(test)]
pub(crate) mod test_support;

pub use fetch_error::FetchError;
pub use osm_way_id::OsmWayId;
pub use overpass_client::OverpassClient;
pub use overpass_query::OverpassQuery;
pub use overpass_response::{GeometryPoint, OverpassResponse, RawElement};
pub use overpass_transport::{OverpassTransport, ReqwestTransport};
pub use tag_filter::TagFilter;
