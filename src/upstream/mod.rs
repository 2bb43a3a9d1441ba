mod models;
mod realty;
mod upstream_error;

use crate::domain::RawRecord;

pub use realty::RealtyClient;
pub use upstream_error::UpstreamError;

/// Where property records come from.
///
/// Implementations make at most two sequential calls per operation and never
/// retry. Shared across worker threads, hence `Send + Sync`.
pub trait PropertySource: Send + Sync {
    fn lookup_property_by_address(&self, address: &str) -> Result<RawRecord, UpstreamError>;

    fn list_properties_by_location(
        &self,
        location: &str,
        limit: usize,
    ) -> Result<Vec<RawRecord>, UpstreamError>;
}
