pub mod demo;
pub mod fields;
pub mod format;
pub mod normalize;
pub mod property;

pub use normalize::{format_address, normalize, normalize_list};
pub use property::{CanonicalProperty, PropertySummary, RawRecord};
