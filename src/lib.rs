pub mod bucket_map;
pub mod error;
pub mod fibonacci;
pub mod options;
pub mod shell;

pub use bucket_map::{FixedBucketMap, Placement};
pub use error::Error;
pub use options::{Lookup, MapOptions, Removal};
