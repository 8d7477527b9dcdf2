//! Error types raised by the external catalogs the generator reads.
//!
//! The generator raises no errors of its own; catalog errors propagate to the
//! caller unchanged.

mod catalog_error;

pub use catalog_error::CatalogError;

/// Result type alias for catalog operations and for config generation.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
