//! Error types for catalog construction and queries.

use crate::definitions::{DeviceArchitecture, DevicePlatform};
use thiserror::Error;

/// Errors raised by device catalogs.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Device id {id} appears more than once in the device collection")]
    DuplicateDeviceId { id: String },

    #[error("Device query for architecture {architecture} on platform {platform} failed: {message}")]
    QueryFailed {
        architecture: DeviceArchitecture,
        platform: DevicePlatform,
        message: String,
    },
}
