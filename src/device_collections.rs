//! Device catalog.
//!
//! The generator only needs to ask a catalog which devices match an
//! architecture and platform. [`DeviceCollection`] is the in-memory catalog of
//! known benchmark devices; other catalogs can implement [`DeviceCatalog`].

use crate::definitions::{DeviceArchitecture, DevicePlatform, DeviceSpec};
use crate::errors::{CatalogError, CatalogResult};
use crate::unique_ids;
use log::debug;
use std::collections::HashSet;

/// Read-only source of device specs.
pub trait DeviceCatalog {
    /// Returns the devices matching `architecture` and `platform`, in catalog
    /// order. An empty result is not an error.
    fn query_device_specs(
        &self,
        architecture: DeviceArchitecture,
        platform: DevicePlatform,
    ) -> CatalogResult<Vec<DeviceSpec>>;
}

/// In-memory collection of device specs with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCollection {
    device_specs: Vec<DeviceSpec>,
}

impl DeviceCollection {
    pub fn new(device_specs: Vec<DeviceSpec>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for spec in &device_specs {
            if !seen.insert(spec.id.as_str()) {
                return Err(CatalogError::DuplicateDeviceId {
                    id: spec.id.clone(),
                });
            }
        }
        Ok(Self { device_specs })
    }
}

impl DeviceCatalog for DeviceCollection {
    fn query_device_specs(
        &self,
        architecture: DeviceArchitecture,
        platform: DevicePlatform,
    ) -> CatalogResult<Vec<DeviceSpec>> {
        let matched: Vec<DeviceSpec> = self
            .device_specs
            .iter()
            .filter(|spec| spec.matches(architecture, platform))
            .cloned()
            .collect();
        debug!(
            "Device query {} on {} matched {} of {} devices",
            architecture,
            platform,
            matched.len(),
            self.device_specs.len()
        );
        Ok(matched)
    }
}

/// GCP c2-standard-16 instance (Cascade Lake), benchmarks use all cores.
pub fn gcp_c2_standard_16() -> DeviceSpec {
    DeviceSpec {
        id: unique_ids::DEVICE_GCP_C2_STANDARD_16.to_string(),
        device_name: "c2-standard-16".to_string(),
        architecture: DeviceArchitecture::X86_64Cascadelake,
        platform: DevicePlatform::GenericLinux,
        device_parameters: vec!["all-cores".to_string()],
    }
}

pub fn pixel_4() -> DeviceSpec {
    DeviceSpec {
        id: unique_ids::DEVICE_PIXEL_4.to_string(),
        device_name: "pixel-4".to_string(),
        architecture: DeviceArchitecture::Armv8_2AGeneric,
        platform: DevicePlatform::GenericAndroid,
        device_parameters: vec!["big-cores".to_string()],
    }
}

pub fn pixel_6_pro() -> DeviceSpec {
    DeviceSpec {
        id: unique_ids::DEVICE_PIXEL_6_PRO.to_string(),
        device_name: "pixel-6-pro".to_string(),
        architecture: DeviceArchitecture::MaliValhall,
        platform: DevicePlatform::GenericAndroid,
        device_parameters: vec!["full-gpu".to_string()],
    }
}

pub fn moto_edge_x30() -> DeviceSpec {
    DeviceSpec {
        id: unique_ids::DEVICE_MOTO_EDGE_X30.to_string(),
        device_name: "moto-edge-x30".to_string(),
        architecture: DeviceArchitecture::AdrenoGeneric,
        platform: DevicePlatform::GenericAndroid,
        device_parameters: vec!["full-gpu".to_string()],
    }
}

/// All known benchmark devices.
pub fn default_device_collection() -> DeviceCollection {
    DeviceCollection {
        device_specs: vec![gcp_c2_standard_16(), pixel_4(), pixel_6_pro(), moto_edge_x30()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_filters_by_architecture_and_platform() {
        let collection = default_device_collection();
        let specs = collection
            .query_device_specs(
                DeviceArchitecture::X86_64Cascadelake,
                DevicePlatform::GenericLinux,
            )
            .unwrap();
        assert_eq!(specs, vec![gcp_c2_standard_16()]);
    }

    #[test]
    fn test_query_without_matches_is_empty() {
        let collection = default_device_collection();
        let specs = collection
            .query_device_specs(
                DeviceArchitecture::X86_64Cascadelake,
                DevicePlatform::GenericAndroid,
            )
            .unwrap();
        assert!(specs.is_empty());
    }

    #[test]
    fn test_query_preserves_catalog_order() {
        let mut second = gcp_c2_standard_16();
        second.id = "second".to_string();
        second.device_name = "c2-standard-60".to_string();
        let collection =
            DeviceCollection::new(vec![gcp_c2_standard_16(), pixel_4(), second.clone()]).unwrap();

        let specs = collection
            .query_device_specs(
                DeviceArchitecture::X86_64Cascadelake,
                DevicePlatform::GenericLinux,
            )
            .unwrap();
        assert_eq!(specs, vec![gcp_c2_standard_16(), second]);
    }

    #[test]
    fn test_duplicate_device_id_rejected() {
        let result = DeviceCollection::new(vec![pixel_4(), pixel_4()]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateDeviceId { ref id }) if id == unique_ids::DEVICE_PIXEL_4
        ));
    }

    #[test]
    fn test_default_collection_is_valid() {
        let collection = default_device_collection();
        let rebuilt = DeviceCollection::new(collection.device_specs.clone()).unwrap();
        assert_eq!(rebuilt, collection);
    }
}
