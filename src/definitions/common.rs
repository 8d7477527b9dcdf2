//! Records shared by every benchmark suite: devices, models and input data.

use crate::unique_ids;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Broad class of hardware a device architecture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArchitectureType {
    Cpu,
    Gpu,
}

/// Concrete architecture of a benchmark device.
///
/// Each variant carries an architecture type, an architecture name and a
/// microarchitecture name, available through the accessor methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceArchitecture {
    #[serde(rename = "VMVX_GENERIC")]
    VmvxGeneric,
    #[serde(rename = "X86_64_CASCADELAKE")]
    X86_64Cascadelake,
    #[serde(rename = "ARMV8_2_A_GENERIC")]
    Armv8_2AGeneric,
    #[serde(rename = "ARMV9_A_GENERIC")]
    Armv9AGeneric,
    #[serde(rename = "RV64_GENERIC")]
    Rv64Generic,
    #[serde(rename = "RV32_GENERIC")]
    Rv32Generic,
    #[serde(rename = "ADRENO_GENERIC")]
    AdrenoGeneric,
    #[serde(rename = "MALI_VALHALL")]
    MaliValhall,
    #[serde(rename = "CUDA_SM80")]
    CudaSm80,
}

impl DeviceArchitecture {
    pub fn architecture_type(self) -> ArchitectureType {
        match self {
            DeviceArchitecture::VmvxGeneric
            | DeviceArchitecture::X86_64Cascadelake
            | DeviceArchitecture::Armv8_2AGeneric
            | DeviceArchitecture::Armv9AGeneric
            | DeviceArchitecture::Rv64Generic
            | DeviceArchitecture::Rv32Generic => ArchitectureType::Cpu,
            DeviceArchitecture::AdrenoGeneric
            | DeviceArchitecture::MaliValhall
            | DeviceArchitecture::CudaSm80 => ArchitectureType::Gpu,
        }
    }

    pub fn architecture(self) -> &'static str {
        match self {
            DeviceArchitecture::VmvxGeneric => "vmvx",
            DeviceArchitecture::X86_64Cascadelake => "x86_64",
            DeviceArchitecture::Armv8_2AGeneric => "armv8.2-a",
            DeviceArchitecture::Armv9AGeneric => "armv9-a",
            DeviceArchitecture::Rv64Generic => "riscv_64",
            DeviceArchitecture::Rv32Generic => "riscv_32",
            DeviceArchitecture::AdrenoGeneric => "adreno",
            DeviceArchitecture::MaliValhall => "mali",
            DeviceArchitecture::CudaSm80 => "cuda",
        }
    }

    pub fn microarchitecture(self) -> &'static str {
        match self {
            DeviceArchitecture::X86_64Cascadelake => "cascadelake",
            DeviceArchitecture::MaliValhall => "valhall",
            DeviceArchitecture::CudaSm80 => "sm_80",
            _ => "generic",
        }
    }

    /// Get architecture by its catalog name, e.g. `X86_64_CASCADELAKE`.
    pub fn get_by_name(name: &str) -> Option<Self> {
        let map: HashMap<&str, DeviceArchitecture> = [
            ("VMVX_GENERIC", DeviceArchitecture::VmvxGeneric),
            ("X86_64_CASCADELAKE", DeviceArchitecture::X86_64Cascadelake),
            ("ARMV8_2_A_GENERIC", DeviceArchitecture::Armv8_2AGeneric),
            ("ARMV9_A_GENERIC", DeviceArchitecture::Armv9AGeneric),
            ("RV64_GENERIC", DeviceArchitecture::Rv64Generic),
            ("RV32_GENERIC", DeviceArchitecture::Rv32Generic),
            ("ADRENO_GENERIC", DeviceArchitecture::AdrenoGeneric),
            ("MALI_VALHALL", DeviceArchitecture::MaliValhall),
            ("CUDA_SM80", DeviceArchitecture::CudaSm80),
        ]
        .iter()
        .cloned()
        .collect();

        map.get(name).copied()
    }
}

impl fmt::Display for DeviceArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.architecture(), self.microarchitecture())
    }
}

/// Operating system family a device runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DevicePlatform {
    GenericLinux,
    GenericAndroid,
}

impl fmt::Display for DevicePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevicePlatform::GenericLinux => write!(f, "linux"),
            DevicePlatform::GenericAndroid => write!(f, "android"),
        }
    }
}

/// Format a model artifact is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelSourceType {
    ExportedLinalgMlir,
    ExportedTflite,
    ExportedTf,
}

/// How model inputs are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputDataFormat {
    Random,
    NumpyNpy,
}

/// A model that can be compiled and benchmarked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub source_type: ModelSourceType,
    pub source_url: String,
    pub entry_function: String,
    /// e.g. `1x224x224x3xf32`.
    pub input_types: Vec<String>,
}

/// Descriptor of the input tensors fed to a model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelInputData {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub data_format: InputDataFormat,
    /// Empty when the data is generated rather than downloaded.
    pub source_url: String,
}

/// Default input descriptor: random data matching the model's input types.
pub fn random_model_input_data() -> ModelInputData {
    ModelInputData {
        id: unique_ids::MODEL_INPUT_DATA_RANDOM.to_string(),
        name: "random".to_string(),
        tags: vec![],
        data_format: InputDataFormat::Random,
        source_url: String::new(),
    }
}

/// A concrete benchmark device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub id: String,
    /// Unique name of the device model, e.g. `pixel-4`.
    pub device_name: String,
    pub architecture: DeviceArchitecture,
    pub platform: DevicePlatform,
    /// Extra attributes such as the core set benchmarks are pinned to.
    pub device_parameters: Vec<String>,
}

impl DeviceSpec {
    /// True when this device matches the given architecture and platform.
    pub fn matches(&self, architecture: DeviceArchitecture, platform: DevicePlatform) -> bool {
        self.architecture == architecture && self.platform == platform
    }
}
