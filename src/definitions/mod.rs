//! Immutable configuration records consumed by the benchmark pipeline.

pub mod common;
pub mod iree;

pub use common::{
    ArchitectureType, DeviceArchitecture, DevicePlatform, DeviceSpec, InputDataFormat, Model,
    ModelInputData, ModelSourceType, random_model_input_data,
};
pub use iree::{
    CompileConfig, CompileTarget, E2EModelRunConfig, ModuleExecutionConfig,
    ModuleGenerationConfig, RuntimeDriver, RuntimeLoader, TargetAbi, TargetBackend,
};
