//! Compiler and runtime records describing how a model is built and run.

use super::common::{DeviceArchitecture, DeviceSpec, Model, ModelInputData};
use serde::{Deserialize, Serialize};

/// Code-generation backend of the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetBackend {
    LlvmCpu,
    VulkanSpirv,
    Cuda,
    Vmvx,
}

/// ABI of the generated executables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetAbi {
    #[serde(rename = "VMVX")]
    Vmvx,
    #[serde(rename = "LINUX_GNU")]
    LinuxGnu,
    #[serde(rename = "LINUX_ANDROID29")]
    LinuxAndroid29,
    #[serde(rename = "LINUX_ANDROID31")]
    LinuxAndroid31,
}

/// Executable loader used by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuntimeLoader {
    EmbeddedElf,
    VmvxModule,
    SystemLibrary,
    None,
}

/// HAL driver used by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuntimeDriver {
    LocalSync,
    LocalTask,
    Vulkan,
    Cuda,
}

/// Architecture, backend and ABI triple a module is compiled for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompileTarget {
    pub target_architecture: DeviceArchitecture,
    pub target_backend: TargetBackend,
    pub target_abi: TargetAbi,
}

/// Settings used to compile a model into a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompileConfig {
    /// Globally unique, taken from [`crate::unique_ids`].
    pub id: String,
    pub tags: Vec<String>,
    pub compile_targets: Vec<CompileTarget>,
}

/// Settings used to run a compiled module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleExecutionConfig {
    pub id: String,
    pub tags: Vec<String>,
    pub loader: RuntimeLoader,
    pub driver: RuntimeDriver,
    /// Benchmark binary that runs the module.
    pub tool: String,
    /// Extra command line flags passed to `tool`.
    #[serde(default)]
    pub extra_flags: Vec<String>,
}

impl ModuleExecutionConfig {
    pub fn new(
        id: impl Into<String>,
        tags: Vec<String>,
        loader: RuntimeLoader,
        driver: RuntimeDriver,
        tool: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tags,
            loader,
            driver,
            tool: tool.into(),
            extra_flags: Vec::new(),
        }
    }

    pub fn with_extra_flags(mut self, extra_flags: Vec<String>) -> Self {
        self.extra_flags = extra_flags;
        self
    }
}

/// Compile `model` with `compile_config`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleGenerationConfig {
    pub compile_config: CompileConfig,
    pub model: Model,
}

impl ModuleGenerationConfig {
    /// Identifies the compiled module: compile config id and model id.
    pub fn composite_id(&self) -> String {
        format!("{}-{}", self.compile_config.id, self.model.id)
    }
}

/// One benchmark run: a compiled module executed with one execution config
/// on one device with one input.
///
/// Only produced by [`crate::benchmarks::generate_e2e_model_run_configs`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct E2EModelRunConfig {
    module_generation_config: ModuleGenerationConfig,
    module_execution_config: ModuleExecutionConfig,
    target_device_spec: DeviceSpec,
    input_data: ModelInputData,
}

impl E2EModelRunConfig {
    pub(crate) fn new(
        module_generation_config: ModuleGenerationConfig,
        module_execution_config: ModuleExecutionConfig,
        target_device_spec: DeviceSpec,
        input_data: ModelInputData,
    ) -> Self {
        Self {
            module_generation_config,
            module_execution_config,
            target_device_spec,
            input_data,
        }
    }

    pub fn module_generation_config(&self) -> &ModuleGenerationConfig {
        &self.module_generation_config
    }

    pub fn module_execution_config(&self) -> &ModuleExecutionConfig {
        &self.module_execution_config
    }

    pub fn target_device_spec(&self) -> &DeviceSpec {
        &self.target_device_spec
    }

    pub fn input_data(&self) -> &ModelInputData {
        &self.input_data
    }
}
