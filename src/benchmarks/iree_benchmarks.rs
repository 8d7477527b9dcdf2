//! IREE benchmark suite generation.
//!
//! A suite is described by two lists: the modules to compile (one per model,
//! paired with the platform's compile config) and the runs to execute (every
//! module, with every execution config, on every matching device).

use super::benchmark_types::{BenchmarkPlatform, GeneratorConfig};
use crate::definitions::{
    CompileConfig, DeviceSpec, E2EModelRunConfig, Model, ModelInputData, ModuleExecutionConfig,
    ModuleGenerationConfig, RuntimeDriver, RuntimeLoader, random_model_input_data,
};
use crate::device_collections::{DeviceCatalog, default_device_collection};
use crate::errors::CatalogResult;
use crate::model_groups::{ModelGroups, default_model_groups};
use itertools::iproduct;
use log::debug;

/// Module generation configs and the run configs built from them.
pub type GeneratedConfigs = (Vec<ModuleGenerationConfig>, Vec<E2EModelRunConfig>);

/// Builds one run config per (module, execution config, device) combination.
///
/// Modules vary slowest and devices fastest, so the output order is fully
/// determined by the input order.
pub fn generate_e2e_model_run_configs(
    module_generation_configs: &[ModuleGenerationConfig],
    module_execution_configs: &[ModuleExecutionConfig],
    device_specs: &[DeviceSpec],
    input_data: &ModelInputData,
) -> Vec<E2EModelRunConfig> {
    iproduct!(
        module_generation_configs,
        module_execution_configs,
        device_specs
    )
    .map(|(module_generation_config, module_execution_config, device_spec)| {
        E2EModelRunConfig::new(
            module_generation_config.clone(),
            module_execution_config.clone(),
            device_spec.clone(),
            input_data.clone(),
        )
    })
    .collect()
}

/// Config generator for one benchmark platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IreeBenchmarks {
    platform: BenchmarkPlatform,
    config: GeneratorConfig,
}

impl IreeBenchmarks {
    pub fn new(platform: BenchmarkPlatform, config: GeneratorConfig) -> Self {
        Self { platform, config }
    }

    pub fn platform(&self) -> BenchmarkPlatform {
        self.platform
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The single compile config of the platform, with default flags.
    pub fn compile_config(&self) -> CompileConfig {
        CompileConfig {
            id: self.config.compile_config_id.clone(),
            tags: vec!["default-flags".to_string()],
            compile_targets: vec![self.platform.compile_target()],
        }
    }

    /// A synchronous baseline followed by one task-based config per thread
    /// count.
    pub fn default_execution_configs(&self) -> Vec<ModuleExecutionConfig> {
        let mut module_execution_configs = vec![ModuleExecutionConfig::new(
            self.config.local_sync_execution_config_id.clone(),
            vec!["full-inference".to_string(), "default-flags".to_string()],
            RuntimeLoader::EmbeddedElf,
            RuntimeDriver::LocalSync,
            self.config.benchmark_tool.clone(),
        )];

        for &thread_num in &self.config.thread_counts {
            module_execution_configs.push(
                ModuleExecutionConfig::new(
                    format!(
                        "{}_{}",
                        self.config.local_task_execution_config_base_id, thread_num
                    ),
                    vec![
                        format!("{}-thread", thread_num),
                        "full-inference".to_string(),
                        "default-flags".to_string(),
                    ],
                    RuntimeLoader::EmbeddedElf,
                    RuntimeDriver::LocalTask,
                    self.config.benchmark_tool.clone(),
                )
                .with_extra_flags(vec![format!(
                    "--task_topology_group_count={}",
                    thread_num
                )]),
            );
        }

        module_execution_configs
    }

    /// Pairs every model, in order, with the platform's compile config.
    pub fn module_generation_configs(&self, models: &[Model]) -> Vec<ModuleGenerationConfig> {
        let compile_config = self.compile_config();
        models
            .iter()
            .map(|model| ModuleGenerationConfig {
                compile_config: compile_config.clone(),
                model: model.clone(),
            })
            .collect()
    }

    /// Generates the suite against the given catalogs. Errors from the device
    /// query are returned unchanged.
    pub fn generate_with<D>(
        &self,
        devices: &D,
        models: &ModelGroups,
    ) -> CatalogResult<GeneratedConfigs>
    where
        D: DeviceCatalog + ?Sized,
    {
        let default_execution_configs = self.default_execution_configs();
        let module_generation_configs = self.module_generation_configs(&models.all());

        let (architecture, platform) = self.platform.device_filter();
        let device_specs = devices.query_device_specs(architecture, platform)?;

        let e2e_model_run_configs = generate_e2e_model_run_configs(
            &module_generation_configs,
            &default_execution_configs,
            &device_specs,
            &random_model_input_data(),
        );

        debug!(
            "Generated {} module generation configs x {} execution configs x {} devices = {} run configs for {}",
            module_generation_configs.len(),
            default_execution_configs.len(),
            device_specs.len(),
            e2e_model_run_configs.len(),
            self.platform
        );

        Ok((module_generation_configs, e2e_model_run_configs))
    }

    /// Generates the suite against the default device and model catalogs.
    pub fn generate(&self) -> CatalogResult<GeneratedConfigs> {
        self.generate_with(&default_device_collection(), &default_model_groups())
    }
}

/// Generates all compile and run configs for IREE benchmarks.
pub fn generate() -> CatalogResult<GeneratedConfigs> {
    IreeBenchmarks::new(BenchmarkPlatform::LinuxX86_64, GeneratorConfig::default()).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{TargetAbi, TargetBackend};
    use crate::unique_ids;

    #[test]
    fn test_compile_config() {
        let benchmarks =
            IreeBenchmarks::new(BenchmarkPlatform::LinuxX86_64, GeneratorConfig::default());
        let compile_config = benchmarks.compile_config();
        assert_eq!(
            compile_config.id,
            unique_ids::IREE_COMPILE_CONFIG_LINUX_CASCADELAKE
        );
        assert_eq!(compile_config.tags, vec!["default-flags"]);
        assert_eq!(compile_config.compile_targets.len(), 1);
        assert_eq!(
            compile_config.compile_targets[0].target_backend,
            TargetBackend::LlvmCpu
        );
        assert_eq!(
            compile_config.compile_targets[0].target_abi,
            TargetAbi::LinuxGnu
        );
    }

    #[test]
    fn test_baseline_execution_config() {
        let benchmarks =
            IreeBenchmarks::new(BenchmarkPlatform::LinuxX86_64, GeneratorConfig::default());
        let configs = benchmarks.default_execution_configs();
        let baseline = &configs[0];
        assert_eq!(
            baseline.id,
            unique_ids::IREE_MODULE_EXECUTION_CONFIG_LOCAL_SYNC
        );
        assert_eq!(baseline.tags, vec!["full-inference", "default-flags"]);
        assert_eq!(baseline.loader, RuntimeLoader::EmbeddedElf);
        assert_eq!(baseline.driver, RuntimeDriver::LocalSync);
        assert_eq!(baseline.tool, "iree-benchmark-module");
        assert!(baseline.extra_flags.is_empty());
    }

    #[test]
    fn test_no_thread_counts_leaves_only_baseline() {
        let config = GeneratorConfig {
            thread_counts: vec![],
            ..GeneratorConfig::default()
        };
        let benchmarks = IreeBenchmarks::new(BenchmarkPlatform::LinuxX86_64, config);
        let configs = benchmarks.default_execution_configs();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].driver, RuntimeDriver::LocalSync);
    }

    #[test]
    fn test_empty_inputs_produce_no_run_configs() {
        let run_configs =
            generate_e2e_model_run_configs(&[], &[], &[], &random_model_input_data());
        assert!(run_configs.is_empty());
    }
}
