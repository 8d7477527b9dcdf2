//! Generator configuration and benchmark platform definitions.

use super::benchmark_errors::{BenchmarkError, BenchmarkResult};
use crate::definitions::{
    CompileTarget, DeviceArchitecture, DevicePlatform, TargetAbi, TargetBackend,
};
use crate::unique_ids;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Benchmark binary shipped with the IREE runtime.
pub const MODULE_BENCHMARK_TOOL: &str = "iree-benchmark-module";

/// Thread counts benchmarked with the task-based runtime.
pub const DEFAULT_THREAD_COUNTS: [u32; 3] = [1, 4, 8];

/// Settings read by the config generator. Fields missing from a config file
/// take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// One task-based execution config is generated per entry.
    pub thread_counts: Vec<u32>,
    pub compile_config_id: String,
    pub local_sync_execution_config_id: String,
    /// Per-thread execution config ids are `<base>_<threads>`.
    pub local_task_execution_config_base_id: String,
    pub benchmark_tool: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            thread_counts: DEFAULT_THREAD_COUNTS.to_vec(),
            compile_config_id: unique_ids::IREE_COMPILE_CONFIG_LINUX_CASCADELAKE.to_string(),
            local_sync_execution_config_id: unique_ids::IREE_MODULE_EXECUTION_CONFIG_LOCAL_SYNC
                .to_string(),
            local_task_execution_config_base_id:
                unique_ids::IREE_MODULE_EXECUTION_CONFIG_LOCAL_TASK_BASE.to_string(),
            benchmark_tool: MODULE_BENCHMARK_TOOL.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Validates the configuration
    pub fn validate(&self) -> BenchmarkResult<()> {
        let mut seen = HashSet::new();
        for &threads in &self.thread_counts {
            if threads == 0 {
                return Err(BenchmarkError::InvalidThreadCount { value: threads });
            }
            if !seen.insert(threads) {
                return Err(BenchmarkError::DuplicateThreadCount { value: threads });
            }
        }

        let ids = [
            ("compile_config_id", &self.compile_config_id),
            (
                "local_sync_execution_config_id",
                &self.local_sync_execution_config_id,
            ),
            (
                "local_task_execution_config_base_id",
                &self.local_task_execution_config_base_id,
            ),
        ];
        for (field, id) in ids {
            if id.is_empty() {
                return Err(BenchmarkError::ConfigValidationError {
                    field: field.to_string(),
                    message: "Id must not be empty".to_string(),
                });
            }
        }

        if self.benchmark_tool.is_empty() {
            return Err(BenchmarkError::ConfigValidationError {
                field: "benchmark_tool".to_string(),
                message: "Benchmark tool must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Platforms benchmark suites can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenchmarkPlatform {
    #[serde(rename = "linux-x86_64")]
    LinuxX86_64,
}

impl BenchmarkPlatform {
    pub const ALL: [BenchmarkPlatform; 1] = [BenchmarkPlatform::LinuxX86_64];

    pub fn name(self) -> &'static str {
        match self {
            BenchmarkPlatform::LinuxX86_64 => "linux-x86_64",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BenchmarkPlatform::LinuxX86_64 => "CPU benchmarks on x86_64 Cascade Lake Linux hosts",
        }
    }

    pub fn get_by_name(name: &str) -> BenchmarkResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|platform| platform.name() == name)
            .ok_or_else(|| BenchmarkError::UnknownPlatform {
                name: name.to_string(),
            })
    }

    /// Target the platform's modules are compiled for.
    pub fn compile_target(self) -> CompileTarget {
        match self {
            BenchmarkPlatform::LinuxX86_64 => CompileTarget {
                target_architecture: DeviceArchitecture::X86_64Cascadelake,
                target_backend: TargetBackend::LlvmCpu,
                target_abi: TargetAbi::LinuxGnu,
            },
        }
    }

    /// Architecture and platform used to query the device catalog.
    pub fn device_filter(self) -> (DeviceArchitecture, DevicePlatform) {
        match self {
            BenchmarkPlatform::LinuxX86_64 => (
                DeviceArchitecture::X86_64Cascadelake,
                DevicePlatform::GenericLinux,
            ),
        }
    }
}

impl fmt::Display for BenchmarkPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
