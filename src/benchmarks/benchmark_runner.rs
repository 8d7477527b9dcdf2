//! Loading generator configs and exporting generated suites.

use super::benchmark_errors::{BenchmarkError, BenchmarkResult};
use super::benchmark_types::{BenchmarkPlatform, GeneratorConfig};
use super::iree_benchmarks::IreeBenchmarks;
use crate::definitions::{E2EModelRunConfig, ModuleGenerationConfig};
use crate::device_collections::{DeviceCatalog, default_device_collection};
use crate::model_groups::{ModelGroups, default_model_groups};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Default location of the generator config file.
pub const DEFAULT_CONFIG_PATH: &str = "configs/benchmark_suites.json";

/// Configuration loader that handles JSON files with fallbacks
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration file, falling back to defaults when it does not
    /// exist. A file that exists but cannot be read or parsed is an error.
    pub fn load_config<T>(path: &str, config_name: &str) -> BenchmarkResult<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match fs::read_to_string(path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| BenchmarkError::ConfigParseError {
                    path: path.to_string(),
                    source: e,
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Config file '{}' not found, using default configuration for {}",
                    path, config_name
                );
                Ok(T::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load and validate a generator configuration
    pub fn load_generator_config(path: &str) -> BenchmarkResult<GeneratorConfig> {
        let config: GeneratorConfig = Self::load_config(path, "benchmark_suites")?;
        config.validate()?;
        Ok(config)
    }
}

/// A generated suite in the form handed to the compile and run stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub platform: BenchmarkPlatform,
    pub module_generation_configs: Vec<ModuleGenerationConfig>,
    pub run_configs: Vec<E2EModelRunConfig>,
}

/// Builds suites and writes them out as JSON.
pub struct BenchmarkExporter;

impl BenchmarkExporter {
    /// Build the suite for `platform` against the default catalogs
    pub fn build_suite(
        platform: BenchmarkPlatform,
        config: &GeneratorConfig,
    ) -> BenchmarkResult<BenchmarkSuite> {
        Self::build_suite_with(
            platform,
            config,
            &default_device_collection(),
            &default_model_groups(),
        )
    }

    /// Build the suite for `platform` against the given catalogs
    pub fn build_suite_with<D>(
        platform: BenchmarkPlatform,
        config: &GeneratorConfig,
        devices: &D,
        models: &ModelGroups,
    ) -> BenchmarkResult<BenchmarkSuite>
    where
        D: DeviceCatalog + ?Sized,
    {
        config.validate()?;

        info!("Generating benchmark suite for {}", platform);
        let (module_generation_configs, run_configs) =
            IreeBenchmarks::new(platform, config.clone()).generate_with(devices, models)?;
        info!(
            "Generated {} module generation configs and {} run configs",
            module_generation_configs.len(),
            run_configs.len()
        );

        Ok(BenchmarkSuite {
            platform,
            module_generation_configs,
            run_configs,
        })
    }

    pub fn to_json(suite: &BenchmarkSuite) -> BenchmarkResult<String> {
        Ok(serde_json::to_string_pretty(suite)?)
    }

    pub fn write_json(suite: &BenchmarkSuite, path: &Path) -> BenchmarkResult<()> {
        let json = Self::to_json(suite)?;
        fs::write(path, json)?;
        info!("Wrote benchmark suite to {}", path.display());
        Ok(())
    }

    /// List available platforms
    pub fn list_platforms() {
        println!("Available platforms:");
        for platform in BenchmarkPlatform::ALL {
            println!("  {:<14} - {}", platform.name(), platform.description());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let config = ConfigLoader::load_generator_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"thread_counts": [2, 16], "benchmark_tool": "bench"}}"#).unwrap();

        let config = ConfigLoader::load_generator_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.thread_counts, vec![2, 16]);
        assert_eq!(config.benchmark_tool, "bench");
    }

    #[test]
    fn test_malformed_config_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = ConfigLoader::load_generator_config(file.path().to_str().unwrap());
        assert!(matches!(
            result,
            Err(BenchmarkError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_generation() {
        let config = GeneratorConfig {
            thread_counts: vec![0],
            ..GeneratorConfig::default()
        };
        let result = BenchmarkExporter::build_suite(BenchmarkPlatform::LinuxX86_64, &config);
        assert!(matches!(
            result,
            Err(BenchmarkError::InvalidThreadCount { value: 0 })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let suite =
            BenchmarkExporter::build_suite(BenchmarkPlatform::LinuxX86_64, &GeneratorConfig::default())
                .unwrap();
        let json = BenchmarkExporter::to_json(&suite).unwrap();
        assert!(json.contains("\"platform\": \"linux-x86_64\""));
        assert!(json.contains("--task_topology_group_count=8"));

        let parsed: BenchmarkSuite = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, suite);
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suite.json");
        let suite =
            BenchmarkExporter::build_suite(BenchmarkPlatform::LinuxX86_64, &GeneratorConfig::default())
                .unwrap();
        BenchmarkExporter::write_json(&suite, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: BenchmarkSuite = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.run_configs.len(), suite.run_configs.len());
    }
}
