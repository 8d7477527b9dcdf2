//! Summaries and tag filters over generated run configs.

use super::benchmark_runner::BenchmarkSuite;
use crate::definitions::E2EModelRunConfig;
use std::collections::BTreeMap;

/// Run config counts broken down by module, execution config and device.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuiteSummary {
    pub num_module_generation_configs: usize,
    pub num_run_configs: usize,
    /// Keyed by [`crate::definitions::ModuleGenerationConfig::composite_id`], so models sharing
    /// a name are counted separately.
    pub runs_per_module: BTreeMap<String, usize>,
    /// Keyed by execution config id.
    pub runs_per_execution_config: BTreeMap<String, usize>,
    /// Keyed by device name.
    pub runs_per_device: BTreeMap<String, usize>,
}

pub fn summarize(suite: &BenchmarkSuite) -> SuiteSummary {
    let mut summary = SuiteSummary {
        num_module_generation_configs: suite.module_generation_configs.len(),
        num_run_configs: suite.run_configs.len(),
        ..SuiteSummary::default()
    };

    for run_config in &suite.run_configs {
        *summary
            .runs_per_module
            .entry(run_config.module_generation_config().composite_id())
            .or_insert(0) += 1;
        *summary
            .runs_per_execution_config
            .entry(run_config.module_execution_config().id.clone())
            .or_insert(0) += 1;
        *summary
            .runs_per_device
            .entry(run_config.target_device_spec().device_name.clone())
            .or_insert(0) += 1;
    }

    summary
}

/// Prints a summary of a generated suite
pub fn print_suite_summary(suite: &BenchmarkSuite) {
    let summary = summarize(suite);

    println!("\n{}", "=".repeat(80));
    println!("Benchmark Suite: {}", suite.platform);
    println!("{}", "=".repeat(80));
    println!(
        "   Module generation configs: {}",
        summary.num_module_generation_configs
    );
    println!("   Run configs: {}", summary.num_run_configs);

    println!("\nRuns per module:");
    for (id, count) in &summary.runs_per_module {
        println!("   {:<80} {}", id, count);
    }

    println!("\nRuns per execution config:");
    for (id, count) in &summary.runs_per_execution_config {
        println!("   {:<48} {}", id, count);
    }

    println!("\nRuns per device:");
    for (name, count) in &summary.runs_per_device {
        println!("   {:<32} {}", name, count);
    }
}

/// Run configs whose execution config, compile config or model carries `tag`,
/// in their original order.
pub fn filter_run_configs_by_tag<'a>(
    run_configs: &'a [E2EModelRunConfig],
    tag: &str,
) -> Vec<&'a E2EModelRunConfig> {
    run_configs
        .iter()
        .filter(|run_config| {
            let generation = run_config.module_generation_config();
            run_config
                .module_execution_config()
                .tags
                .iter()
                .chain(generation.compile_config.tags.iter())
                .chain(generation.model.tags.iter())
                .any(|t| t == tag)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::{BenchmarkExporter, BenchmarkPlatform, GeneratorConfig};
    use crate::device_collections::default_device_collection;
    use crate::model_groups::{ModelGroups, small_models};

    fn default_suite() -> BenchmarkSuite {
        BenchmarkExporter::build_suite(BenchmarkPlatform::LinuxX86_64, &GeneratorConfig::default())
            .unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let suite = default_suite();
        let summary = summarize(&suite);

        assert_eq!(summary.num_run_configs, suite.run_configs.len());
        assert_eq!(
            summary.num_module_generation_configs,
            suite.module_generation_configs.len()
        );
        assert_eq!(summary.runs_per_device.len(), 1);
        assert_eq!(summary.runs_per_device["c2-standard-16"], suite.run_configs.len());
        assert_eq!(summary.runs_per_execution_config.len(), 4);
        assert!(summary
            .runs_per_execution_config
            .values()
            .all(|&count| count == suite.module_generation_configs.len()));
        assert!(summary.runs_per_module.values().all(|&count| count == 4));
    }

    #[test]
    fn test_modules_with_same_model_name_counted_separately() {
        let mut renamed = small_models();
        renamed[1].name = renamed[0].name.clone();
        let models = ModelGroups {
            small: renamed[..2].to_vec(),
            large: vec![],
        };
        let suite = BenchmarkExporter::build_suite_with(
            BenchmarkPlatform::LinuxX86_64,
            &GeneratorConfig::default(),
            &default_device_collection(),
            &models,
        )
        .unwrap();

        let summary = summarize(&suite);
        assert_eq!(summary.runs_per_module.len(), 2);
        for generation_config in &suite.module_generation_configs {
            assert_eq!(summary.runs_per_module[&generation_config.composite_id()], 4);
        }
    }

    #[test]
    fn test_filter_by_thread_tag() {
        let suite = default_suite();
        let filtered = filter_run_configs_by_tag(&suite.run_configs, "4-thread");
        assert_eq!(filtered.len(), suite.module_generation_configs.len());
        assert!(filtered.iter().all(|run_config| run_config
            .module_execution_config()
            .extra_flags
            == vec!["--task_topology_group_count=4"]));
    }

    #[test]
    fn test_filter_matches_model_and_compile_tags() {
        let suite = default_suite();
        assert_eq!(
            filter_run_configs_by_tag(&suite.run_configs, "default-flags").len(),
            suite.run_configs.len()
        );
        let int8 = filter_run_configs_by_tag(&suite.run_configs, "int8");
        assert!(!int8.is_empty());
        assert!(int8.iter().all(|run_config| run_config
            .module_generation_config()
            .model
            .tags
            .contains(&"int8".to_string())));
        assert!(filter_run_configs_by_tag(&suite.run_configs, "no-such-tag").is_empty());
    }
}
