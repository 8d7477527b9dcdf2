//! Benchmark suite generation.
//!
//! Enumerates the modules to compile and the end-to-end runs to execute for a
//! benchmark platform, and exports them for the compile and run stages.

pub mod benchmark_errors;
pub mod benchmark_runner;
pub mod benchmark_types;
pub mod iree_benchmarks;
pub mod suite_summary;

pub use benchmark_errors::{BenchmarkError, BenchmarkResult};
pub use benchmark_runner::{BenchmarkExporter, BenchmarkSuite, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use benchmark_types::{
    BenchmarkPlatform, DEFAULT_THREAD_COUNTS, GeneratorConfig, MODULE_BENCHMARK_TOOL,
};
pub use iree_benchmarks::{
    GeneratedConfigs, IreeBenchmarks, generate, generate_e2e_model_run_configs,
};
pub use suite_summary::{SuiteSummary, filter_run_configs_by_tag, print_suite_summary, summarize};
