//! Benchmark configuration generator for IREE end-to-end model benchmarks.
//!
//! This library describes the benchmark space as immutable records: which
//! models are compiled with which compile configs, and which compiled modules
//! run with which execution configs on which devices. Compiling modules and
//! running benchmarks is left to the consumers of the generated configs.

pub mod benchmarks;
pub mod definitions;
pub mod device_collections;
pub mod errors;
pub mod model_groups;
pub mod unique_ids;

pub use benchmarks::{BenchmarkPlatform, GeneratorConfig, IreeBenchmarks, generate};
pub use device_collections::{DeviceCatalog, DeviceCollection};
pub use errors::{CatalogError, CatalogResult};
pub use model_groups::ModelGroups;
