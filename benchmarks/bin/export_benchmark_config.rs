//! Benchmark config export CLI executable.

use iree_benchmark_suites::benchmarks::{
    BenchmarkExporter, BenchmarkPlatform, BenchmarkResult, ConfigLoader, DEFAULT_CONFIG_PATH,
    print_suite_summary,
};
use log::error;
use std::env;
use std::path::PathBuf;

struct ExportOptions {
    platform: BenchmarkPlatform,
    config_path: String,
    output: Option<PathBuf>,
    summary: bool,
}

enum Command {
    Export(ExportOptions),
    List,
    Usage,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("Benchmark config export failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> BenchmarkResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match parse_args(&args)? {
        Command::List => {
            BenchmarkExporter::list_platforms();
            Ok(())
        }
        Command::Usage => {
            print_usage();
            Ok(())
        }
        Command::Export(options) => {
            let config = ConfigLoader::load_generator_config(&options.config_path)?;
            let suite = BenchmarkExporter::build_suite(options.platform, &config)?;

            if options.summary {
                print_suite_summary(&suite);
            }
            match options.output {
                Some(path) => BenchmarkExporter::write_json(&suite, &path),
                None if !options.summary => {
                    println!("{}", BenchmarkExporter::to_json(&suite)?);
                    Ok(())
                }
                None => Ok(()),
            }
        }
    }
}

fn parse_args(args: &[String]) -> BenchmarkResult<Command> {
    let mut options = ExportOptions {
        platform: BenchmarkPlatform::LinuxX86_64,
        config_path: DEFAULT_CONFIG_PATH.to_string(),
        output: None,
        summary: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => return Ok(Command::List),
            "--help" | "-h" => return Ok(Command::Usage),
            "--summary" => options.summary = true,
            "--platform" | "--config" | "--output" => {
                let Some(value) = iter.next() else {
                    return Ok(Command::Usage);
                };
                match arg.as_str() {
                    "--platform" => options.platform = BenchmarkPlatform::get_by_name(value)?,
                    "--config" => options.config_path = value.clone(),
                    _ => options.output = Some(PathBuf::from(value)),
                }
            }
            _ => return Ok(Command::Usage),
        }
    }

    Ok(Command::Export(options))
}

fn print_usage() {
    println!("Usage:");
    println!("  cargo run --bin export_benchmark_config                        # Print the default suite as JSON");
    println!("  cargo run --bin export_benchmark_config -- --list              # List available platforms");
    println!("  cargo run --bin export_benchmark_config -- --platform <name>   # Generate for a platform");
    println!("  cargo run --bin export_benchmark_config -- --config <path>     # Load generator config (default: {})", DEFAULT_CONFIG_PATH);
    println!("  cargo run --bin export_benchmark_config -- --output <path>     # Write JSON to a file");
    println!("  cargo run --bin export_benchmark_config -- --summary           # Print a summary of the suite");
    println!();
    BenchmarkExporter::list_platforms();
}
