mod cli; // Declare the cli module

use std::error::Error as StdError;
use std::process::ExitCode;

use armature_core::kernel::constants;
use armature_core::{ComponentLoader, DescriptorRegistry, KernelError};
use clap::Parser;
use log::{error, info};

use cli::{CliArgs, Commands};

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(default_level);
    // Ignore a second initialisation attempt
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Print an error followed by each of its causes.
fn report_error(err: &(dyn StdError + 'static)) {
    eprintln!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

fn run(args: CliArgs) -> Result<(), KernelError> {
    match args.command {
        Commands::Bootstrap { source, json } => {
            let config = source.to_config()?;
            let loader = ComponentLoader::from_config(&config)?;

            let mut registry = DescriptorRegistry::new();
            let report = loader.initialize(&mut registry)?;
            info!("Bootstrap complete: {:?}", report);

            if json {
                let out = serde_json::to_string_pretty(registry.descriptors())
                    .map_err(|e| KernelError::Other(format!("Failed to serialize descriptors: {}", e)))?;
                println!("{}", out);
            } else {
                for descriptor in registry.descriptors() {
                    println!("{}", descriptor);
                    for dependency in descriptor.dependencies() {
                        println!("    requires {}", dependency);
                    }
                }
                println!(
                    "Registered {} descriptor(s) from {} declared implementation(s), {} skipped.",
                    registry.len(),
                    report.implementations,
                    report.skipped.len()
                );
            }
        }
        Commands::Manifest { source } => {
            let config = source.to_config()?;
            let loader = ComponentLoader::from_config(&config)?;
            for implementation in loader.reader().list_declared_implementations()? {
                println!("{}", implementation);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    info!("{} v{}", constants::APP_NAME, constants::APP_VERSION);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {}", e);
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
