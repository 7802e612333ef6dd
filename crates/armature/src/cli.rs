use std::path::PathBuf;

use armature_core::BootstrapConfig;
use armature_core::config::ConfigError;
use armature_core::manifest::LinePolicy;
use clap::{Args, Parser, Subcommand};

/// Armature: component discovery and registration bootstrap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Increase log verbosity (-v: debug, -vv: trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover and register components, then print the registered descriptors
    Bootstrap {
        #[command(flatten)]
        source: SourceArgs,

        /// Print descriptors as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the implementations declared by the component lists on the search path
    Manifest {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where the bootstrap reads from. Flags extend or override the config file.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Bootstrap configuration file (JSON, YAML or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory to search for the component list (repeatable, in order)
    #[arg(short = 'p', long = "search-path")]
    pub search_path: Vec<PathBuf>,

    /// Type table file (repeatable)
    #[arg(short, long = "types")]
    pub types: Vec<PathBuf>,

    /// Name of the component list resource
    #[arg(long)]
    pub manifest_name: Option<String>,

    /// Hint used when a component or requirement has none
    #[arg(long)]
    pub default_hint: Option<String>,

    /// Trim manifest lines and skip blank lines and '#' comments
    #[arg(long)]
    pub trim_lines: bool,
}

impl SourceArgs {
    /// Build the effective configuration: the config file if given, then the flags.
    pub fn to_config(&self) -> Result<BootstrapConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => BootstrapConfig::load(path)?,
            None => BootstrapConfig::default(),
        };
        config.search_path.extend(self.search_path.iter().cloned());
        config.type_tables.extend(self.types.iter().cloned());
        if let Some(name) = &self.manifest_name {
            config.manifest_name = name.clone();
        }
        if let Some(hint) = &self.default_hint {
            config.default_hint = hint.clone();
        }
        if self.trim_lines {
            config.line_policy = LinePolicy::Trimmed;
        }
        Ok(config)
    }
}
