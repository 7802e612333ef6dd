//! # Armature Bootstrap Configuration
//!
//! [`BootstrapConfig`] gathers the settings of a bootstrap pass: the search
//! path, the component list name, the default hint, the line policy and the
//! type tables to load. Files are JSON, or YAML/TOML when the `yaml-config` /
//! `toml-config` features are enabled (both are by default).
pub mod error;
pub mod format;
pub mod settings;

pub use error::ConfigError;
pub use format::ConfigFormat;
pub use settings::BootstrapConfig;
