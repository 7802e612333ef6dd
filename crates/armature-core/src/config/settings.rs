use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::config::format::ConfigFormat;
use crate::kernel::constants;
use crate::manifest::LinePolicy;

fn default_manifest_name() -> String {
    constants::COMPONENT_LIST.to_string()
}

fn default_hint() -> String {
    constants::DEFAULT_HINT.to_string()
}

/// Settings for one bootstrap pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Root directories searched for the component list, in order
    #[serde(default)]
    pub search_path: Vec<PathBuf>,

    /// Name of the component list resource, relative to each root
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,

    /// Hint given to descriptors and dependencies without an explicit one
    #[serde(default = "default_hint")]
    pub default_hint: String,

    #[serde(default)]
    pub line_policy: LinePolicy,

    /// Type table files, merged in order
    #[serde(default)]
    pub type_tables: Vec<PathBuf>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            search_path: Vec::new(),
            manifest_name: default_manifest_name(),
            default_hint: default_hint(),
            line_policy: LinePolicy::default(),
            type_tables: Vec::new(),
        }
    }
}

impl BootstrapConfig {
    /// Load configuration from a file, choosing the format from its extension.
    ///
    /// Relative search path roots and type table paths are resolved against
    /// the directory containing the configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_str_with_format(&data, format)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        log::debug!("Loaded bootstrap configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a string
    pub fn from_str_with_format(data: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        format.deserialize(data).map_err(|message| ConfigError::Deserialization {
            format: format.extension().to_string(),
            message,
        })
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for path in self.search_path.iter_mut().chain(self.type_tables.iter_mut()) {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
