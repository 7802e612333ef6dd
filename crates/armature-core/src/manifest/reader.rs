use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::component::descriptor::ImplementationId;
use crate::kernel::constants;
use crate::manifest::error::ManifestError;
use crate::manifest::locator::ResourceLocator;

/// How lines of a component list are turned into implementation identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePolicy {
    /// Every line is an identifier, blank lines included.
    #[default]
    Verbatim,
    /// Lines are trimmed; blank lines and `#` comments are skipped.
    Trimmed,
}

impl LinePolicy {
    fn accept(self, line: String) -> Option<ImplementationId> {
        match self {
            LinePolicy::Verbatim => Some(line),
            LinePolicy::Trimmed => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }
}

/// Reads the component lists found on a search path.
#[derive(Debug, Clone)]
pub struct ManifestReader {
    locator: Arc<dyn ResourceLocator>,
    resource_name: String,
    line_policy: LinePolicy,
}

impl ManifestReader {
    /// Create a reader for the standard [`COMPONENT_LIST`](constants::COMPONENT_LIST) resource
    pub fn new(locator: Arc<dyn ResourceLocator>) -> Self {
        Self {
            locator,
            resource_name: constants::COMPONENT_LIST.to_string(),
            line_policy: LinePolicy::default(),
        }
    }

    /// Read a differently named resource
    pub fn with_resource_name(mut self, name: impl Into<String>) -> Self {
        self.resource_name = name.into();
        self
    }

    pub fn with_line_policy(mut self, policy: LinePolicy) -> Self {
        self.line_policy = policy;
        self
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn line_policy(&self) -> LinePolicy {
        self.line_policy
    }

    /// List every implementation declared by every copy of the component list.
    ///
    /// Resources are concatenated in the order the locator reports them and
    /// lines keep their order within a resource. Duplicates are preserved.
    pub fn list_declared_implementations(&self) -> Result<Vec<ImplementationId>, ManifestError> {
        let resources = self.locator.find_resources(&self.resource_name)?;
        if resources.is_empty() {
            log::warn!(
                "No '{}' resource found with locator '{}'",
                self.resource_name,
                self.locator.name()
            );
        }

        let mut implementations = Vec::new();
        for path in &resources {
            let count = self.read_resource(path, &mut implementations)?;
            log::debug!("Read {} entries from {}", count, path.display());
        }
        Ok(implementations)
    }

    fn read_resource(&self, path: &Path, out: &mut Vec<ImplementationId>) -> Result<usize, ManifestError> {
        let reader = BufReader::new(self.locator.open_read(path)?);
        let before = out.len();
        for line in reader.lines() {
            let line = line.map_err(|e| ManifestError::read(path, e))?;
            if let Some(id) = self.line_policy.accept(line) {
                out.push(id);
            }
        }
        Ok(out.len() - before)
    }
}
