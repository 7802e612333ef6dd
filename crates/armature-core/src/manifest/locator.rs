use std::fmt::Debug;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::manifest::error::ManifestError;

/// Finds every copy of a named resource visible on a search path.
pub trait ResourceLocator: Send + Sync + Debug {
    /// Get the name of this locator
    fn name(&self) -> &str;

    /// All locations of the resource `name`, in search order.
    fn find_resources(&self, name: &str) -> Result<Vec<PathBuf>, ManifestError>;

    /// Open a located resource for reading
    fn open_read(&self, path: &Path) -> Result<Box<dyn Read>, ManifestError>;
}

/// Ordered list of root directories searched for resources.
///
/// A root contributes `root/<name>` when that path exists. Earlier roots are
/// reported first, so the order of the roots is the encounter order of the
/// resources.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    roots: Vec<PathBuf>,
}

impl SearchPath {
    /// Create a search path over the given roots
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a root to the end of the search path
    pub fn push(&mut self, root: impl Into<PathBuf>) -> &mut Self {
        self.roots.push(root.into());
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl ResourceLocator for SearchPath {
    fn name(&self) -> &str {
        "search-path"
    }

    fn find_resources(&self, name: &str) -> Result<Vec<PathBuf>, ManifestError> {
        if name.is_empty() {
            return Err(ManifestError::Locate {
                locator: self.name().to_string(),
                name: name.to_string(),
                message: "Resource name is empty".to_string(),
            });
        }

        let mut found = Vec::new();
        for root in &self.roots {
            if !root.is_dir() {
                log::debug!("Skipping search path root '{}': not a directory", root.display());
                continue;
            }
            let candidate = root.join(name);
            if candidate.exists() {
                log::debug!("Found '{}' at {}", name, candidate.display());
                found.push(candidate);
            }
        }
        Ok(found)
    }

    fn open_read(&self, path: &Path) -> Result<Box<dyn Read>, ManifestError> {
        let file = File::open(path).map_err(|e| ManifestError::read(path, e))?;
        Ok(Box::new(file))
    }
}
