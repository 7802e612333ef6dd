use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::ConfigFormat;
use crate::introspection::error::IntrospectionError;
use crate::introspection::introspector::TypeIntrospector;
use crate::introspection::metadata::{TypeKind, TypeMetadata};

/// On-disk shape of a type table
#[derive(Deserialize, Debug, Default)]
struct RawTypeTable {
    #[serde(default)]
    types: Vec<TypeMetadata>,
}

/// Registration table mapping identifiers to their static type metadata.
///
/// This is the link-time replacement for loading types by name: every type a
/// component list may mention, and every interface those types reach, must be
/// registered here.
#[derive(Debug, Default, Clone)]
pub struct TypeTable {
    types: HashMap<String, TypeMetadata>,
    // Registration order, for deterministic iteration
    order: Vec<String>,
}

impl TypeTable {
    /// Create a new empty type table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type.
    ///
    /// Fails if the name is taken, or if an implementation carries the role
    /// marker: roles may only be declared on interfaces.
    pub fn register(&mut self, metadata: TypeMetadata) -> Result<(), IntrospectionError> {
        if self.types.contains_key(&metadata.name) {
            return Err(IntrospectionError::DuplicateType(metadata.name));
        }
        if metadata.role && metadata.kind == TypeKind::Implementation {
            return Err(IntrospectionError::invalid_marker(
                &metadata.name,
                "role",
                "the role marker may only be placed on interfaces",
            ));
        }
        self.order.push(metadata.name.clone());
        self.types.insert(metadata.name.clone(), metadata);
        Ok(())
    }

    /// Register several types, stopping at the first failure
    pub fn register_all<I>(&mut self, types: I) -> Result<(), IntrospectionError>
    where
        I: IntoIterator<Item = TypeMetadata>,
    {
        for metadata in types {
            self.register(metadata)?;
        }
        Ok(())
    }

    /// Move every type of `other` into this table
    pub fn extend(&mut self, other: TypeTable) -> Result<(), IntrospectionError> {
        let TypeTable { mut types, order } = other;
        for name in order {
            if let Some(metadata) = types.remove(&name) {
                self.register(metadata)?;
            }
        }
        Ok(())
    }

    /// Load a type table file. The format is chosen from the file extension.
    pub fn from_file(path: &Path) -> Result<Self, IntrospectionError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| IntrospectionError::TableFormat {
            origin: path.display().to_string(),
            format: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
            message: "unsupported type table format".to_string(),
        })?;
        let data = fs::read_to_string(path).map_err(|source| IntrospectionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loading type table from {}", path.display());
        Self::from_str_with_format(&data, format, &path.display().to_string())
    }

    /// Parse a type table from a string. `origin` names the source in errors.
    pub fn from_str_with_format(data: &str, format: ConfigFormat, origin: &str) -> Result<Self, IntrospectionError> {
        let raw: RawTypeTable = format.deserialize(data).map_err(|message| IntrospectionError::TableFormat {
            origin: origin.to_string(),
            format: format.extension().to_string(),
            message,
        })?;
        let mut table = Self::new();
        table.register_all(raw.types)?;
        Ok(table)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.types.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered types in registration order
    pub fn types(&self) -> impl Iterator<Item = &TypeMetadata> {
        self.order.iter().filter_map(|name| self.types.get(name))
    }
}

impl TypeIntrospector for TypeTable {
    fn load_type(&self, identifier: &str) -> Result<&TypeMetadata, IntrospectionError> {
        self.types
            .get(identifier)
            .ok_or_else(|| IntrospectionError::type_load(identifier))
    }
}
