//! # Armature Introspection Errors
//!
//! Errors raised while loading type metadata or reading its markers.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("Type '{identifier}' cannot be loaded: no such type is registered")]
    TypeLoad { identifier: String },

    #[error("Invalid {marker} marker on '{type_name}': {message}")]
    InvalidMarker {
        type_name: String,
        marker: String,
        message: String,
    },

    #[error("Type '{0}' is already registered")]
    DuplicateType(String),

    #[error("Failed to read type table '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed type table '{origin}' ({format}): {message}")]
    TableFormat {
        origin: String,
        format: String,
        message: String,
    },
}

impl IntrospectionError {
    pub fn type_load(identifier: impl Into<String>) -> Self {
        IntrospectionError::TypeLoad {
            identifier: identifier.into(),
        }
    }

    pub fn invalid_marker(type_name: &str, marker: impl ToString, message: impl Into<String>) -> Self {
        IntrospectionError::InvalidMarker {
            type_name: type_name.to_string(),
            marker: marker.to_string(),
            message: message.into(),
        }
    }
}
