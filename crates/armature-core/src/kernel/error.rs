//! # Armature Core Kernel Errors
//!
//! Defines the error type surfaced by the component bootstrap.
//!
//! Each subsystem owns a typed error ([`ManifestError`], [`IntrospectionError`],
//! [`RegistrationError`], [`ContextError`], [`ConfigError`]). The kernel
//! [`Error`] aggregates them and adds the [`Error::Bootstrap`] wrapper, which
//! is the single fatal failure returned by
//! [`ComponentLoader::initialize`](crate::kernel::bootstrap::ComponentLoader::initialize).
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::component::error::RegistrationError;
use crate::config::error::ConfigError;
use crate::context::error::ContextError;
use crate::introspection::error::IntrospectionError;
use crate::manifest::error::ManifestError;

/// Custom error type for the Armature bootstrap
#[derive(Debug, ThisError)]
pub enum Error {
    /// The component list could not be located or read.
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// A type could not be loaded or carries malformed marker data.
    #[error("Introspection error: {0}")]
    Introspection(#[from] IntrospectionError),

    /// The component registrar refused a descriptor.
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Request context bridge error
    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failure of the bootstrap as a whole. Always carries the underlying cause.
    #[error("Failed to dynamically load components during {phase}{}", .implementation.as_ref().map(|i| format!(" of '{}'", i)).unwrap_or_default())]
    Bootstrap {
        phase: BootstrapPhase,
        implementation: Option<String>,
        #[source]
        source: Box<Error>,
    },

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// The step of the bootstrap pipeline in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum BootstrapPhase {
    #[error("manifest reading")]
    ReadManifest,
    #[error("role resolution")]
    ResolveRoles,
    #[error("descriptor building")]
    BuildDescriptor,
    #[error("registration")]
    Register,
}

/// Coarse classification of an [`Error`], following the bootstrap error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ManifestRead,
    TypeLoad,
    DescriptorBuild,
    RegistrationRejected,
    Configuration,
    Other,
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl Error {
    /// Wrap `source` as the fatal bootstrap failure for `phase`.
    pub fn bootstrap(phase: BootstrapPhase, implementation: Option<&str>, source: impl Into<Error>) -> Self {
        Error::Bootstrap {
            phase,
            implementation: implementation.map(str::to_string),
            source: Box::new(source.into()),
        }
    }

    /// Classify this error. A [`Error::Bootstrap`] is classified by its cause.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Manifest(_) => ErrorKind::ManifestRead,
            Error::Introspection(IntrospectionError::TypeLoad { .. }) => ErrorKind::TypeLoad,
            Error::Introspection(_) => ErrorKind::DescriptorBuild,
            Error::Registration(_) => ErrorKind::RegistrationRejected,
            Error::Config(_) => ErrorKind::Configuration,
            Error::Context(_) | Error::Other(_) => ErrorKind::Other,
            Error::Bootstrap { source, .. } => source.kind(),
        }
    }

    /// The innermost error, skipping any bootstrap wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Bootstrap { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
