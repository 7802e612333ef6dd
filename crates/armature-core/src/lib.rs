//! # Armature Core
//!
//! Component discovery and registration bootstrap. At process start, the
//! [`ComponentLoader`] reads the component lists found on the search path,
//! resolves the roles served by each listed implementation, builds one
//! [`ComponentDescriptor`] per (implementation, role) pair and registers it
//! with a [`ComponentRegistrar`].
pub mod component;
pub mod config;
pub mod context;
pub mod introspection;
pub mod kernel;
pub mod manifest;

// Re-export key public types/traits for easier use by the binary
pub use component::{ComponentDescriptor, ComponentRegistrar, DescriptorRegistry};
pub use config::BootstrapConfig;
pub use introspection::{TypeIntrospector, TypeMetadata, TypeTable};
pub use kernel::{BootstrapReport, ComponentLoader};
pub use kernel::error::Error as KernelError;
pub use manifest::{ManifestReader, SearchPath};

#[cfg(test)]
mod tests;
