//! # Armature Components
//!
//! The component descriptor model and the two pure steps that produce it.
//!
//! - **[`descriptor`]**: [`ComponentDescriptor`], [`ComponentDependency`] and
//!   [`InstantiationStrategy`].
//! - **[`roles`]**: [`RoleResolver`], which finds every role an implementation
//!   serves through its interface hierarchy.
//! - **[`builder`]**: [`DescriptorBuilder`], which reads hint, strategy and
//!   requirement markers into a descriptor.
//! - **[`registrar`]**: the [`ComponentRegistrar`] entry point of a component
//!   manager, and [`DescriptorRegistry`], an in-memory implementation.
//! - **[`error`]**: [`RegistrationError`].
pub mod builder;
pub mod descriptor;
pub mod error;
pub mod registrar;
pub mod roles;

pub use builder::DescriptorBuilder;
pub use descriptor::{ComponentDependency, ComponentDescriptor, ImplementationId, InstantiationStrategy, RoleId};
pub use error::RegistrationError;
pub use registrar::{ComponentRegistrar, DescriptorRegistry};
pub use roles::RoleResolver;
