//! # Armature Type Introspection
//!
//! Static type metadata read during bootstrap: which interfaces a type
//! implements, which of those are component roles, and the markers carried by
//! implementations and their fields.
//!
//! - **[`metadata`]**: [`TypeMetadata`], [`FieldDescriptor`] and the marker kinds.
//! - **[`introspector`]**: the [`TypeIntrospector`] capability consumed by the
//!   role resolver and the descriptor builder.
//! - **[`table`]**: [`TypeTable`], a registration table implementing
//!   [`TypeIntrospector`], built in code or loaded from JSON/YAML/TOML.
//! - **[`error`]**: [`IntrospectionError`].
pub mod error;
pub mod introspector;
pub mod metadata;
pub mod table;

pub use error::IntrospectionError;
pub use introspector::TypeIntrospector;
pub use metadata::{FieldDescriptor, MarkerKind, TypeKind, TypeMetadata};
pub use table::TypeTable;
