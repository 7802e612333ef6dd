use std::fmt::Debug;

use crate::introspection::error::IntrospectionError;
use crate::introspection::metadata::{FieldDescriptor, MarkerKind, TypeMetadata};

/// Read-only access to the static structure of types.
///
/// Only [`load_type`](TypeIntrospector::load_type) is required; the queries
/// used during bootstrap are derived from the loaded metadata.
pub trait TypeIntrospector: Send + Sync + Debug {
    /// Resolve an identifier to its metadata
    fn load_type(&self, identifier: &str) -> Result<&TypeMetadata, IntrospectionError>;

    /// Interfaces declared directly on a type, in declaration order
    fn interfaces_of(&self, identifier: &str) -> Result<Vec<String>, IntrospectionError> {
        Ok(self.load_type(identifier)?.interfaces.clone())
    }

    /// Whether the type is an interface carrying the role marker.
    /// A role marker on anything but an interface never counts.
    fn is_role(&self, identifier: &str) -> Result<bool, IntrospectionError> {
        let ty = self.load_type(identifier)?;
        Ok(ty.is_interface() && ty.role)
    }

    fn marker_value(&self, identifier: &str, kind: MarkerKind) -> Result<Option<String>, IntrospectionError> {
        Ok(self.load_type(identifier)?.marker(kind).map(str::to_string))
    }

    /// Fields declared directly on the type that carry the injection marker
    fn injectable_fields(&self, identifier: &str) -> Result<Vec<FieldDescriptor>, IntrospectionError> {
        Ok(self
            .load_type(identifier)?
            .fields
            .iter()
            .filter(|field| field.injectable)
            .cloned()
            .collect())
    }
}
