use std::str::FromStr;

use crate::component::descriptor::{ComponentDependency, ComponentDescriptor, InstantiationStrategy};
use crate::introspection::{IntrospectionError, MarkerKind, TypeIntrospector};
use crate::kernel::constants;

/// Builds the descriptor of an (implementation, role) pair from the markers
/// on the implementation type and its fields.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    default_hint: String,
}

impl Default for DescriptorBuilder {
    fn default() -> Self {
        Self::new(constants::DEFAULT_HINT)
    }
}

impl DescriptorBuilder {
    /// `default_hint` is used wherever no hint marker is present.
    pub fn new(default_hint: &str) -> Self {
        Self {
            default_hint: default_hint.to_string(),
        }
    }

    pub fn default_hint(&self) -> &str {
        &self.default_hint
    }

    pub fn build(
        &self,
        introspector: &dyn TypeIntrospector,
        implementation: &str,
        role: &str,
    ) -> Result<ComponentDescriptor, IntrospectionError> {
        let role_hint = match introspector.marker_value(implementation, MarkerKind::Hint)? {
            Some(hint) if hint.is_empty() => {
                return Err(IntrospectionError::invalid_marker(implementation, MarkerKind::Hint, "hint is empty"));
            }
            Some(hint) => hint,
            None => self.default_hint.clone(),
        };

        let instantiation_strategy = match introspector.marker_value(implementation, MarkerKind::InstantiationStrategy)? {
            Some(value) => InstantiationStrategy::from_str(&value).map_err(|message| {
                IntrospectionError::invalid_marker(implementation, MarkerKind::InstantiationStrategy, message)
            })?,
            None => InstantiationStrategy::Singleton,
        };

        Ok(ComponentDescriptor::new(
            role.to_string(),
            role_hint,
            implementation.to_string(),
            instantiation_strategy,
            self.dependencies(introspector, implementation)?,
        ))
    }

    /// One dependency per injectable field, in declaration order.
    fn dependencies(
        &self,
        introspector: &dyn TypeIntrospector,
        implementation: &str,
    ) -> Result<Vec<ComponentDependency>, IntrospectionError> {
        introspector
            .injectable_fields(implementation)?
            .into_iter()
            .map(|field| {
                if field.field_type.is_empty() {
                    return Err(IntrospectionError::invalid_marker(
                        implementation,
                        "requirement",
                        format!("field '{}' has no declared type", field.name),
                    ));
                }
                let role_hint = match field.hint {
                    Some(hint) if hint.is_empty() => {
                        return Err(IntrospectionError::invalid_marker(
                            implementation,
                            "requirement hint",
                            format!("hint of field '{}' is empty", field.name),
                        ));
                    }
                    Some(hint) => hint,
                    None => self.default_hint.clone(),
                };
                Ok(ComponentDependency {
                    role: field.field_type,
                    role_hint,
                })
            })
            .collect()
    }
}
