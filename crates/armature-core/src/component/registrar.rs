use std::collections::HashMap;

use crate::component::descriptor::ComponentDescriptor;
use crate::component::error::RegistrationError;

/// Registration entry point of a component manager.
pub trait ComponentRegistrar {
    fn register_component(&mut self, descriptor: ComponentDescriptor) -> Result<(), RegistrationError>;
}

/// In-memory descriptor store keyed by `(role, hint)`.
///
/// Registering a descriptor for a key that is already present replaces the
/// previous descriptor in place, keeping its original position.
#[derive(Debug, Default, Clone)]
pub struct DescriptorRegistry {
    index: HashMap<(String, String), usize>,
    descriptors: Vec<ComponentDescriptor>,
}

impl DescriptorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the descriptor registered for a role and hint
    pub fn get(&self, role: &str, role_hint: &str) -> Option<&ComponentDescriptor> {
        self.index
            .get(&(role.to_string(), role_hint.to_string()))
            .map(|&i| &self.descriptors[i])
    }

    /// All descriptors registered for a role, in registration order
    pub fn descriptors_for_role(&self, role: &str) -> Vec<&ComponentDescriptor> {
        self.descriptors.iter().filter(|d| d.role() == role).collect()
    }

    /// All descriptors, in registration order
    pub fn descriptors(&self) -> &[ComponentDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Clear all descriptors.
    pub fn clear(&mut self) {
        self.index.clear();
        self.descriptors.clear();
    }
}

impl ComponentRegistrar for DescriptorRegistry {
    fn register_component(&mut self, descriptor: ComponentDescriptor) -> Result<(), RegistrationError> {
        let missing = if descriptor.role().is_empty() {
            Some("descriptor has no role")
        } else if descriptor.implementation().is_empty() {
            Some("descriptor has no implementation")
        } else {
            None
        };
        if let Some(reason) = missing {
            return Err(RegistrationError::Rejected {
                role: descriptor.role().to_string(),
                role_hint: descriptor.role_hint().to_string(),
                implementation: descriptor.implementation().to_string(),
                reason: reason.to_string(),
            });
        }

        let key = (descriptor.role().to_string(), descriptor.role_hint().to_string());
        match self.index.get(&key) {
            Some(&i) => {
                log::debug!(
                    "Replacing '{}' with '{}' for role '{}' (hint '{}')",
                    self.descriptors[i].implementation(),
                    descriptor.implementation(),
                    key.0,
                    key.1
                );
                self.descriptors[i] = descriptor;
            }
            None => {
                self.index.insert(key, self.descriptors.len());
                self.descriptors.push(descriptor);
            }
        }
        Ok(())
    }
}
