use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fully-qualified name of a concrete implementation type
pub type ImplementationId = String;

/// Fully-qualified name of a role (an interface carrying the role marker)
pub type RoleId = String;

/// Whether the component manager shares one instance or creates one per lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstantiationStrategy {
    #[default]
    Singleton,
    PerLookup,
}

impl InstantiationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstantiationStrategy::Singleton => "singleton",
            InstantiationStrategy::PerLookup => "per-lookup",
        }
    }
}

impl fmt::Display for InstantiationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstantiationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "singleton" => Ok(InstantiationStrategy::Singleton),
            "per-lookup" => Ok(InstantiationStrategy::PerLookup),
            _ => Err(format!("unknown instantiation strategy '{}'", s)),
        }
    }
}

/// A requirement of a component on another role
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentDependency {
    pub role: RoleId,
    pub role_hint: String,
}

impl ComponentDependency {
    pub fn new(role: &str, role_hint: &str) -> Self {
        Self {
            role: role.to_string(),
            role_hint: role_hint.to_string(),
        }
    }
}

impl fmt::Display for ComponentDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.role, self.role_hint)
    }
}

/// Describes one registration: an implementation serving a role.
///
/// Built by [`DescriptorBuilder`](crate::component::builder::DescriptorBuilder)
/// and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    role: RoleId,
    role_hint: String,
    implementation: ImplementationId,
    instantiation_strategy: InstantiationStrategy,
    dependencies: Vec<ComponentDependency>,
}

impl ComponentDescriptor {
    pub fn new(
        role: RoleId,
        role_hint: String,
        implementation: ImplementationId,
        instantiation_strategy: InstantiationStrategy,
        dependencies: Vec<ComponentDependency>,
    ) -> Self {
        Self {
            role,
            role_hint,
            implementation,
            instantiation_strategy,
            dependencies,
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn role_hint(&self) -> &str {
        &self.role_hint
    }

    pub fn implementation(&self) -> &str {
        &self.implementation
    }

    pub fn instantiation_strategy(&self) -> InstantiationStrategy {
        self.instantiation_strategy
    }

    pub fn dependencies(&self) -> &[ComponentDependency] {
        &self.dependencies
    }
}

impl fmt::Display for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) -> {} [{}]",
            self.role, self.role_hint, self.implementation, self.instantiation_strategy
        )
    }
}
