use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a type is an abstract contract or a concrete implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Interface,
    Implementation,
}

/// Single-valued markers that can be read from an implementation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Name disambiguating implementations of the same role
    Hint,
    /// Instantiation strategy of the component
    InstantiationStrategy,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Hint => write!(f, "hint"),
            MarkerKind::InstantiationStrategy => write!(f, "instantiation strategy"),
        }
    }
}

/// A field declared on a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,

    /// Identifier of the field's declared type
    pub field_type: String,

    /// Whether the field carries the injection marker
    #[serde(default)]
    pub injectable: bool,

    /// Value of the dependency-hint marker, if present
    #[serde(default)]
    pub hint: Option<String>,
}

impl FieldDescriptor {
    /// A field marked for injection
    pub fn requirement(name: &str, field_type: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            injectable: true,
            hint: None,
        }
    }

    /// A plain field, ignored by dependency extraction
    pub fn plain(name: &str, field_type: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            injectable: false,
            hint: None,
        }
    }

    /// Attach a dependency-hint marker
    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }
}

/// Static description of one type: what it inherits and which markers it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMetadata {
    /// Fully-qualified identifier
    pub name: String,

    pub kind: TypeKind,

    /// Directly implemented interfaces (for an interface: its parent interfaces)
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Role marker. Only meaningful on interfaces.
    #[serde(default)]
    pub role: bool,

    /// Hint marker value
    #[serde(default)]
    pub hint: Option<String>,

    /// Instantiation strategy marker value
    #[serde(default)]
    pub instantiation_strategy: Option<String>,

    /// Fields declared directly on this type, in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeMetadata {
    fn new(name: &str, kind: TypeKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            interfaces: Vec::new(),
            role: false,
            hint: None,
            instantiation_strategy: None,
            fields: Vec::new(),
        }
    }

    /// Describe an interface type
    pub fn interface(name: &str) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// Describe an implementation type
    pub fn implementation(name: &str) -> Self {
        Self::new(name, TypeKind::Implementation)
    }

    /// Add a directly implemented (or extended) interface
    pub fn implements(mut self, interface: &str) -> Self {
        self.interfaces.push(interface.to_string());
        self
    }

    /// Mark this type as a component role
    pub fn role(mut self) -> Self {
        self.role = true;
        self
    }

    /// Set the hint marker
    pub fn hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }

    /// Set the instantiation strategy marker
    pub fn strategy(mut self, strategy: &str) -> Self {
        self.instantiation_strategy = Some(strategy.to_string());
        self
    }

    /// Declare a field
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Read a single-valued marker
    pub fn marker(&self, kind: MarkerKind) -> Option<&str> {
        match kind {
            MarkerKind::Hint => self.hint.as_deref(),
            MarkerKind::InstantiationStrategy => self.instantiation_strategy.as_deref(),
        }
    }
}
