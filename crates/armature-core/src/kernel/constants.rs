/// Application name
pub const APP_NAME: &str = "Armature";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Location on the search path of the resource listing the component
/// implementations to inspect.
pub const COMPONENT_LIST: &str = "META-INF/components.txt";

/// Hint applied to descriptors and dependencies that carry no explicit hint.
pub const DEFAULT_HINT: &str = "default";

/// Property under which the caller's context is stored on the request
/// container by the context bridge.
pub const REQUEST_CONTEXT_PROPERTY: &str = "context";
