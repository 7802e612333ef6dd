//! # Armature Request Context Bridge
//!
//! [`ContextBridge`] lets work running outside a request (background threads,
//! schedulers) use components that expect request state, by initializing and
//! removing that state on an external [`RequestContainer`].
//!
//! Initialization failures are logged, never returned. This is the opposite of
//! the bootstrap's fail-fast policy and the two are kept separate.
pub mod bridge;
pub mod error;

pub use bridge::{ContextBridge, RequestContainer};
pub use error::ContextError;
