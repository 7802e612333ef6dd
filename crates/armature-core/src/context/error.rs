//! # Armature Request Context Errors
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Failed to initialize request context: {message}")]
    InitializationFailed { message: String },
}
