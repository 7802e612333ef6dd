//! # Armature Component Registration Errors
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Registration of '{implementation}' as '{role}' (hint '{role_hint}') rejected: {reason}")]
    Rejected {
        role: String,
        role_hint: String,
        implementation: String,
        reason: String,
    },
}
