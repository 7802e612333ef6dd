//! # Armature Core Kernel
//!
//! The `kernel` module drives the component bootstrap: it reads the declared
//! implementations, resolves their roles, builds their descriptors and hands
//! them to a component registrar.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Bootstrap**: [`ComponentLoader`](bootstrap::ComponentLoader) in the
//!   `bootstrap` submodule runs the pipeline and reports a
//!   [`BootstrapReport`](bootstrap::BootstrapReport).
//! - **Core Constants**: the component list location and the default hint, in
//!   the `constants` submodule.
//! - **Error Handling**: the aggregated [`Error`](error::Error), its
//!   [`Bootstrap`](error::Error::Bootstrap) wrapper and a `Result` alias, in
//!   the `error` submodule.
pub mod bootstrap;
pub mod constants;
pub mod error;

pub use bootstrap::{BootstrapReport, ComponentLoader};
pub use error::{BootstrapPhase, Error, ErrorKind, Result};
