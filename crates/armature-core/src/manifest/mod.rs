//! # Armature Manifest Reader
//!
//! Discovers the component implementations declared for this process.
//!
//! Every copy of the component list resource
//! ([`COMPONENT_LIST`](crate::kernel::constants::COMPONENT_LIST)) found on the
//! search path is read, and the lines of all copies are concatenated in the
//! order the copies were found. Each line names one implementation.
//!
//! - **[`locator`]**: the [`ResourceLocator`] abstraction and the directory
//!   based [`SearchPath`].
//! - **[`reader`]**: [`ManifestReader`] and the [`LinePolicy`] applied to
//!   each line.
//! - **[`error`]**: [`ManifestError`].
pub mod error;
pub mod locator;
pub mod reader;

pub use error::ManifestError;
pub use locator::{ResourceLocator, SearchPath};
pub use reader::{LinePolicy, ManifestReader};
