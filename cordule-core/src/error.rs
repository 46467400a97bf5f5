//! Error types for Cordule.
//!
//! Only registration can fail hard. Every other registry operation reports
//! "not found" or "nothing to do" through its return value.

use thiserror::Error;

/// Errors raised while registering modules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// A module is already registered under this name.
    #[error("a module named `{0}` already exists, unable to load duplicate module")]
    DuplicateModule(String),
}
