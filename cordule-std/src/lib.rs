//! # cordule-std
//!
//! Standard implementations for the Cordule module registry.
//!
//! This crate provides:
//! - **Registry**: [`Registry`], [`RegistryBuilder`]
//! - **Standard observers**: Filter, Logging, Once
//! - **Testing utilities**: lifecycle probes and counting observers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use cordule_core;

// Modules
pub mod observers;
pub mod registry;
pub mod testing;

pub use registry::{Registry, RegistryBuilder};
