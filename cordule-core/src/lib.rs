//! # cordule-core
//!
//! Core traits for the Cordule module registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! modules that only need to talk to a registry, not to own one.
//!
//! # Building Blocks
//!
//! ## Modules ([`Module`])
//!
//! A named unit with a two-step lifecycle: `init` runs once when the module is
//! registered, `destroy` runs once when it is removed. Registration hands back a
//! [`ModuleHandle`], the module's identity for every later observer operation.
//!
//! ## Observers ([`Observer`])
//!
//! A callback subscribed to a request name on behalf of a module. Dispatching a
//! request notifies every observer in registration order and collects the
//! results that were produced.
//!
//! ## Brokers ([`Broker`])
//!
//! The object-safe surface of a registry. Lifecycle and observer callbacks
//! receive a context ([`ModuleContext`], [`ObserverContext`]) wrapping a
//! `&dyn Broker`, so they can call back into the registry re-entrantly.
//!
//! # Error Types
//!
//! - [`RegistryError`] - Registration failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod broker;
mod context;
mod error;
mod handle;
mod module;
mod observer;

// Re-exports
pub use broker::Broker;
pub use context::{ModuleContext, ObserverContext};
pub use error::RegistryError;
pub use handle::ModuleHandle;
pub use module::Module;
pub use observer::{Observer, SharedObserver};
