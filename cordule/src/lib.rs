//! # cordule - In-Process Module Registry
//!
//! `cordule` lets decoupled modules talk through named requests instead of
//! direct references. Modules register under a unique name, subscribe
//! observers to request names, and any of them can dispatch a request to
//! collect what every subscribed observer returns.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cordule::prelude::*;
//!
//! struct Greeter;
//!
//! impl Module<(), String> for Greeter {
//!     fn init(&mut self, cx: &ModuleContext<'_, (), String>) {
//!         cx.observe("greet", |_cx, _params| Some("hi".to_string()));
//!     }
//!
//!     fn destroy(&mut self, cx: &ModuleContext<'_, (), String>) {
//!         cx.unobserve("greet");
//!     }
//! }
//!
//! let registry = Registry::new();
//! registry.register_module("greeter", Greeter)?;
//! assert_eq!(registry.dispatch("greet", &()), Some(vec!["hi".to_string()]));
//! ```
//!
//! ## Re-entrancy
//!
//! Everything runs synchronously on the caller's stack. Observers may call
//! back into the registry while being notified, including removing
//! themselves. Each dispatch keeps its own cursor, so no observer is skipped
//! or notified twice.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Traits
pub use cordule_core::{Broker, Module, Observer, SharedObserver};

// Contexts
pub use cordule_core::{ModuleContext, ObserverContext};

// Identity
pub use cordule_core::ModuleHandle;

// Errors
pub use cordule_core::RegistryError;

pub use cordule_std::registry::{Registry, RegistryBuilder};

/// Standard observer implementations.
pub mod observers {
    pub use cordule_std::observers::{FilterObserver, LoggingObserver, OnceObserver};
}

/// Testing utilities.
pub mod testing {
    pub use cordule_std::testing::{
        CountingObserver, LifecycleLog, LifecycleProbe, RecordingObserver,
    };
}

/// Prelude module - common imports for Cordule.
///
/// # Usage
///
/// ```rust,ignore
/// use cordule::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Broker, Module, ModuleContext, ModuleHandle, Observer, ObserverContext, Registry,
        RegistryBuilder, RegistryError,
    };
}
