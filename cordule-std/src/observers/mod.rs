//! Standard observer implementations.
//!
//! Adapters wrap an existing [`Observer`](cordule_core::Observer) and nest:
//!
//! ```rust,ignore
//! let observer = LoggingObserver::named(
//!     OnceObserver::new(FilterObserver::new(MeasureObserver, |p: &u32| *p > 10)),
//!     "threshold",
//! );
//! registry.add_observer_with(handle, "measure", observer);
//! ```

pub mod filter;
pub mod logging;
pub mod once;

pub use filter::FilterObserver;
pub use logging::LoggingObserver;
pub use once::OnceObserver;
