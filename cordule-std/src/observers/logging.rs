//! Logging observer for dispatch observability.

use cordule_core::{Observer, ObserverContext};

/// An observer that logs every notification of the observer it wraps.
///
/// Uses the `tracing` crate when the `tracing` feature is enabled and is a
/// plain pass-through otherwise.
///
/// # Example
///
/// ```rust,ignore
/// let observer = LoggingObserver::named(ChatObserver, "chat");
/// registry.add_observer_with(handle, "message", observer);
/// ```
pub struct LoggingObserver<O> {
    inner: O,
    name: &'static str,
}

impl<O> LoggingObserver<O> {
    /// Wrap `inner` with the default name.
    pub fn new(inner: O) -> Self {
        Self::named(inner, "observer")
    }

    /// Wrap `inner`, using `name` to identify it in log events.
    pub fn named(inner: O, name: &'static str) -> Self {
        Self { inner, name }
    }
}

impl<P, R, O> Observer<P, R> for LoggingObserver<O>
where
    O: Observer<P, R>,
{
    fn notify(&self, cx: &ObserverContext<'_, P, R>, params: &P) -> Option<R> {
        let result = self.inner.notify(cx, params);

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                name = %self.name,
                request = cx.request(),
                owner = %cx.owner(),
                produced = result.is_some(),
                "Observer notified"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = self.name;
        }

        result
    }
}
