//! One-shot observer.

use cordule_core::{Observer, ObserverContext};

/// An observer that unsubscribes itself after its first notification.
///
/// The dispatch that fires it still notifies every observer after it.
pub struct OnceObserver<O> {
    inner: O,
}

impl<O> OnceObserver<O> {
    /// Create a new one-shot observer.
    pub fn new(inner: O) -> Self {
        Self { inner }
    }
}

impl<P, R, O> Observer<P, R> for OnceObserver<O>
where
    O: Observer<P, R>,
{
    fn notify(&self, cx: &ObserverContext<'_, P, R>, params: &P) -> Option<R> {
        let result = self.inner.notify(cx, params);
        cx.unsubscribe();
        result
    }
}
