//! Filter observer for conditional notification.

use cordule_core::{Observer, ObserverContext};

/// An observer that only forwards notifications whose params satisfy a
/// predicate. Rejected notifications produce no result.
pub struct FilterObserver<O, F> {
    inner: O,
    predicate: F,
}

impl<O, F> FilterObserver<O, F> {
    /// Create a new filter observer.
    pub fn new(inner: O, predicate: F) -> Self {
        Self { inner, predicate }
    }
}

impl<P, R, O, F> Observer<P, R> for FilterObserver<O, F>
where
    O: Observer<P, R>,
    F: Fn(&P) -> bool + 'static,
{
    fn notify(&self, cx: &ObserverContext<'_, P, R>, params: &P) -> Option<R> {
        if (self.predicate)(params) {
            self.inner.notify(cx, params)
        } else {
            None
        }
    }
}
