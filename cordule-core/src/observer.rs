//! Observer callbacks.

use crate::context::ObserverContext;
use std::rc::Rc;

/// A callback subscribed to a request.
///
/// Returning `None` means "no result": the dispatch skips it instead of
/// recording a placeholder.
///
/// Any `Fn(&ObserverContext<'_, P, R>, &P) -> Option<R>` closure is an observer.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Observer` for requests of `{P}` -> `{R}`",
    label = "missing `Observer` implementation",
    note = "Observers must implement `notify`, or be a closure taking `(&ObserverContext, &{P})` and returning `Option<{R}>`."
)]
pub trait Observer<P, R>: 'static {
    /// Called for every dispatch of the request this observer is subscribed to.
    fn notify(&self, cx: &ObserverContext<'_, P, R>, params: &P) -> Option<R>;
}

/// A reference-counted, type-erased observer as stored by registries.
pub type SharedObserver<P, R> = Rc<dyn Observer<P, R>>;

impl<P, R, F> Observer<P, R> for F
where
    F: Fn(&ObserverContext<'_, P, R>, &P) -> Option<R> + 'static,
{
    fn notify(&self, cx: &ObserverContext<'_, P, R>, params: &P) -> Option<R> {
        self(cx, params)
    }
}
