//! Module lifecycle trait.

use crate::context::ModuleContext;

/// A named unit registered with a registry.
///
/// `P` is the parameter type and `R` the result type of the requests the
/// registry carries.
///
/// # Lifecycle
///
/// - [`init`](Module::init) runs exactly once, synchronously, while the module
///   is being registered. The module is already stored at that point, so it can
///   subscribe observers through the context.
/// - [`destroy`](Module::destroy) runs exactly once, synchronously, before the
///   module entry is deleted. Observers the module still owns are not removed
///   for it; unsubscribe them here if they should stop firing.
///
/// # Example
///
/// ```rust,ignore
/// struct Greeter;
///
/// impl Module<(), String> for Greeter {
///     fn init(&mut self, cx: &ModuleContext<'_, (), String>) {
///         cx.observe("greet", |_cx, _params| Some("hi".to_string()));
///     }
///
///     fn destroy(&mut self, cx: &ModuleContext<'_, (), String>) {
///         cx.unobserve("greet");
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Module` for requests of `{P}` -> `{R}`",
    label = "missing `Module` implementation",
    note = "Modules must implement both `init` and `destroy`."
)]
pub trait Module<P, R>: 'static {
    /// Called once when the module is registered.
    fn init(&mut self, cx: &ModuleContext<'_, P, R>);

    /// Called once when the module is removed.
    fn destroy(&mut self, cx: &ModuleContext<'_, P, R>);
}

// Allow boxed modules (e.g. from a builder) to be registered directly.
impl<P, R, M> Module<P, R> for Box<M>
where
    M: Module<P, R> + ?Sized,
{
    fn init(&mut self, cx: &ModuleContext<'_, P, R>) {
        (**self).init(cx);
    }

    fn destroy(&mut self, cx: &ModuleContext<'_, P, R>) {
        (**self).destroy(cx);
    }
}
