//! Object-safe registry surface.

use crate::{
    error::RegistryError, handle::ModuleHandle, module::Module, observer::SharedObserver,
};

/// The operations a registry exposes to the modules and observers it drives.
///
/// Contexts hold a `&dyn Broker`, which is how callbacks reach back into the
/// registry while it is running them.
pub trait Broker<P, R> {
    /// Register a boxed module under `name` and run its `init`.
    fn register_boxed(
        &self,
        name: &str,
        module: Box<dyn Module<P, R>>,
    ) -> Result<ModuleHandle, RegistryError>;

    /// Notify every observer of `request` and collect their results.
    ///
    /// Returns `None` when nobody observes the request.
    fn dispatch(&self, request: &str, params: &P) -> Option<Vec<R>>;

    /// Subscribe `observer` to `request` on behalf of `owner`.
    ///
    /// Returns `false` if `owner` already observes `request`.
    fn observe(&self, owner: ModuleHandle, request: &str, observer: SharedObserver<P, R>)
    -> bool;

    /// Remove the observer `owner` has on `request`.
    fn remove_observer(&self, owner: ModuleHandle, request: &str) -> bool;

    /// Remove every observer `owner` has, returning how many were removed.
    fn remove_observers_of(&self, owner: ModuleHandle) -> usize;

    /// Run the `destroy` of the module registered as `name` and delete it.
    fn remove_module(&self, name: &str) -> bool;
}
