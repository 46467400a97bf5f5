//! Contexts handed to lifecycle and observer callbacks.

use crate::{broker::Broker, handle::ModuleHandle, observer::Observer};
use std::rc::Rc;

/// Context passed to [`Module::init`] and [`Module::destroy`].
///
/// [`Module::init`]: crate::Module::init
/// [`Module::destroy`]: crate::Module::destroy
pub struct ModuleContext<'a, P, R> {
    broker: &'a dyn Broker<P, R>,
    handle: ModuleHandle,
    name: &'a str,
}

impl<'a, P, R> ModuleContext<'a, P, R> {
    /// Create a context for the module registered as `name`.
    pub fn new(broker: &'a dyn Broker<P, R>, handle: ModuleHandle, name: &'a str) -> Self {
        Self {
            broker,
            handle,
            name,
        }
    }

    /// The name the module is registered under.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The module's identity handle.
    pub fn handle(&self) -> ModuleHandle {
        self.handle
    }

    /// The registry driving this module.
    pub fn broker(&self) -> &'a dyn Broker<P, R> {
        self.broker
    }

    /// Subscribe a callback to `request` on behalf of this module.
    pub fn observe<F>(&self, request: &str, callback: F) -> bool
    where
        F: Fn(&ObserverContext<'_, P, R>, &P) -> Option<R> + 'static,
    {
        self.broker.observe(self.handle, request, Rc::new(callback))
    }

    /// Subscribe an [`Observer`] value to `request` on behalf of this module.
    pub fn observe_with<O>(&self, request: &str, observer: O) -> bool
    where
        O: Observer<P, R>,
    {
        self.broker.observe(self.handle, request, Rc::new(observer))
    }

    /// Remove this module's observer on `request`.
    pub fn unobserve(&self, request: &str) -> bool {
        self.broker.remove_observer(self.handle, request)
    }

    /// Dispatch a request through the registry.
    pub fn dispatch(&self, request: &str, params: &P) -> Option<Vec<R>> {
        self.broker.dispatch(request, params)
    }
}

/// Context passed to [`Observer::notify`].
pub struct ObserverContext<'a, P, R> {
    broker: &'a dyn Broker<P, R>,
    request: &'a str,
    owner: ModuleHandle,
}

impl<'a, P, R> ObserverContext<'a, P, R> {
    /// Create a context for the observer `owner` holds on `request`.
    pub fn new(broker: &'a dyn Broker<P, R>, request: &'a str, owner: ModuleHandle) -> Self {
        Self {
            broker,
            request,
            owner,
        }
    }

    /// The request being dispatched.
    pub fn request(&self) -> &'a str {
        self.request
    }

    /// Handle of the module owning the observer being notified.
    pub fn owner(&self) -> ModuleHandle {
        self.owner
    }

    /// The registry running the dispatch.
    pub fn broker(&self) -> &'a dyn Broker<P, R> {
        self.broker
    }

    /// Remove the observer currently being notified.
    ///
    /// The running dispatch carries on with the next observer.
    pub fn unsubscribe(&self) -> bool {
        self.broker.remove_observer(self.owner, self.request)
    }

    /// Dispatch another request from inside this observer.
    pub fn dispatch(&self, request: &str, params: &P) -> Option<Vec<R>> {
        self.broker.dispatch(request, params)
    }
}
