//! The module registry.
//!
//! A [`Registry`] keeps two tables: modules by name, and observer sequences by
//! request name. Dispatching a request walks its sequence in registration
//! order and collects what the observers return.
//!
//! All operations take `&self` and are re-entrant: observers and lifecycle
//! callbacks may register, subscribe, unsubscribe, remove modules and dispatch
//! while the registry is running them. No internal borrow is held across a
//! callback.
//!
//! # Example
//!
//! ```rust,ignore
//! let registry = Registry::<(), &'static str>::new();
//! let a = registry.register_module("a", ModuleA)?;
//! registry.add_observer(a, "greet", |_cx, _params| Some("hi"));
//!
//! assert_eq!(registry.dispatch("greet", &()), Some(vec!["hi"]));
//! assert_eq!(registry.dispatch("unknown", &()), None);
//! ```

mod builder;
mod cursor;

pub use builder::RegistryBuilder;

use cordule_core::{
    Broker, Module, ModuleContext, ModuleHandle, Observer, ObserverContext, RegistryError,
    SharedObserver,
};
use cursor::{ActiveCursor, CursorStack};
use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    fmt,
    rc::Rc,
};

type SharedModule<P, R> = Rc<RefCell<dyn Module<P, R>>>;

struct ModuleSlot<P, R> {
    handle: ModuleHandle,
    module: SharedModule<P, R>,
}

struct Observation<P, R> {
    owner: ModuleHandle,
    observer: SharedObserver<P, R>,
}

struct State<P, R> {
    modules: HashMap<String, ModuleSlot<P, R>>,
    names: HashMap<ModuleHandle, String>,
    observers: HashMap<String, Vec<Observation<P, R>>>,
    // Modules asked to leave while their own `init` was running.
    pending_removals: HashSet<ModuleHandle>,
}

impl<P, R> State<P, R> {
    fn new() -> Self {
        Self {
            modules: HashMap::new(),
            names: HashMap::new(),
            observers: HashMap::new(),
            pending_removals: HashSet::new(),
        }
    }
}

/// A registry of named modules and the observers they subscribe.
///
/// `P` is the parameter type handed to observers, `R` the type of the results
/// they return.
pub struct Registry<P, R> {
    name: Option<String>,
    state: RefCell<State<P, R>>,
    cursors: CursorStack,
    next_handle: Cell<u64>,
}

impl<P: 'static, R: 'static> Registry<P, R> {
    /// Create an empty, unnamed registry.
    pub fn new() -> Self {
        Self::with_name(None)
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder<P, R> {
        RegistryBuilder::new()
    }

    pub(crate) fn with_name(name: Option<String>) -> Self {
        Self {
            name,
            state: RefCell::new(State::new()),
            cursors: CursorStack::default(),
            next_handle: Cell::new(1),
        }
    }

    /// The label this registry was built with, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // ------------------------------------------------------------------
    // Modules
    // ------------------------------------------------------------------

    /// Register `module` under `name`, then run its `init`.
    ///
    /// Fails without touching the registry if `name` is already taken.
    pub fn register_module<M>(
        &self,
        name: impl Into<String>,
        module: M,
    ) -> Result<ModuleHandle, RegistryError>
    where
        M: Module<P, R>,
    {
        self.register_shared(name.into(), Rc::new(RefCell::new(module)))
    }

    fn register_shared(
        &self,
        name: String,
        module: SharedModule<P, R>,
    ) -> Result<ModuleHandle, RegistryError> {
        let handle = {
            let mut state = self.state.borrow_mut();
            if state.modules.contains_key(&name) {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    registry = self.name().unwrap_or_default(),
                    module = %name,
                    "Rejected duplicate module"
                );
                return Err(RegistryError::DuplicateModule(name));
            }
            let handle = self.allocate_handle();
            state.modules.insert(
                name.clone(),
                ModuleSlot {
                    handle,
                    module: Rc::clone(&module),
                },
            );
            state.names.insert(handle, name.clone());
            handle
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            registry = self.name().unwrap_or_default(),
            module = %name,
            %handle,
            "Registered module"
        );

        let cx = ModuleContext::new(self, handle, &name);
        module.borrow_mut().init(&cx);

        let pending = self.state.borrow_mut().pending_removals.remove(&handle);
        if pending {
            self.destroy_and_delete(&name, handle, &module);
        }
        Ok(handle)
    }

    fn allocate_handle(&self) -> ModuleHandle {
        let raw = self.next_handle.get();
        self.next_handle.set(raw + 1);
        ModuleHandle::from_raw(raw)
    }

    /// Run the `destroy` of the module registered as `name`, then delete it.
    ///
    /// Returns `false` if no such module exists. A module may remove itself
    /// from its own `init`: the call returns `true` and the module is
    /// destroyed and deleted as soon as `init` returns. Removing a module
    /// from its own `destroy` returns `true` without a second `destroy`.
    ///
    /// Observers owned by the module are left in place and keep firing. Use
    /// [`remove_observers_of`](Self::remove_observers_of) first to drop them.
    pub fn remove_module(&self, name: &str) -> bool {
        let Some((handle, module)) = self
            .state
            .borrow()
            .modules
            .get(name)
            .map(|slot| (slot.handle, Rc::clone(&slot.module)))
        else {
            return false;
        };
        self.destroy_and_delete(name, handle, &module);
        true
    }

    fn destroy_and_delete(&self, name: &str, handle: ModuleHandle, module: &SharedModule<P, R>) {
        let Ok(mut guard) = module.try_borrow_mut() else {
            // Busy in its own lifecycle callback.
            self.state.borrow_mut().pending_removals.insert(handle);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                registry = self.name().unwrap_or_default(),
                module = name,
                %handle,
                "Deferred removal of busy module"
            );
            return;
        };
        let cx = ModuleContext::new(self, handle, name);
        guard.destroy(&cx);
        drop(guard);

        let removed = {
            let mut state = self.state.borrow_mut();
            state.pending_removals.remove(&handle);
            let same_slot = state
                .modules
                .get(name)
                .is_some_and(|slot| slot.handle == handle);
            if same_slot {
                state.names.remove(&handle);
                state.modules.remove(name)
            } else {
                None
            }
        };
        drop(removed);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            registry = self.name().unwrap_or_default(),
            module = name,
            %handle,
            "Removed module"
        );
    }

    /// Remove every module, most recently registered first, then drop all
    /// remaining observers. Returns the number of modules destroyed.
    pub fn shutdown(&self) -> usize {
        let mut registered: Vec<(ModuleHandle, String)> = self
            .state
            .borrow()
            .modules
            .iter()
            .map(|(name, slot)| (slot.handle, name.clone()))
            .collect();
        registered.sort_unstable_by(|a, b| b.0.cmp(&a.0));

        let destroyed = registered
            .iter()
            .filter(|(_, name)| self.remove_module(name))
            .count();

        let observers = std::mem::take(&mut self.state.borrow_mut().observers);
        drop(observers);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            registry = self.name().unwrap_or_default(),
            destroyed,
            "Registry shut down"
        );
        destroyed
    }

    /// Whether a module is registered under `name`.
    pub fn contains_module(&self, name: &str) -> bool {
        self.state.borrow().modules.contains_key(name)
    }

    /// Handle of the module registered under `name`.
    pub fn module_handle(&self, name: &str) -> Option<ModuleHandle> {
        self.state.borrow().modules.get(name).map(|slot| slot.handle)
    }

    /// Name of the live module identified by `handle`.
    pub fn module_name(&self, handle: ModuleHandle) -> Option<String> {
        self.state.borrow().names.get(&handle).cloned()
    }

    /// Names of all registered modules, in registration order.
    pub fn module_names(&self) -> Vec<String> {
        let state = self.state.borrow();
        let mut names: Vec<(ModuleHandle, &String)> = state
            .modules
            .iter()
            .map(|(name, slot)| (slot.handle, name))
            .collect();
        names.sort_unstable_by_key(|(handle, _)| *handle);
        names.into_iter().map(|(_, name)| name.clone()).collect()
    }

    /// Number of registered modules.
    pub fn module_count(&self) -> usize {
        self.state.borrow().modules.len()
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Subscribe `callback` to `request` on behalf of `owner`.
    ///
    /// Returns `false` without changing anything if `request` is empty or if
    /// `owner` already observes `request`; the existing callback is kept.
    pub fn add_observer<F>(&self, owner: ModuleHandle, request: &str, callback: F) -> bool
    where
        F: Fn(&ObserverContext<'_, P, R>, &P) -> Option<R> + 'static,
    {
        self.add_shared_observer(owner, request, Rc::new(callback))
    }

    /// Subscribe an [`Observer`] value to `request` on behalf of `owner`.
    pub fn add_observer_with<O>(&self, owner: ModuleHandle, request: &str, observer: O) -> bool
    where
        O: Observer<P, R>,
    {
        self.add_shared_observer(owner, request, Rc::new(observer))
    }

    /// Subscribe an already shared observer to `request` on behalf of `owner`.
    pub fn add_shared_observer(
        &self,
        owner: ModuleHandle,
        request: &str,
        observer: SharedObserver<P, R>,
    ) -> bool {
        if request.is_empty() {
            return false;
        }

        let added = {
            let mut state = self.state.borrow_mut();
            let sequence = state.observers.entry(request.to_owned()).or_default();
            if sequence.iter().any(|observation| observation.owner == owner) {
                false
            } else {
                sequence.push(Observation { owner, observer });
                true
            }
        };

        #[cfg(feature = "tracing")]
        {
            if added {
                tracing::debug!(
                    registry = self.name().unwrap_or_default(),
                    request,
                    %owner,
                    "Added observer"
                );
            }
        }
        added
    }

    /// Remove the observer `owner` holds on `request`.
    ///
    /// Safe to call from inside that very observer: the running dispatch moves
    /// on to the next observer without skipping it. Returns `false` if there is
    /// nothing to remove.
    pub fn remove_observer(&self, owner: ModuleHandle, request: &str) -> bool {
        let (index, removed) = {
            let mut state = self.state.borrow_mut();
            let Some(sequence) = state.observers.get_mut(request) else {
                return false;
            };
            let Some(index) = sequence
                .iter()
                .position(|observation| observation.owner == owner)
            else {
                return false;
            };
            let removed = sequence.remove(index);
            if sequence.is_empty() {
                state.observers.remove(request);
            }
            (index, removed)
        };

        self.cursors.shift_removed(request, index);
        drop(removed);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            registry = self.name().unwrap_or_default(),
            request,
            %owner,
            "Removed observer"
        );
        true
    }

    /// Remove every observer `owner` holds, across all requests.
    pub fn remove_observers_of(&self, owner: ModuleHandle) -> usize {
        let removed: Vec<(String, usize, Observation<P, R>)> = {
            let mut state = self.state.borrow_mut();
            let mut removed = Vec::new();
            for (request, sequence) in state.observers.iter_mut() {
                if let Some(index) = sequence
                    .iter()
                    .position(|observation| observation.owner == owner)
                {
                    removed.push((request.clone(), index, sequence.remove(index)));
                }
            }
            state.observers.retain(|_, sequence| !sequence.is_empty());
            removed
        };

        for (request, index, _) in &removed {
            self.cursors.shift_removed(request, *index);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            registry = self.name().unwrap_or_default(),
            %owner,
            count = removed.len(),
            "Removed observers of module"
        );
        removed.len()
    }

    /// Whether anyone observes `request`.
    pub fn has_observers(&self, request: &str) -> bool {
        self.state.borrow().observers.contains_key(request)
    }

    /// Number of observers subscribed to `request`.
    pub fn observer_count(&self, request: &str) -> usize {
        self.state
            .borrow()
            .observers
            .get(request)
            .map_or(0, Vec::len)
    }

    /// Whether `owner` observes `request`.
    pub fn is_observing(&self, owner: ModuleHandle, request: &str) -> bool {
        self.state
            .borrow()
            .observers
            .get(request)
            .is_some_and(|sequence| sequence.iter().any(|o| o.owner == owner))
    }

    /// All observed request names, sorted.
    pub fn requests(&self) -> Vec<String> {
        let mut requests: Vec<String> = self.state.borrow().observers.keys().cloned().collect();
        requests.sort_unstable();
        requests
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Notify every observer of `request` with `params` and collect the
    /// results they produce, in registration order.
    ///
    /// Returns `None` if `request` is empty or has no observers. Observers that
    /// return `None` contribute nothing, so the result may be shorter than the
    /// observer list, or empty.
    ///
    /// Observers added while the dispatch runs are notified by it as well.
    pub fn dispatch(&self, request: &str, params: &P) -> Option<Vec<R>> {
        if request.is_empty() || !self.has_observers(request) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                registry = self.name().unwrap_or_default(),
                request,
                "Request not handled"
            );
            return None;
        }

        let cursor = self.cursors.enter(request);
        let mut results = Vec::new();
        let mut notified = 0usize;
        while let Some((owner, observer)) = self.next_observer(request, &cursor) {
            let cx = ObserverContext::new(self, request, owner);
            notified += 1;
            if let Some(result) = observer.notify(&cx, params) {
                results.push(result);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            registry = self.name().unwrap_or_default(),
            request,
            notified,
            results = results.len(),
            "Dispatched request"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = notified;

        Some(results)
    }

    /// Like [`dispatch`](Self::dispatch), with default parameters.
    pub fn dispatch_default(&self, request: &str) -> Option<Vec<R>>
    where
        P: Default,
    {
        self.dispatch(request, &P::default())
    }

    fn next_observer(
        &self,
        request: &str,
        cursor: &ActiveCursor<'_>,
    ) -> Option<(ModuleHandle, SharedObserver<P, R>)> {
        let state = self.state.borrow();
        let sequence = state.observers.get(request)?;
        let index = cursor.next();
        let observation = sequence.get(index)?;
        cursor.advance_past(index);
        Some((observation.owner, Rc::clone(&observation.observer)))
    }

    /// Number of dispatches currently running on this registry.
    pub fn dispatch_depth(&self) -> usize {
        self.cursors.depth()
    }
}

impl<P: 'static, R: 'static> Default for Registry<P, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, R> fmt::Debug for Registry<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("modules", &state.modules.len())
            .field("requests", &state.observers.len())
            .finish()
    }
}

impl<P: 'static, R: 'static> Broker<P, R> for Registry<P, R> {
    fn register_boxed(
        &self,
        name: &str,
        module: Box<dyn Module<P, R>>,
    ) -> Result<ModuleHandle, RegistryError> {
        self.register_shared(name.to_owned(), Rc::new(RefCell::new(module)))
    }

    fn dispatch(&self, request: &str, params: &P) -> Option<Vec<R>> {
        Registry::dispatch(self, request, params)
    }

    fn observe(
        &self,
        owner: ModuleHandle,
        request: &str,
        observer: SharedObserver<P, R>,
    ) -> bool {
        self.add_shared_observer(owner, request, observer)
    }

    fn remove_observer(&self, owner: ModuleHandle, request: &str) -> bool {
        Registry::remove_observer(self, owner, request)
    }

    fn remove_observers_of(&self, owner: ModuleHandle) -> usize {
        Registry::remove_observers_of(self, owner)
    }

    fn remove_module(&self, name: &str) -> bool {
        Registry::remove_module(self, name)
    }
}
