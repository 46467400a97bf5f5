//! Testing utilities for Cordule.
//!
//! This module provides doubles that make registry behaviour observable.
//!
//! # Features
//!
//! - [`LifecycleProbe`]: A module that counts and logs its `init`/`destroy` calls
//! - [`CountingObserver`]: An observer that counts notifications and returns a fixed result
//! - [`RecordingObserver`]: An observer that records the params it receives

use cordule_core::{Module, ModuleContext, Observer, ObserverContext};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Shared lifecycle log, entries look like `init:<name>` / `destroy:<name>`.
pub type LifecycleLog = Rc<RefCell<Vec<String>>>;

// ============================================================================
// Lifecycle Probe
// ============================================================================

/// A module that records its lifecycle.
///
/// Clones share their counters, so keep a clone to inspect a probe after
/// handing it to a registry.
///
/// # Example
///
/// ```rust,ignore
/// let probe = LifecycleProbe::new();
/// registry.register_module("a", probe.clone())?;
/// assert_eq!(probe.inits(), 1);
/// ```
#[derive(Clone, Default)]
pub struct LifecycleProbe {
    inits: Rc<Cell<usize>>,
    destroys: Rc<Cell<usize>>,
    log: LifecycleLog,
}

impl LifecycleProbe {
    /// Create a probe with its own log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe writing to a shared log, to check ordering across modules.
    pub fn with_log(log: LifecycleLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    /// Number of `init` calls.
    pub fn inits(&self) -> usize {
        self.inits.get()
    }

    /// Number of `destroy` calls.
    pub fn destroys(&self) -> usize {
        self.destroys.get()
    }

    /// Copy of the lifecycle log.
    pub fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl<P: 'static, R: 'static> Module<P, R> for LifecycleProbe {
    fn init(&mut self, cx: &ModuleContext<'_, P, R>) {
        self.inits.set(self.inits.get() + 1);
        self.log.borrow_mut().push(format!("init:{}", cx.name()));
    }

    fn destroy(&mut self, cx: &ModuleContext<'_, P, R>) {
        self.destroys.set(self.destroys.get() + 1);
        self.log.borrow_mut().push(format!("destroy:{}", cx.name()));
    }
}

// ============================================================================
// Counting Observer
// ============================================================================

/// An observer that counts notifications.
pub struct CountingObserver<R> {
    count: Rc<Cell<usize>>,
    result: Option<R>,
}

impl<R: Clone> CountingObserver<R> {
    /// An observer that produces no result.
    pub fn silent() -> Self {
        Self {
            count: Rc::new(Cell::new(0)),
            result: None,
        }
    }

    /// An observer that returns a clone of `result` on every notification.
    pub fn returning(result: R) -> Self {
        Self {
            count: Rc::new(Cell::new(0)),
            result: Some(result),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.set(0);
    }
}

impl<R: Clone> Clone for CountingObserver<R> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            result: self.result.clone(),
        }
    }
}

impl<P: 'static, R: Clone + 'static> Observer<P, R> for CountingObserver<R> {
    fn notify(&self, _cx: &ObserverContext<'_, P, R>, _params: &P) -> Option<R> {
        self.count.set(self.count.get() + 1);
        self.result.clone()
    }
}

// ============================================================================
// Recording Observer
// ============================================================================

/// An observer that records every params value it is notified with and
/// produces no result.
pub struct RecordingObserver<P> {
    params: Rc<RefCell<Vec<P>>>,
}

impl<P: Clone> RecordingObserver<P> {
    /// Create a new recording observer.
    pub fn new() -> Self {
        Self {
            params: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded params.
    pub fn params(&self) -> Vec<P> {
        self.params.borrow().clone()
    }

    /// Get the number of recorded notifications.
    pub fn count(&self) -> usize {
        self.params.borrow().len()
    }
}

impl<P: Clone> Default for RecordingObserver<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for RecordingObserver<P> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
        }
    }
}

impl<P: Clone + 'static, R: 'static> Observer<P, R> for RecordingObserver<P> {
    fn notify(&self, _cx: &ObserverContext<'_, P, R>, params: &P) -> Option<R> {
        self.params.borrow_mut().push(params.clone());
        None
    }
}
