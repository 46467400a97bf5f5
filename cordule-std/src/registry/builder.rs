//! Builder for constructing a [`Registry`].

use super::Registry;
use cordule_core::{Module, RegistryError};
use std::collections::HashSet;

/// Builder for constructing a Registry.
///
/// Modules added here are registered, and their `init` run, in the order
/// they were added when [`build`](Self::build) is called.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .name("app")
///     .module("chat", ChatModule::default())
///     .module("presence", PresenceModule::default())
///     .build()?;
/// ```
pub struct RegistryBuilder<P, R> {
    name: Option<String>,
    modules: Vec<(String, Box<dyn Module<P, R>>)>,
}

impl<P: 'static, R: 'static> RegistryBuilder<P, R> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            name: None,
            modules: Vec::new(),
        }
    }

    /// Label the registry. The label shows up in its log events.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Queue a module for registration.
    pub fn module<M>(mut self, name: impl Into<String>, module: M) -> Self
    where
        M: Module<P, R>,
    {
        self.modules.push((name.into(), Box::new(module)));
        self
    }

    /// Number of queued modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if no module is queued.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Build the registry, registering every queued module.
    ///
    /// Duplicate names among the queued modules are detected before any
    /// `init` runs. A name can still collide with a module registered by an
    /// earlier `init`; the build then shuts the partial registry down, so
    /// every module that was initialised is also destroyed.
    pub fn build(self) -> Result<Registry<P, R>, RegistryError> {
        {
            let mut seen = HashSet::with_capacity(self.modules.len());
            if let Some((name, _)) = self.modules.iter().find(|(name, _)| !seen.insert(name)) {
                return Err(RegistryError::DuplicateModule(name.clone()));
            }
        }

        let registry = Registry::with_name(self.name);
        for (name, module) in self.modules {
            if let Err(err) = registry.register_module(name, module) {
                registry.shutdown();
                return Err(err);
            }
        }
        Ok(registry)
    }
}

impl<P: 'static, R: 'static> Default for RegistryBuilder<P, R> {
    fn default() -> Self {
        Self::new()
    }
}
