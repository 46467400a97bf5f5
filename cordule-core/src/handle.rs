//! Module identity tokens.

use std::fmt;

/// Opaque identity of a registered module.
///
/// Handed out by the registry at registration time and matched by value on
/// every observer operation. Handles are never reused within one registry, so
/// registering a name again after removal yields a different handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleHandle(u64);

impl ModuleHandle {
    /// Build a handle from its raw value.
    ///
    /// Intended for registry implementations that allocate handles.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value of this handle.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module#{}", self.0)
    }
}
