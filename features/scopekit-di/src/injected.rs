//! Explicit injection handles.
//!
//! The registry is resolved through ordinary values rather than hidden
//! machinery: [`Injected`] captures its dependency when constructed,
//! [`Lazy`] defers resolution to the first access. Either way the
//! dependency shows up in the struct definition.

use std::{
    fmt::Debug,
    ops::Deref,
    sync::{Arc, OnceLock},
};

use crate::{registry::resolve, types::Injectable};

/// A dependency resolved eagerly at construction.
///
/// `Injected::new` resolves against the registry that is current at the call
/// site, so constructing one inside a scope captures the scoped override.
///
/// # Panics
///
/// Construction panics if no value is registered for `T`.
#[derive(Clone)]
pub struct Injected<T: Injectable> {
    value: Arc<T>,
}

impl<T: Injectable> Injected<T> {
    pub fn new() -> Self {
        Injected { value: resolve() }
    }

    /// The resolved value, shared with the registry it came from.
    pub fn shared(&self) -> Arc<T> {
        self.value.clone()
    }
}

impl<T: Injectable> Default for Injected<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Injectable> Deref for Injected<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value.as_ref()
    }
}

impl<T: Injectable + Debug> Debug for Injected<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Injected").field(&self.value).finish()
    }
}

/// A dependency resolved on first access.
///
/// The value is looked up against the registry current at the first deref
/// and cached; later accesses reuse it regardless of the scope they run in.
///
/// # Panics
///
/// The first access panics if no value is registered for `T`.
pub struct Lazy<T: Injectable> {
    cell: OnceLock<Arc<T>>,
}

impl<T: Injectable> Lazy<T> {
    pub const fn new() -> Self {
        Lazy {
            cell: OnceLock::new(),
        }
    }

    /// The resolved value, shared with the registry it came from.
    pub fn shared(&self) -> Arc<T> {
        self.cell.get_or_init(resolve).clone()
    }
}

impl<T: Injectable> Default for Lazy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Injectable> Deref for Lazy<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.cell.get_or_init(resolve).as_ref()
    }
}

impl<T: Injectable + Debug> Debug for Lazy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => f.write_str("Lazy(unresolved)"),
        }
    }
}
