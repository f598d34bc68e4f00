use std::{
    any::{type_name, TypeId},
    collections::HashMap,
    fmt::Debug,
    future::Future,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

use crate::{
    errors::ResolveError,
    scope,
    types::{Entry, Injectable},
};

/// The process-wide default registry. Lazily built, lives for the whole
/// process. Each key assignment happens under the write lock, so a single
/// registration is atomic; updates spanning several keys are not.
static GLOBAL: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// A snapshot of registered values, keyed by type identity.
///
/// A `Registry` is a value: cloning it copies the map (the values themselves
/// are behind `Arc`s, so this is cheap), and mutating the clone never affects
/// the original. Scoped overrides rely on exactly that.
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<TypeId, Entry>,
}

impl Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_struct("Registry");
        for entry in self.entries.values() {
            map.field(entry.info.type_name, &"registered");
        }
        map.finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            entries: HashMap::new(),
        }
    }

    /// Register or overwrite the value for `T`. Last write wins.
    pub fn insert<T: Injectable>(&mut self, value: T) {
        self.entries.insert(TypeId::of::<T>(), Entry::new(value));
    }

    /// Remove the value for `T`, returning whether one was registered.
    pub fn remove<T: Injectable>(&mut self) -> bool {
        self.entries.remove(&TypeId::of::<T>()).is_some()
    }

    /// Look up the value for `T` in this snapshot.
    pub fn get<T: Injectable>(&self) -> Option<Arc<T>> {
        self.try_get().ok()
    }

    /// Look up the value for `T`, reporting why it could not be produced.
    pub fn try_get<T: Injectable>(&self) -> Result<Arc<T>, ResolveError> {
        match self.entries.get(&TypeId::of::<T>()) {
            Some(entry) => entry
                .downcast()
                .map_err(|actual_type| ResolveError::DowncastFailed {
                    required_type: type_name::<T>(),
                    actual_type,
                }),
            None => Err(ResolveError::Missing(type_name::<T>())),
        }
    }

    pub fn contains<T: Injectable>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Global and effective registry access
impl Registry {
    /// Snapshot of the global registry.
    pub fn global() -> Registry {
        GLOBAL
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of the effective registry: the scoped override when the
    /// calling task has one, the global registry otherwise.
    pub fn current() -> Registry {
        scope::with_effective(Clone::clone)
    }

    /// Run `future` with this snapshot bound as its current registry.
    ///
    /// Task-local bindings do not cross `tokio::spawn`, so a scope is not
    /// inherited by spawned tasks. Capture `Registry::current()` before
    /// spawning and attach it inside the new task to carry it over.
    pub fn attach<F: Future>(self, future: F) -> impl Future<Output = F::Output> {
        scope::attach(self, future)
    }
}

pub(crate) fn with_global_mut<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    let mut global = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut global)
}

pub(crate) fn read_global<R>(f: impl FnOnce(&Registry) -> R) -> R {
    let global = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
    f(&global)
}

/// Register `value` for `T` in the global registry. Last write wins.
pub fn register<T: Injectable>(value: T) {
    tracing::debug!(type_name = type_name::<T>(), "registering global value");
    with_global_mut(|global| global.insert(value));
}

/// Remove the global registration for `T`, returning whether one existed.
pub fn unregister<T: Injectable>() -> bool {
    tracing::debug!(type_name = type_name::<T>(), "removing global value");
    with_global_mut(|global| global.remove::<T>())
}

/// Replace the global registry wholesale.
pub fn set_global(registry: Registry) {
    with_global_mut(|global| *global = registry);
}

/// Look up `T` in the effective registry, scoped override first.
pub fn get<T: Injectable>() -> Option<Arc<T>> {
    try_resolve().ok()
}

/// Resolve `T` against the effective registry, reporting failures.
pub fn try_resolve<T: Injectable>() -> Result<Arc<T>, ResolveError> {
    scope::with_effective(|registry| registry.try_get::<T>())
}

/// Resolve `T` against the effective registry.
///
/// A missing registration is a misconfiguration, discoverable the first time
/// the code path runs in development, so this fails fast.
///
/// # Panics
///
/// Panics if no value is registered for `T` in the current scope or the
/// global registry. Use [`try_resolve`] or [`get`] for a recoverable lookup.
pub fn resolve<T: Injectable>() -> Arc<T> {
    match try_resolve::<T>() {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;
    use crate::errors::ResolveError;

    #[derive(Debug, PartialEq)]
    struct Port(u16);

    #[test]
    fn insert_then_get_returns_value() {
        let mut registry = Registry::new();
        registry.insert(Port(8080));

        assert_eq!(*registry.get::<Port>().unwrap(), Port(8080));
        assert!(registry.contains::<Port>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn repeated_insert_is_last_write_wins() {
        let mut registry = Registry::new();
        registry.insert(Port(1));
        registry.insert(Port(2));

        assert_eq!(registry.len(), 1);
        assert_eq!(*registry.get::<Port>().unwrap(), Port(2));
    }

    #[test]
    fn remove_reports_presence() {
        let mut registry = Registry::new();
        registry.insert(Port(1));

        assert!(registry.remove::<Port>());
        assert!(!registry.remove::<Port>());
        assert!(registry.get::<Port>().is_none());
    }

    #[test]
    fn try_get_reports_missing_type_name() {
        let registry = Registry::new();

        match registry.try_get::<Port>() {
            Err(ResolveError::Missing(name)) => assert!(name.contains("Port")),
            other => panic!("expected missing error, got {other:?}"),
        }
    }

    #[test]
    fn clone_is_a_snapshot() {
        let mut registry = Registry::new();
        registry.insert(Port(1));

        let mut copy = registry.clone();
        copy.insert(Port(2));
        copy.insert("extra".to_string());

        assert_eq!(*registry.get::<Port>().unwrap(), Port(1));
        assert!(registry.get::<String>().is_none());
        assert_eq!(*copy.get::<Port>().unwrap(), Port(2));
    }

    #[test]
    fn debug_lists_registered_type_names() {
        let mut registry = Registry::new();
        registry.insert(Port(1));

        let printed = format!("{registry:?}");
        assert!(printed.contains("Port"));
    }
}
