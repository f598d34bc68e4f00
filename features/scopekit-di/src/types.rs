use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// We assume a multithreaded async runtime, so anything registered in a
/// registry needs to be Send + Sync + 'static.
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// A single registered value, type-erased for storage.
#[derive(Clone)]
pub(crate) struct Entry {
    pub info: TypeInfo,
    pub value: Arc<dyn Any + Send + Sync>,
}

impl Entry {
    pub(crate) fn new<T: Injectable>(value: T) -> Self {
        Entry {
            info: TypeInfo::of::<T>(),
            value: Arc::new(value),
        }
    }

    /// Recovers the concrete type. A mismatch means the entry was stored
    /// under the wrong key, which the `TypeId`-keyed map rules out, but the
    /// stored type name is reported if it ever happens.
    pub(crate) fn downcast<T: Injectable>(&self) -> Result<Arc<T>, &'static str> {
        match Arc::downcast::<T>(self.value.clone()) {
            Ok(downcasted) => Ok(downcasted),
            Err(_) => Err(self.info.type_name),
        }
    }
}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}
