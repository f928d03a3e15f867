use crate::{
    extract,
    record::{AsRecord, RecordType},
    Error, Record, Result, TypeEntry,
};

use indexmap::IndexMap;
use std::{
    any::TypeId,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

/// Maps record types to their table and cached column layout.
///
/// Populate it at startup with [`Registry::register`]; afterwards it is
/// read-only in practice. Entries are built completely before they are
/// published, and the lock is never held while a statement runs.
#[derive(Debug, Default)]
pub struct Registry {
    entries: RwLock<IndexMap<TypeId, Arc<TypeEntry>>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Registers `T` against `table`, replacing any previous registration.
    pub fn register<T: Record>(&self, table: impl Into<String>) -> Result<Arc<TypeEntry>> {
        self.insert(RecordType::of::<T>(), table.into())
    }

    /// Registers the type of `value` against `table`.
    ///
    /// `value` is only used for its type; its field values are ignored.
    pub fn register_value<V>(&self, value: &V, table: impl Into<String>) -> Result<Arc<TypeEntry>>
    where
        V: AsRecord + ?Sized,
    {
        self.insert(value.as_record().record_type(), table.into())
    }

    fn insert(&self, ty: RecordType, table: String) -> Result<Arc<TypeEntry>> {
        let shape = (ty.shape)();
        let columns = extract(ty.name, &shape)?;
        let selector = (ty.selector)();

        tracing::debug!(
            type_name = ty.name,
            table = %table,
            columns = columns.len(),
            selector = selector.is_some(),
            "registered record type"
        );

        let entry = Arc::new(TypeEntry {
            ty,
            table,
            columns,
            selector,
        });

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ty.id, entry.clone());

        Ok(entry)
    }

    /// Returns the entry for the type of `value`.
    pub fn lookup<V>(&self, value: &V) -> Result<Arc<TypeEntry>>
    where
        V: AsRecord + ?Sized,
    {
        self.get(value.as_record().record_type())
    }

    /// Returns the entry for `T`.
    pub fn lookup_type<T: Record>(&self) -> Result<Arc<TypeEntry>> {
        self.get(RecordType::of::<T>())
    }

    fn get(&self, ty: RecordType) -> Result<Arc<TypeEntry>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&ty.id)
            .cloned()
            .ok_or_else(|| Error::not_registered(ty.name))
    }

    pub fn contains<T: Record>(&self) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all entries, in first-registration order.
    pub fn entries(&self) -> Vec<Arc<TypeEntry>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }
}
