//! Shared, lock-guarded handle to the guild store

use std::sync::Arc;

use parking_lot::Mutex;

use super::Store;

/// Cloneable handle to a single [`Store`] behind one mutex
///
/// Each closure passed to [`read`](Self::read) or [`write`](Self::write) runs
/// with the lock held for its whole duration, so a lookup followed by a
/// write-back inside one closure cannot interleave with another request.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run a read-only closure against the store
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run a mutating closure against the store
    pub fn write<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        Self::new(store)
    }
}
