//! Generic id-keyed table backing the memory repositories.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Why a table operation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum TableError {
    /// A writer panicked while holding the lock.
    Poisoned,
    /// An explicit id on insert is already taken.
    Duplicate(i32),
    /// Every id above the identity counter is taken.
    Exhausted,
}

#[derive(Debug)]
struct Rows<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

/// Rows ordered by id plus an identity counter, behind one mutex.
///
/// Mirrors an identity column: ids start at 1, explicit ids are accepted,
/// and the counter always moves past the highest id seen.
#[derive(Debug)]
pub(super) struct MemoryTable<T> {
    inner: Mutex<Rows<T>>,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Rows {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl<T: Clone> MemoryTable<T> {
    fn lock(&self) -> Result<MutexGuard<'_, Rows<T>>, TableError> {
        self.inner.lock().map_err(|_| TableError::Poisoned)
    }

    pub(super) fn get(&self, id: i32) -> Result<Option<T>, TableError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    pub(super) fn contains(&self, id: i32) -> Result<bool, TableError> {
        Ok(self.lock()?.rows.contains_key(&id))
    }

    pub(super) fn all(&self) -> Result<Vec<T>, TableError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    /// Insert under `id`, or under the next free identity when `None`.
    /// `build` receives the final id.
    pub(super) fn insert_with(
        &self,
        requested: Option<i32>,
        build: impl FnOnce(i32) -> T,
    ) -> Result<T, TableError> {
        let mut guard = self.lock()?;
        let id = match requested {
            Some(id) if guard.rows.contains_key(&id) => return Err(TableError::Duplicate(id)),
            Some(id) => id,
            None => {
                let mut candidate = guard.next_id;
                while guard.rows.contains_key(&candidate) {
                    candidate = candidate.checked_add(1).ok_or(TableError::Exhausted)?;
                }
                candidate
            }
        };
        // The counter parks at `i32::MAX` once that id is used.
        guard.next_id = guard.next_id.max(id.checked_add(1).unwrap_or(id));
        let row = build(id);
        guard.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Overwrite an existing row. Returns `false` when `id` is absent.
    pub(super) fn replace(&self, id: i32, row: T) -> Result<bool, TableError> {
        let mut guard = self.lock()?;
        Ok(guard.rows.get_mut(&id).is_some_and(|slot| {
            *slot = row;
            true
        }))
    }

    pub(super) fn remove(&self, id: i32) -> Result<bool, TableError> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }
}
