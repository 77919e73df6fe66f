//! The in-memory store that owns every user, category and record.

use std::collections::BTreeMap;

use time::OffsetDateTime;

use crate::{Category, Record, User};

/// A table of entities keyed by an auto-incrementing integer ID.
///
/// IDs start at 1 and are never handed out twice, even after the entity that
/// held one is removed.
#[derive(Debug, Clone)]
pub(crate) struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Allocate the next ID, build the row with `make_row` and store it.
    pub(crate) fn insert_with(&mut self, make_row: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let row = make_row(id);
        self.rows.insert(id, row.clone());

        row
    }

    pub(crate) fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Remove the row with `id`, returning whether it was present.
    pub(crate) fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    /// Iterate over the rows in ascending ID order.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

/// Holds the users, categories and expense records for the lifetime of the
/// process.
///
/// Each entity type has its own ID sequence. Callers are expected to hold
/// exclusive access (see [AppState](crate::AppState)) for the duration of each
/// operation.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) users: Table<User>,
    pub(crate) categories: Table<Category>,
    pub(crate) records: Table<Record>,
    /// The creation time of the most recent record, used to keep
    /// `created_at` non-decreasing if the wall clock steps backwards.
    pub(crate) last_record_time: Option<OffsetDateTime>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}
