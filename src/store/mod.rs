//! Generic paginated, searchable list-management engine.
//!
//! One [`ListStore`] instance per record kind owns that kind's ordered
//! sequence (newest first), backed by a durable key-value entry. Every
//! mutation is write-through: the whole sequence is persisted before the
//! in-memory state commits, so a failed write leaves the store exactly
//! as it was.

mod backend;
mod envelope;
mod error;
mod id;
mod page;

pub use backend::{FileStorage, MemoryStorage, Storage};
pub use envelope::SCHEMA_VERSION;
pub use error::{PersistenceError, StoreError};
pub use id::{IdGenerator, RecordId};
pub use page::{clamp_page, page_window, PageLabel};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::utils::today;

/// A record kind managed by a [`ListStore`].
///
/// `Draft` carries the caller-supplied fields for creation and `Patch`
/// the typed partial update; both are validated/merged by the kind
/// itself so a typo can never land as a stray field.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Create-time input, validated in [`Record::from_draft`].
    type Draft;
    /// Typed partial update merged by [`Record::apply_patch`].
    type Patch;

    /// Key of this kind's persisted sequence.
    const STORAGE_KEY: &'static str;

    /// The record's identifier.
    fn id(&self) -> RecordId;

    /// Build a record from a draft, a fresh id, and the creation date.
    /// Required-field absence fails with `StoreError::Validation`.
    fn from_draft(draft: Self::Draft, id: RecordId, date: String) -> Result<Self, StoreError>;

    /// Merge a patch over this record. Id and creation date are not
    /// part of any patch and therefore always preserved.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Field values the free-text filter matches against.
    fn search_fields(&self) -> Vec<String>;

    /// Fixed example records used on first run.
    fn seed() -> Vec<Self>;

    /// True when a legacy v0 sequence is incompatible and must be
    /// discarded wholesale (observed only for packages).
    fn legacy_incompatible(records: &[Self]) -> bool {
        let _ = records;
        false
    }
}

/// One page of query results.
#[derive(Debug)]
pub struct QueryPage<'a, T> {
    /// Records on the requested page, stored order preserved.
    pub items: Vec<&'a T>,
    /// `ceil(filtered / page_size)`; 0 when nothing matched.
    pub total_pages: u32,
}

/// Persisted, ordered record collection with filtering and pagination.
pub struct ListStore<T: Record, S: Storage> {
    storage: S,
    records: Vec<T>,
    ids: IdGenerator,
}

impl<T: Record, S: Storage> ListStore<T, S> {
    /// Load the kind's sequence from storage, seeding on first run.
    ///
    /// Seeding is idempotent: existing current-format data is adopted
    /// as-is and never overwritten. Legacy v0 data is either migrated
    /// under the current schema version or, when the kind flags it as
    /// incompatible, discarded and reseeded.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let mut storage = storage;
        let (records, rewrite) = match storage.read(T::STORAGE_KEY)? {
            Some(raw) => match envelope::decode::<T>(&raw)? {
                envelope::Decoded::Current(records) => (records, false),
                envelope::Decoded::Legacy(records) => {
                    if T::legacy_incompatible(&records) {
                        warn!(
                            key = T::STORAGE_KEY,
                            "discarding incompatible legacy data, reseeding"
                        );
                        (T::seed(), true)
                    } else {
                        debug!(key = T::STORAGE_KEY, "migrating legacy data to v1");
                        (records, true)
                    }
                }
                envelope::Decoded::Incompatible => {
                    warn!(
                        key = T::STORAGE_KEY,
                        "discarding unreadable persisted data, reseeding"
                    );
                    (T::seed(), true)
                }
            },
            None => (T::seed(), true),
        };

        if rewrite {
            let raw = envelope::encode(&records)?;
            storage.write(T::STORAGE_KEY, &raw)?;
        }

        let ids = IdGenerator::seeded(records.iter().map(Record::id));
        Ok(ListStore {
            storage,
            records,
            ids,
        })
    }

    /// Create a record from `draft`: fresh id, current date, prepended
    /// so the newest record is always first. Returns the new record.
    pub fn create(&mut self, draft: T::Draft) -> Result<T, StoreError> {
        let record = T::from_draft(draft, self.ids.next_id(), today())?;
        let mut next = Vec::with_capacity(self.records.len().saturating_add(1));
        next.push(record.clone());
        next.extend(self.records.iter().cloned());
        self.persist(&next)?;
        self.records = next;
        debug!(key = T::STORAGE_KEY, id = %record.id(), "record created");
        Ok(record)
    }

    /// Merge `patch` over the record with `id`. Fails with
    /// `StoreError::NotFound` when the target vanished.
    pub fn update(&mut self, id: RecordId, patch: T::Patch) -> Result<T, StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        let mut next = self.records.clone();
        let target = next.get_mut(index).ok_or(StoreError::NotFound(id))?;
        target.apply_patch(patch);
        let updated = target.clone();
        self.persist(&next)?;
        self.records = next;
        debug!(key = T::STORAGE_KEY, id = %id, "record updated");
        Ok(updated)
    }

    /// Remove the record with `id`. Silently idempotent when the id is
    /// absent. Confirmation-gating is the caller's responsibility.
    pub fn delete(&mut self, id: RecordId) -> Result<(), StoreError> {
        let next: Vec<T> = self
            .records
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();
        if next.len() == self.records.len() {
            return Ok(());
        }
        self.persist(&next)?;
        self.records = next;
        debug!(key = T::STORAGE_KEY, id = %id, "record deleted");
        Ok(())
    }

    /// Fetch a record by id.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Case-insensitive substring filter over the kind's searchable
    /// fields, then a 1-based page window. An empty term returns the
    /// unfiltered sequence in stored order. Pure function of store
    /// state and arguments; out-of-range pages yield empty items and
    /// are the caller's job to avoid.
    #[must_use]
    pub fn query(&self, term: &str, page: u32, page_size: usize) -> QueryPage<'_, T> {
        let needle = term.trim().to_lowercase();
        let filtered: Vec<&T> = if needle.is_empty() {
            self.records.iter().collect()
        } else {
            self.records
                .iter()
                .filter(|record| {
                    record
                        .search_fields()
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
                })
                .collect()
        };

        let size = page_size.max(1);
        let total_pages = u32::try_from(filtered.len().div_ceil(size)).unwrap_or(u32::MAX);
        let page_index = usize::try_from(page.saturating_sub(1)).unwrap_or(usize::MAX);
        let items = filtered
            .into_iter()
            .skip(page_index.saturating_mul(size))
            .take(size)
            .collect();
        QueryPage { items, total_pages }
    }

    /// The full stored sequence, newest first.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&mut self, records: &[T]) -> Result<(), StoreError> {
        let raw = envelope::encode(records)?;
        self.storage.write(T::STORAGE_KEY, &raw)?;
        Ok(())
    }
}
