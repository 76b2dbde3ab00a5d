//! Move-to-front (MTF) associative table.
//!
//! Entries live in one [`IntrusiveList`] whose order *is* the recency order:
//! the front is the most recently looked-up key, or the most recently
//! inserted one if it was never looked up. A successful lookup hoists the
//! first matching entry to the front, so repeated lookups of hot keys stop
//! after a few comparisons while the worst case stays a full scan.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                        MtfTable<K, V, C> Layout                      │
//! │                                                                      │
//! │   comparator: C            deleters: { key: Deleter<K>,              │
//! │                                        value: Deleter<V> }           │
//! │                                                                      │
//! │   entries: IntrusiveList<Entry<K, V>>                                │
//! │                                                                      │
//! │   head (most recent)                              tail (least recent)│
//! │    ▼                                                          ▼      │
//! │   [k3,v3] ◄──► [k1,v1] ◄──► [k2,v2] ◄──► ... ◄──► [k0,v0]            │
//! └──────────────────────────────────────────────────────────────────────┘
//!
//! lookup(k2):
//!   1. scan from head calling comparator(entry.key, k2)
//!   2. first Equal wins; move_to_front(id) relinks it (no realloc)
//!   3. return &v2
//!
//!   [k2,v2] ◄──► [k3,v3] ◄──► [k1,v1] ◄──► ... ◄──► [k0,v0]
//! ```
//!
//! ## Operations
//!
//! | Operation  | Time | Notes                                           |
//! |------------|------|-------------------------------------------------|
//! | `insert`   | O(1) | Front insertion, no duplicate check             |
//! | `lookup`   | O(n) | Promotes the first match to the front           |
//! | `peek`     | O(n) | Same scan, no promotion                         |
//! | `remove`   | O(n) | Removes *every* match                           |
//! | `clear`    | O(n) | Runs deleters on every entry                    |
//!
//! ## Ownership
//!
//! Keys and values are moved into the table. When a key or value leaves
//! (`remove`, `clear`, drop/[`destroy`](MtfTable::destroy)) it is handed to
//! the registered destructor, or simply dropped if none is registered.
//! Destructors apply to whatever is released after they are set.
//!
//! ## Thread Safety
//!
//! Not thread-safe, and never `Send` or `Sync`: the deleter slots hold
//! `Box<dyn FnMut>` callbacks that may capture `Rc` or other thread-local
//! state, whether or not one is registered. Keep a table on the thread that
//! created it.
//!
//! ```compile_fail
//! fn assert_send<T: Send>() {}
//! assert_send::<mtftable::MtfTable<u32, u32>>();
//! ```
//!
//! ```compile_fail
//! fn assert_sync<T: Sync>() {}
//! assert_sync::<mtftable::MtfTable<u32, u32>>();
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use mtftable::MtfTable;
//!
//! let mut table: MtfTable<u32, &str, _> = MtfTable::new(|a: &u32, b: &u32| a.cmp(b));
//! table.insert(1, "a").unwrap();
//! table.insert(2, "b").unwrap();
//! table.insert(3, "c").unwrap();
//! assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//!
//! assert_eq!(table.lookup(&1), Some(&"a"));
//! assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
//!
//! assert_eq!(table.lookup(&9), None);
//! assert_eq!(table.remove(&3), 1);
//! assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
//! ```

pub mod deleter;

use std::fmt;

use crate::builder::MtfTableBuilder;
use crate::ds::{IntrusiveList, SlotId};
use crate::error::{AllocError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::TableMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::TableMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsSnapshotProvider, TableMetricsReadRecorder, TableMetricsRecorder,
};
use crate::traits::{KeyComparator, MtfLookupTable, OrdComparator};

pub use deleter::Deleter;
use deleter::EntryDeleters;

/// One key/value pair; its position in the list is its recency rank.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Associative table with move-to-front lookups.
///
/// # Type Parameters
///
/// - `K`: Key type; matched only through `C`, no `Hash`/`Eq` needed
/// - `V`: Value type
/// - `C`: [`KeyComparator`] deciding which keys match (defaults to `Ord`)
///
/// # Example
///
/// ```
/// use mtftable::MtfTable;
///
/// let mut table: MtfTable<&str, u32> = MtfTable::default();
/// table.insert("cold", 1).unwrap();
/// table.insert("hot", 2).unwrap();
/// table.insert("warm", 3).unwrap();
///
/// assert_eq!(table.lookup(&"cold"), Some(&1));
/// assert_eq!(table.front(), Some((&"cold", &1)));
/// ```
pub struct MtfTable<K, V, C = OrdComparator> {
    entries: IntrusiveList<Entry<K, V>>,
    comparator: C,
    deleters: EntryDeleters<K, V>,

    #[cfg(feature = "metrics")]
    metrics: TableMetrics,
}

impl<K, V, C> MtfTable<K, V, C> {
    /// Creates an empty table that matches keys with `comparator`.
    ///
    /// No destructors are registered; see [`set_key_destructor`](Self::set_key_destructor).
    ///
    /// # Example
    ///
    /// ```
    /// use mtftable::MtfTable;
    ///
    /// let table: MtfTable<String, u8, _> =
    ///     MtfTable::new(|a: &String, b: &String| a.len().cmp(&b.len()));
    /// assert!(table.is_empty());
    /// ```
    pub fn new(comparator: C) -> Self {
        Self::from_parts(IntrusiveList::new(), comparator)
    }

    /// Creates an empty table with room for `capacity` entries.
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self::from_parts(IntrusiveList::with_capacity(capacity), comparator)
    }

    /// Creates an empty table with room for `capacity` entries, returning
    /// [`AllocError`] instead of aborting if the storage cannot be reserved.
    ///
    /// # Example
    ///
    /// ```
    /// use mtftable::{MtfTable, OrdComparator};
    ///
    /// assert!(MtfTable::<u64, u64>::try_with_capacity(64, OrdComparator).is_ok());
    /// assert!(MtfTable::<u64, u64>::try_with_capacity(usize::MAX, OrdComparator).is_err());
    /// ```
    pub fn try_with_capacity(capacity: usize, comparator: C) -> Result<Self, AllocError> {
        Ok(Self::from_parts(
            IntrusiveList::try_with_capacity(capacity)?,
            comparator,
        ))
    }

    /// Starts a [`MtfTableBuilder`] for this comparator.
    pub fn builder(comparator: C) -> MtfTableBuilder<K, V, C> {
        MtfTableBuilder::new(comparator)
    }

    fn from_parts(entries: IntrusiveList<Entry<K, V>>, comparator: C) -> Self {
        Self {
            entries,
            comparator,
            deleters: EntryDeleters::new(),
            #[cfg(feature = "metrics")]
            metrics: TableMetrics::new(),
        }
    }

    /// Registers (or replaces) the destructor run on every key that leaves
    /// the table from now on.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use mtftable::MtfTable;
    ///
    /// let freed = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&freed);
    ///
    /// let mut table: MtfTable<u32, &str> = MtfTable::default();
    /// table.set_key_destructor(move |_key| counter.set(counter.get() + 1));
    /// table.insert(1, "one").unwrap();
    /// table.remove(&1);
    /// assert_eq!(freed.get(), 1);
    /// ```
    pub fn set_key_destructor(&mut self, destructor: impl FnMut(K) + 'static) {
        self.deleters.key = Deleter::owned(destructor);
    }

    /// Registers (or replaces) the destructor run on every value that leaves
    /// the table from now on.
    pub fn set_value_destructor(&mut self, destructor: impl FnMut(V) + 'static) {
        self.deleters.value = Deleter::owned(destructor);
    }

    /// Stops running a key destructor; keys are dropped normally from now on.
    pub fn clear_key_destructor(&mut self) {
        self.deleters.key = Deleter::Unowned;
    }

    /// Stops running a value destructor.
    pub fn clear_value_destructor(&mut self) {
        self.deleters.value = Deleter::Unowned;
    }

    /// Installs a key deleter directly.
    pub fn set_key_deleter(&mut self, deleter: Deleter<K>) {
        self.deleters.key = deleter;
    }

    /// Installs a value deleter directly.
    pub fn set_value_deleter(&mut self, deleter: Deleter<V>) {
        self.deleters.value = deleter;
    }

    /// Returns `true` if a key destructor is registered.
    pub fn owns_keys(&self) -> bool {
        self.deleters.key.is_owned()
    }

    /// Returns `true` if a value destructor is registered.
    pub fn owns_values(&self) -> bool {
        self.deleters.value.is_owned()
    }

    /// Returns `true` if the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns how many entries fit before the backing storage reallocates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns a reference to the comparator.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Inserts `key`/`value` at the front in O(1).
    ///
    /// No comparator call and no duplicate check: inserting a key that is
    /// already present shadows the older entry for `lookup`, and both are
    /// removed together by `remove`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if storage for the entry cannot be reserved.
    /// The table is unchanged and `key`/`value` are released through the
    /// registered destructors, so an owned item is never leaked.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), AllocError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert();

        if let Err(err) = self.entries.try_reserve(1) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_failed();
            self.deleters.release(key, value);
            return Err(err);
        }
        self.entries.push_front(Entry { key, value });

        #[cfg(debug_assertions)]
        self.entries.debug_validate_invariants();
        Ok(())
    }

    /// Returns the most recently used entry.
    pub fn front(&self) -> Option<(&K, &V)> {
        self.entries.front().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates `(key, value)` pairs from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Iterates values from most to least recently used.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Removes every entry, releasing keys and values through the
    /// registered destructors in front-to-back order. The table stays usable.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.release_all();
    }

    /// Destroys the table, releasing every remaining entry.
    ///
    /// Equivalent to dropping it; taking `self` makes later use a compile
    /// error.
    pub fn destroy(self) {
        drop(self);
    }

    /// Checks that the recency list is well formed.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.entries.validate_links().map_err(InvariantError::new)
    }

    fn release_all(&mut self) {
        let deleters = &mut self.deleters;
        self.entries
            .drain_with(|entry| deleters.release(entry.key, entry.value));
    }
}

impl<K, V, C> MtfTable<K, V, C>
where
    C: KeyComparator<K>,
{
    /// Returns the value of the first entry matching `key` and moves that
    /// entry to the front.
    ///
    /// The relative order of all other entries is unchanged. A miss returns
    /// `None` and leaves the table untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use mtftable::MtfTable;
    ///
    /// let mut table: MtfTable<u32, char> = MtfTable::default();
    /// for (k, v) in [(1, 'a'), (2, 'b'), (3, 'c')] {
    ///     table.insert(k, v).unwrap();
    /// }
    ///
    /// assert_eq!(table.lookup(&1), Some(&'a'));
    /// assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
    ///
    /// assert_eq!(table.lookup(&9), None);
    /// assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
    /// ```
    pub fn lookup(&mut self, key: &K) -> Option<&V> {
        let id = self.find_and_promote(key)?;
        self.entries.get(id).map(|entry| &entry.value)
    }

    /// Like [`lookup`](Self::lookup) but returns a mutable reference.
    pub fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_and_promote(key)?;
        self.entries.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Returns the value of the first entry matching `key` without
    /// reordering anything.
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let found = self
            .entries
            .iter()
            .find(|entry| {
                #[cfg(feature = "metrics")]
                self.metrics.record_peek_scan_step();
                self.comparator.matches(&entry.key, key)
            })
            .map(|entry| &entry.value);

        #[cfg(feature = "metrics")]
        if found.is_some() {
            self.metrics.record_peek_found();
        }
        found
    }

    /// Returns `true` if any entry matches `key`. Does not reorder.
    pub fn contains(&self, key: &K) -> bool {
        self.peek(key).is_some()
    }

    /// Returns how many entries match `key`. Does not reorder.
    pub fn count_matches(&self, key: &K) -> usize {
        self.keys()
            .filter(|stored| self.comparator.matches(stored, key))
            .count()
    }

    /// Removes every entry matching `key` and returns how many were removed.
    ///
    /// Each removed key and value is passed to its destructor (if one is
    /// registered) exactly once. Removing a missing key is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use mtftable::MtfTable;
    ///
    /// let mut table: MtfTable<u32, &str> = MtfTable::default();
    /// table.insert(1, "old").unwrap();
    /// table.insert(2, "other").unwrap();
    /// table.insert(1, "new").unwrap();
    ///
    /// assert_eq!(table.remove(&1), 2);
    /// assert_eq!(table.remove(&1), 0);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn remove(&mut self, key: &K) -> usize {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let mut removed = 0;
        let mut cursor = self.entries.front_id();
        while let Some(id) = cursor {
            let Some(entry) = self.entries.get(id) else {
                break;
            };
            #[cfg(feature = "metrics")]
            self.metrics.record_scan_step();

            if !self.comparator.matches(&entry.key, key) {
                cursor = self.entries.next_id(id);
                continue;
            }

            let Some((entry, next)) = self.entries.remove_and_next(id) else {
                break;
            };
            self.deleters.release(entry.key, entry.value);
            removed += 1;
            cursor = next;

            #[cfg(feature = "metrics")]
            self.metrics.record_removed_entry();
        }

        #[cfg(debug_assertions)]
        self.entries.debug_validate_invariants();
        removed
    }

    /// Finds the first entry matching `key` and relinks it to the front.
    fn find_and_promote(&mut self, key: &K) -> Option<SlotId> {
        let Some(id) = self.find(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_lookup_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_lookup_hit();

        if self.entries.front_id() != Some(id) {
            self.entries.move_to_front(id);
            #[cfg(feature = "metrics")]
            self.metrics.record_promotion();

            #[cfg(debug_assertions)]
            self.entries.debug_validate_invariants();
        }
        Some(id)
    }

    /// Walks positions front to back until the comparator reports a match.
    fn find(&mut self, key: &K) -> Option<SlotId> {
        let mut cursor = self.entries.front_id();
        while let Some(id) = cursor {
            let entry = self.entries.get(id)?;
            #[cfg(feature = "metrics")]
            self.metrics.record_scan_step();

            if self.comparator.matches(&entry.key, key) {
                return Some(id);
            }
            cursor = self.entries.next_id(id);
        }
        None
    }
}

impl<K, V> Default for MtfTable<K, V, OrdComparator>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new(OrdComparator)
    }
}

impl<K, V, C> Drop for MtfTable<K, V, C> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<K, V, C> fmt::Debug for MtfTable<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MtfTable")
            .field("len", &self.entries.len())
            .field("key_deleter", &self.deleters.key)
            .field("value_deleter", &self.deleters.value)
            .finish_non_exhaustive()
    }
}

/// Implementation of the [`MtfLookupTable`] trait.
///
/// # Example
///
/// ```
/// use mtftable::traits::MtfLookupTable;
/// use mtftable::MtfTable;
///
/// let mut table: MtfTable<&str, i32> = MtfTable::default();
/// MtfLookupTable::insert(&mut table, "key", 42).unwrap();
/// assert_eq!(MtfLookupTable::lookup(&mut table, &"key"), Some(&42));
/// ```
impl<K, V, C> MtfLookupTable<K, V> for MtfTable<K, V, C>
where
    C: KeyComparator<K>,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Result<(), AllocError> {
        MtfTable::insert(self, key, value)
    }

    #[inline]
    fn lookup(&mut self, key: &K) -> Option<&V> {
        MtfTable::lookup(self, key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> usize {
        MtfTable::remove(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        MtfTable::len(self)
    }

    fn clear(&mut self) {
        MtfTable::clear(self);
    }
}

#[cfg(feature = "metrics")]
impl<K, V, C> MtfTable<K, V, C> {
    /// Returns a snapshot of table metrics.
    pub fn metrics_snapshot(&self) -> TableMetricsSnapshot {
        self.metrics.snapshot(self.entries.len())
    }

    /// Zeroes all counters.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<K, V, C> MetricsSnapshotProvider<TableMetricsSnapshot> for MtfTable<K, V, C> {
    fn snapshot(&self) -> TableMetricsSnapshot {
        self.metrics_snapshot()
    }
}
