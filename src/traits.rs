//! # Table Traits
//!
//! Two seams: how keys are matched ([`KeyComparator`]) and what a
//! move-to-front table can do ([`MtfLookupTable`]).
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────┐      ┌─────────────────────────────────────┐
//!   │        KeyComparator<K>          │      │        MtfLookupTable<K, V>         │
//!   │                                  │      │                                     │
//!   │  compare(&stored, &probe)        │◄─────│  insert(&mut, K, V) → Result        │
//!   │     → Ordering                   │ uses │  lookup(&mut, &K) → Option<&V>      │
//!   │                                  │      │  remove(&mut, &K) → usize           │
//!   │  impls: OrdComparator,           │      │  len / is_empty / clear             │
//!   │         Fn(&K, &K) -> Ordering   │      │                                     │
//!   └──────────────────────────────────┘      └─────────────────────────────────────┘
//! ```
//!
//! ## Comparator Contract
//!
//! | Result              | Meaning                             |
//! |---------------------|-------------------------------------|
//! | `Ordering::Less`    | stored key sorts before probe       |
//! | `Ordering::Equal`   | match                               |
//! | `Ordering::Greater` | stored key sorts after probe        |
//!
//! Only `Equal` is acted on: the table never sorts, so an inconsistent
//! comparator can only change which entries match.

use std::cmp::Ordering;

use crate::error::AllocError;

/// Three-way comparison used to match keys.
///
/// `stored` is the key held by an entry, `probe` is the key passed to
/// `lookup`/`remove`.
pub trait KeyComparator<K: ?Sized> {
    fn compare(&self, stored: &K, probe: &K) -> Ordering;

    /// Returns `true` when `stored` matches `probe`.
    #[inline]
    fn matches(&self, stored: &K, probe: &K) -> bool {
        self.compare(stored, probe) == Ordering::Equal
    }
}

impl<K: ?Sized, F> KeyComparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, stored: &K, probe: &K) -> Ordering {
        self(stored, probe)
    }
}

/// Comparator that delegates to [`Ord::cmp`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrdComparator;

impl<K: Ord + ?Sized> KeyComparator<K> for OrdComparator {
    #[inline]
    fn compare(&self, stored: &K, probe: &K) -> Ordering {
        stored.cmp(probe)
    }
}

/// Operations every move-to-front table supports.
///
/// # Example
///
/// ```
/// use mtftable::traits::MtfLookupTable;
/// use mtftable::MtfTable;
///
/// fn warm<T: MtfLookupTable<u32, u32>>(table: &mut T, hot: u32) -> Option<u32> {
///     table.lookup(&hot).copied()
/// }
///
/// let mut table: MtfTable<u32, u32> = MtfTable::default();
/// table.insert(7, 70).unwrap();
/// assert_eq!(warm(&mut table, 7), Some(70));
/// ```
pub trait MtfLookupTable<K, V> {
    /// Inserts at the front without checking for duplicates.
    fn insert(&mut self, key: K, value: V) -> Result<(), AllocError>;

    /// Returns the first matching value and promotes its entry to the front.
    fn lookup(&mut self, key: &K) -> Option<&V>;

    /// Removes every matching entry, returning how many were removed.
    fn remove(&mut self, key: &K) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    fn clear(&mut self);
}
