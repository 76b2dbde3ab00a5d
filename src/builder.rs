//! Builder for [`MtfTable`].
//!
//! Collects the comparator, initial capacity and the key/value destructors
//! so the ownership decision is made once, before the first insert.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use mtftable::builder::MtfTableBuilder;
//! use mtftable::OrdComparator;
//!
//! let freed = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&freed);
//!
//! let mut table = MtfTableBuilder::<u32, String, _>::new(OrdComparator)
//!     .capacity(128)
//!     .value_destructor(move |_v: String| counter.set(counter.get() + 1))
//!     .try_build()
//!     .unwrap();
//!
//! table.insert(1, "hello".to_string()).unwrap();
//! assert_eq!(table.lookup(&1).map(String::as_str), Some("hello"));
//! drop(table);
//! assert_eq!(freed.get(), 1);
//! ```

use crate::error::AllocError;
use crate::table::{Deleter, MtfTable};

/// Configuration for an [`MtfTable`].
pub struct MtfTableBuilder<K, V, C> {
    comparator: C,
    capacity: usize,
    key_deleter: Deleter<K>,
    value_deleter: Deleter<V>,
}

impl<K, V, C> MtfTableBuilder<K, V, C> {
    /// Starts a builder with no reserved capacity and no destructors.
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            capacity: 0,
            key_deleter: Deleter::Unowned,
            value_deleter: Deleter::Unowned,
        }
    }

    /// Number of entries to reserve up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Makes the table own its keys, releasing each through `destructor`.
    pub fn key_destructor(mut self, destructor: impl FnMut(K) + 'static) -> Self {
        self.key_deleter = Deleter::owned(destructor);
        self
    }

    /// Makes the table own its values, releasing each through `destructor`.
    pub fn value_destructor(mut self, destructor: impl FnMut(V) + 'static) -> Self {
        self.value_deleter = Deleter::owned(destructor);
        self
    }

    /// Builds the table, aborting on allocation failure like `Vec::with_capacity`.
    pub fn build(self) -> MtfTable<K, V, C> {
        let mut table = MtfTable::with_capacity(self.capacity, self.comparator);
        table.set_key_deleter(self.key_deleter);
        table.set_value_deleter(self.value_deleter);
        table
    }

    /// Builds the table, returning [`AllocError`] if the requested capacity
    /// cannot be reserved.
    pub fn try_build(self) -> Result<MtfTable<K, V, C>, AllocError> {
        let mut table = MtfTable::try_with_capacity(self.capacity, self.comparator)?;
        table.set_key_deleter(self.key_deleter);
        table.set_value_deleter(self.value_deleter);
        Ok(table)
    }
}

impl<K, V, C: std::fmt::Debug> std::fmt::Debug for MtfTableBuilder<K, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MtfTableBuilder")
            .field("comparator", &self.comparator)
            .field("capacity", &self.capacity)
            .field("key_deleter", &self.key_deleter)
            .field("value_deleter", &self.value_deleter)
            .finish()
    }
}
