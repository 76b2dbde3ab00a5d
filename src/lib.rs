//! mtftable: an associative table that reorders itself on access.
//!
//! Entries sit in a single recency list; every successful lookup moves the
//! matched entry to the front ("move-to-front"), so keys with temporal
//! locality are found after a handful of comparisons. See [`table`] for the
//! core and [`ds`] for the slot-arena linked list it is built on.

pub mod builder;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod table;
pub mod traits;

pub use builder::MtfTableBuilder;
pub use error::{AllocError, InvariantError};
pub use table::{Deleter, MtfTable};
pub use traits::{KeyComparator, MtfLookupTable, OrdComparator};
