//! Error types for the mtftable library.
//!
//! ## Key Components
//!
//! - [`AllocError`]: Returned when the allocator cannot provide storage for
//!   a new table or a new entry.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//!
//! A lookup miss is not an error; it is `None`.
//!
//! ## Example Usage
//!
//! ```
//! use mtftable::error::AllocError;
//! use mtftable::{MtfTable, OrdComparator};
//!
//! let mut table = MtfTable::<u32, &str>::try_with_capacity(16, OrdComparator)?;
//! table.insert(1, "one")?;
//! assert_eq!(table.lookup(&1), Some(&"one"));
//! # Ok::<(), AllocError>(())
//! ```

use std::collections::TryReserveError;
use std::fmt;

// ---------------------------------------------------------------------------
// AllocError
// ---------------------------------------------------------------------------

/// Error returned when storage for a table or entry could not be reserved.
///
/// The table is left exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocError(TryReserveError);

impl AllocError {
    /// Returns the underlying reservation error.
    #[inline]
    pub fn reserve_error(&self) -> &TryReserveError {
        &self.0
    }
}

impl From<TryReserveError> for AllocError {
    #[inline]
    fn from(err: TryReserveError) -> Self {
        Self(err)
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate table storage: {}", self.0)
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal table invariants are violated.
///
/// Produced by [`MtfTable::check_invariants`](crate::table::MtfTable::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity_overflow() -> TryReserveError {
        Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err()
    }

    // -- AllocError -------------------------------------------------------

    #[test]
    fn alloc_display_mentions_allocation() {
        let err = AllocError::from(capacity_overflow());
        assert!(err.to_string().starts_with("failed to allocate table storage"));
    }

    #[test]
    fn alloc_exposes_source() {
        use std::error::Error;

        let err = AllocError::from(capacity_overflow());
        assert!(err.source().is_some());
        assert_eq!(err.reserve_error(), &capacity_overflow());
    }

    #[test]
    fn alloc_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AllocError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("chain length mismatch");
        assert_eq!(err.to_string(), "chain length mismatch");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }
}
