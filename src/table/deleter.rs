//! Conditional ownership of keys and values.
//!
//! A [`Deleter`] is either `Unowned`, in which case a released item is simply
//! dropped (for borrowed or shared handles that is a non-owning release), or
//! `Owned`, in which case every released item is handed to the registered
//! callback exactly once.

use std::fmt;

/// Release strategy for keys or values leaving a table.
pub enum Deleter<T> {
    Unowned,
    Owned(Box<dyn FnMut(T)>),
}

impl<T> Deleter<T> {
    /// Wraps `f` as an owning deleter.
    pub fn owned(f: impl FnMut(T) + 'static) -> Self {
        Self::Owned(Box::new(f))
    }

    /// Returns `true` if a callback is registered.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Releases `item` through the callback, or drops it if unowned.
    #[inline]
    pub fn release(&mut self, item: T) {
        match self {
            Self::Owned(f) => f(item),
            Self::Unowned => drop(item),
        }
    }
}

impl<T> Default for Deleter<T> {
    fn default() -> Self {
        Self::Unowned
    }
}

impl<T> fmt::Debug for Deleter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unowned => f.write_str("Unowned"),
            Self::Owned(_) => f.write_str("Owned(..)"),
        }
    }
}

/// The key and value deleters of one table.
///
/// Both removal paths (`remove` and teardown) go through
/// [`release`](Self::release), so each entry is released the same way.
#[derive(Debug)]
pub(crate) struct EntryDeleters<K, V> {
    pub(crate) key: Deleter<K>,
    pub(crate) value: Deleter<V>,
}

impl<K, V> EntryDeleters<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            key: Deleter::Unowned,
            value: Deleter::Unowned,
        }
    }

    /// Releases the key first, then the value.
    #[inline]
    pub(crate) fn release(&mut self, key: K, value: V) {
        self.key.release(key);
        self.value.release(value);
    }
}
