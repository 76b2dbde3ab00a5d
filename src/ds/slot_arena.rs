//! Slot arena that hands out stable `SlotId` handles.
//!
//! Values live in a `Vec<Option<T>>`; removed slots go on a free list and are
//! reused by later inserts, so a `SlotId` stays valid until its own value is
//! removed, regardless of what happens to its neighbors.

use crate::error::AllocError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Creates an arena with `capacity` reserved slots, reporting allocator
    /// failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        Ok(Self {
            slots,
            free_list: Vec::new(),
            len: 0,
        })
    }

    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(value);
            idx
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Makes room for `additional` more values without aborting on
    /// allocator failure. Freed slots count towards the reservation.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let reusable = self.free_list.len();
        if additional > reusable {
            self.slots.try_reserve(additional - reusable)?;
        }
        Ok(())
    }

    /// Inserts `value`, growing the slot vector fallibly when no freed slot
    /// is available. On error the arena is unchanged and `value` is dropped.
    pub fn try_insert(&mut self, value: T) -> Result<SlotId, AllocError> {
        self.try_reserve(1)?;
        Ok(self.insert(value))
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        let value = slot.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.slots
            .get(id.0)
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }

    /// Releases unused capacity. Trailing free slots are trimmed first so
    /// the slot vector can actually shrink.
    pub fn shrink_to_fit(&mut self) {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        let live = self.slots.len();
        self.free_list.retain(|&idx| idx < live);
        self.slots.shrink_to_fit();
        self.free_list.shrink_to_fit();
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|value| (SlotId(idx), value)))
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
