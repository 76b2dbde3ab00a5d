//! Intrusive doubly linked list backed by `SlotArena`.
//!
//! Stores list nodes in a `SlotArena` and links them by `SlotId`, enabling
//! stable handles and O(1) splice/move operations without pointer chasing.
//! There is no sentinel node: `head`/`tail` are explicit and a position of
//! `None` is the end of the list.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//! ```
//!
//! ## Move-to-front relink
//!
//! ```text
//!   before:  head ─► [A] ◄──► [B] ◄──► [C] ◄──► [D] ◄── tail
//!                                        ▲ move_to_front(C)
//!
//!   1. B.next = D          (bridge over C)
//!   2. D.prev = B          (or tail = B when C was last)
//!   3. C.prev = None, C.next = A
//!   4. A.prev = C, head = C
//!
//!   after:   head ─► [C] ◄──► [A] ◄──► [B] ◄──► [D] ◄── tail
//! ```
//!
//! Nothing is reallocated; C keeps its `SlotId`.
//!
//! ## Operations
//! - `push_front` / `insert_before(id)`: attach a new node
//! - `next_id(id)` / `prev_id(id)`: advance a position
//! - `move_to_front(id)`: detach + attach to head
//! - `move_to_back(id)`: detach + attach to tail
//! - `remove(id)` / `remove_and_next(id)`: detach + free slot in arena
//! - `drain_with(f)`: bulk free with a per-payload cleanup callback
//!
//! ## Performance
//! - `push_front` / `push_back` / `insert_before`: O(1)
//! - `pop_front` / `pop_back`: O(1)
//! - `move_to_front` / `move_to_back`: O(1)
//! - `iter`, `drain_with`: O(n)
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::AllocError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

#[derive(Debug)]
/// Intrusive list that stores nodes in a `SlotArena` and links them via `SlotId`.
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity, reporting
    /// allocation failure.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            arena: SlotArena::try_with_capacity(capacity)?,
            head: None,
            tail: None,
        })
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the number of nodes the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the front of the list.
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the SlotId at the front of the list.
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns the value at the back of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the SlotId at the back of the list.
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns the position following `id`; `None` means end of list
    /// (or that `id` is stale).
    pub fn next_id(&self, id: SlotId) -> Option<SlotId> {
        self.arena.get(id).and_then(|node| node.next)
    }

    /// Returns the position preceding `id`; `None` means `id` is the front
    /// (or stale).
    pub fn prev_id(&self, id: SlotId) -> Option<SlotId> {
        self.arena.get(id).and_then(|node| node.prev)
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator of SlotIds from front to back.
    pub fn iter_ids(&self) -> IntrusiveListIdIter<'_, T> {
        IntrusiveListIdIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator of `(SlotId, &T)` from front to back.
    pub fn iter_entries(&self) -> IntrusiveListEntryIter<'_, T> {
        IntrusiveListEntryIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Inserts a new node at the front and returns its `SlotId`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        self.link_front(id);
        id
    }

    /// Reserves room for `additional` more nodes, reporting allocation
    /// failure instead of aborting.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.arena.try_reserve(additional)
    }

    /// Inserts a new node at the front, reporting allocation failure
    /// instead of aborting. The list is unchanged on error.
    pub fn try_push_front(&mut self, value: T) -> Result<SlotId, AllocError> {
        let id = self.arena.try_insert(Node {
            value,
            prev: None,
            next: self.head,
        })?;
        self.link_front(id);
        Ok(id)
    }

    /// Inserts a new node at the back and returns its `SlotId`.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        if let Some(tail) = self.tail {
            if let Some(node) = self.arena.get_mut(tail) {
                node.next = Some(id);
            }
        } else {
            self.head = Some(id);
        }
        self.tail = Some(id);
        id
    }

    /// Inserts a new node immediately before `before`.
    ///
    /// Returns the value back if `before` is not a live node.
    pub fn insert_before(&mut self, before: SlotId, value: T) -> Result<SlotId, T> {
        let prev = match self.arena.get(before) {
            Some(node) => node.prev,
            None => return Err(value),
        };
        if prev.is_none() {
            return Ok(self.push_front(value));
        }

        let id = self.arena.insert(Node {
            value,
            prev,
            next: Some(before),
        });
        if let Some(prev_node) = prev.and_then(|p| self.arena.get_mut(p)) {
            prev_node.next = Some(id);
        }
        if let Some(before_node) = self.arena.get_mut(before) {
            before_node.prev = Some(id);
        }
        Ok(id)
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Removes the node `id` and returns its value together with the
    /// position that followed it, so a front-to-back walk can keep going.
    pub fn remove_and_next(&mut self, id: SlotId) -> Option<(T, Option<SlotId>)> {
        let next = self.arena.get(id)?.next;
        let value = self.remove(id)?;
        Some((value, next))
    }

    /// Moves an existing node to the front; returns `false` if `id` is not present.
    ///
    /// The relative order of every other node is preserved.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Moves an existing node to the back; returns `false` if `id` is not present.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.tail {
            return true;
        }
        self.detach(id);
        self.attach_back(id);
        true
    }

    /// Removes every node front-to-back, handing each value to `cleanup`.
    pub fn drain_with(&mut self, mut cleanup: impl FnMut(T)) {
        while let Some(value) = self.pop_front() {
            cleanup(value);
        }
        self.arena.clear();
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Clears the list and shrinks internal storage.
    pub fn clear_shrink(&mut self) {
        self.clear();
        self.arena.shrink_to_fit();
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the list order as SlotIds from head to tail.
    pub fn debug_snapshot_ids(&self) -> Vec<SlotId> {
        self.iter_ids().collect()
    }

    fn link_front(&mut self, id: SlotId) {
        if let Some(head) = self.head {
            if let Some(node) = self.arena.get_mut(head) {
                node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.arena.get_mut(prev_id) {
                prev_node.next = next;
            }
        } else {
            self.head = next;
        }

        if let Some(next_id) = next {
            if let Some(next_node) = self.arena.get_mut(next_id) {
                next_node.prev = prev;
            }
        } else {
            self.tail = prev;
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }

        Some(())
    }

    fn attach_front(&mut self, id: SlotId) -> Option<()> {
        let old_head = self.head;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = old_head;
        } else {
            return None;
        }
        self.link_front(id);
        Some(())
    }

    fn attach_back(&mut self, id: SlotId) -> Option<()> {
        let old_tail = self.tail;
        if let Some(node) = self.arena.get_mut(id) {
            node.next = None;
            node.prev = old_tail;
        } else {
            return None;
        }
        if let Some(old_tail) = old_tail {
            if let Some(tail_node) = self.arena.get_mut(old_tail) {
                tail_node.next = Some(id);
            }
        } else {
            self.head = Some(id);
        }
        self.tail = Some(id);
        Some(())
    }

    /// Walks the list and checks link symmetry, head/tail placement and
    /// that every arena slot is reachable exactly once.
    pub(crate) fn validate_links(&self) -> Result<(), String> {
        if self.head.is_none() || self.tail.is_none() {
            if self.head.is_some() || self.tail.is_some() || !self.is_empty() {
                return Err(format!(
                    "empty list bookkeeping mismatch: head={:?} tail={:?} len={}",
                    self.head,
                    self.tail,
                    self.len()
                ));
            }
            return Ok(());
        }

        let mut seen = rustc_hash::FxHashSet::default();
        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            if !seen.insert(id) {
                return Err(format!("cycle detected at slot {}", id.index()));
            }
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| format!("linked slot {} is free", id.index()))?;
            if node.prev != prev {
                return Err(format!("slot {} has a stale prev link", id.index()));
            }
            if node.next.is_none() && self.tail != Some(id) {
                return Err(format!("slot {} ends the chain but is not tail", id.index()));
            }

            prev = Some(id);
            current = node.next;
            count += 1;
            if count > self.len() {
                return Err("chain is longer than arena length".to_string());
            }
        }

        if count != self.len() {
            return Err(format!(
                "chain visits {count} nodes but arena holds {}",
                self.len()
            ));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(msg) = self.validate_links() {
            panic!("intrusive list invariant violated: {msg}");
        }
    }
}

pub struct IntrusiveListIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

/// Iterator over SlotIds from front to back.
pub struct IntrusiveListIdIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListIdIter<'a, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(id)
    }
}

/// Iterator over `(SlotId, &T)` pairs from front to back.
pub struct IntrusiveListEntryIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListEntryIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some((id, &node.value))
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &IntrusiveList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn intrusive_list_basic_ops() {
        let mut list = IntrusiveList::new();
        let a = list.push_front("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"c"));
        assert_eq!(list.len(), 3);

        assert!(list.move_to_front(c));
        assert_eq!(list.front(), Some(&"c"));
        assert_eq!(list.back(), Some(&"b"));

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(list.len(), 2);

        assert_eq!(list.pop_front(), Some("c"));
        assert_eq!(list.pop_back(), Some("a"));
        assert!(list.is_empty());

        assert!(!list.contains(a));
    }

    #[test]
    fn intrusive_list_iter_order() {
        let mut list = IntrusiveList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(values(&list), vec![1, 2, 3]);
    }

    #[test]
    fn push_front_builds_reverse_insertion_order() {
        let mut list = IntrusiveList::new();
        list.try_push_front(1).unwrap();
        list.try_push_front(2).unwrap();
        list.try_push_front(3).unwrap();
        assert_eq!(values(&list), vec![3, 2, 1]);
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_of_last_node_updates_tail() {
        let mut list = IntrusiveList::new();
        list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert!(list.move_to_front(c));
        assert_eq!(values(&list), vec!["c", "a", "b"]);
        assert_eq!(list.back_id(), Some(b));
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_of_second_node() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        list.push_back("c");

        assert!(list.move_to_front(b));
        assert_eq!(values(&list), vec!["b", "a", "c"]);
        assert_eq!(list.next_id(b), Some(a));
        assert_eq!(list.prev_id(a), Some(b));
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_of_head_and_sole_node_is_noop() {
        let mut list = IntrusiveList::new();
        let only = list.push_back(1);
        assert!(list.move_to_front(only));
        assert_eq!(list.front_id(), Some(only));
        assert_eq!(list.back_id(), Some(only));

        let other = list.push_back(2);
        assert!(list.move_to_front(only));
        assert_eq!(values(&list), vec![1, 2]);
        assert_eq!(list.back_id(), Some(other));
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_stale_id_returns_false() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        list.push_back(2);
        list.remove(a);
        assert!(!list.move_to_front(a));
        assert_eq!(values(&list), vec![2]);
    }

    #[test]
    fn intrusive_list_move_to_front_back_edges() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert!(list.move_to_back(a));
        assert_eq!(values(&list), vec!["b", "c", "a"]);

        assert!(list.move_to_front(c));
        assert_eq!(values(&list), vec!["c", "b", "a"]);

        assert!(list.contains(b));
    }

    #[test]
    fn insert_before_links_between_neighbors() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let c = list.push_back("c");

        let b = list.insert_before(c, "b").unwrap();
        assert_eq!(values(&list), vec!["a", "b", "c"]);
        assert_eq!(list.next_id(a), Some(b));
        assert_eq!(list.prev_id(c), Some(b));

        let z = list.insert_before(a, "z").unwrap();
        assert_eq!(list.front_id(), Some(z));
        assert_eq!(values(&list), vec!["z", "a", "b", "c"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn insert_before_stale_position_returns_value() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        list.remove(a);
        assert_eq!(list.insert_before(a, 9), Err(9));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_and_next_walks_forward() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        let b = list.push_back(2);
        let c = list.push_back(3);

        assert_eq!(list.remove_and_next(b), Some((2, Some(c))));
        assert_eq!(list.remove_and_next(c), Some((3, None)));
        assert_eq!(list.remove_and_next(c), None);
        assert_eq!(values(&list), vec![1]);
        assert_eq!(list.back_id(), Some(a));
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_remove_middle_and_ends() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(values(&list), vec!["a", "c"]);

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.front(), Some(&"c"));
        assert_eq!(list.back(), Some(&"c"));

        assert_eq!(list.remove(c), Some("c"));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn drain_with_visits_front_to_back() {
        let mut list = IntrusiveList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        let mut seen = Vec::new();
        list.drain_with(|v| seen.push(v));
        assert_eq!(seen, vec![3, 2, 1]);
        assert!(list.is_empty());
        assert_eq!(list.front_id(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_clear_resets_state() {
        let mut list = IntrusiveList::new();
        list.push_back(1);
        list.push_back(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn intrusive_list_get_mut_updates_value() {
        let mut list = IntrusiveList::new();
        let id = list.push_back(10);
        if let Some(value) = list.get_mut(id) {
            *value = 20;
        }
        assert_eq!(list.get(id), Some(&20));
    }

    #[test]
    fn intrusive_list_id_and_entry_iters() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.front_id(), Some(a));
        assert_eq!(list.back_id(), Some(c));
        assert_eq!(list.debug_snapshot_ids(), vec![a, b, c]);

        let entries: Vec<_> = list.iter_entries().map(|(id, v)| (id, *v)).collect();
        assert_eq!(entries, vec![(a, "a"), (b, "b"), (c, "c")]);
    }

    #[test]
    fn intrusive_list_debug_invariants_hold() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        let b = list.push_back(2);
        let c = list.push_back(3);
        list.move_to_front(b);
        list.remove(a);
        list.remove(c);
        list.debug_validate_invariants();
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Moving any node to the front keeps every other node in order.
            #[test]
            fn prop_move_to_front_preserves_others(
                len in 1usize..32,
                pick in any::<prop::sample::Index>(),
            ) {
                let mut list = IntrusiveList::new();
                let ids: Vec<_> = (0..len).map(|v| list.push_back(v)).collect();
                let target = pick.index(len);

                prop_assert!(list.move_to_front(ids[target]));

                let mut expected: Vec<usize> = (0..len).filter(|&v| v != target).collect();
                expected.insert(0, target);
                prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
                prop_assert!(list.validate_links().is_ok());
            }
        }
    }
}
