//! Vehicle List - an intrusive doubly-linked list over pool indices.
//!
//! Each list is bound to one of the two hooks embedded in every slot, so
//! the same slot can sit in a category list and the alphabetical list at
//! once. O(1) append and removal from any position; detaching is
//! idempotent thanks to the per-hook membership tag.

use crate::pool::{Hook, SlotIndex, VehiclePool, NULL_INDEX};

/// An ordered collection of live slots, linked through one hook.
///
/// The list does not own the slots; the pool does. Removing a slot from
/// the list never frees it.
#[derive(Clone, Copy, Debug)]
pub struct VehicleList {
    hook: Hook,
    head: SlotIndex,
    tail: SlotIndex,
    len: u32,
}

impl VehicleList {
    /// Create an empty list bound to `hook`.
    #[inline]
    pub const fn new(hook: Hook) -> Self {
        Self {
            hook,
            head: NULL_INDEX,
            tail: NULL_INDEX,
            len: 0,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.len
    }

    /// Index of the first slot, or `NULL_INDEX` if empty.
    #[inline]
    pub const fn head(&self) -> SlotIndex {
        self.head
    }

    /// Append a slot at the tail. O(1).
    pub fn push_back(&mut self, pool: &mut VehiclePool, index: SlotIndex) {
        debug_assert!(
            !pool.get(index).links(self.hook).linked,
            "slot already linked through this hook"
        );

        if self.tail == NULL_INDEX {
            debug_assert!(self.head == NULL_INDEX);
            self.head = index;
            self.tail = index;
            let links = pool.get_mut(index).links_mut(self.hook);
            links.prev = NULL_INDEX;
            links.next = NULL_INDEX;
            links.linked = true;
        } else {
            pool.get_mut(self.tail).links_mut(self.hook).next = index;
            let links = pool.get_mut(index).links_mut(self.hook);
            links.prev = self.tail;
            links.next = NULL_INDEX;
            links.linked = true;
            self.tail = index;
        }

        self.len += 1;
    }

    /// Insert a slot immediately before `at`. O(1).
    ///
    /// `at` must be a current member of this list.
    pub fn insert_before(&mut self, pool: &mut VehiclePool, at: SlotIndex, index: SlotIndex) {
        debug_assert!(pool.get(at).links(self.hook).linked, "anchor not linked");
        debug_assert!(!pool.get(index).links(self.hook).linked);

        let prev = pool.get(at).links(self.hook).prev;

        {
            let links = pool.get_mut(index).links_mut(self.hook);
            links.prev = prev;
            links.next = at;
            links.linked = true;
        }
        pool.get_mut(at).links_mut(self.hook).prev = index;

        if prev == NULL_INDEX {
            debug_assert!(self.head == at);
            self.head = index;
        } else {
            pool.get_mut(prev).links_mut(self.hook).next = index;
        }

        self.len += 1;
    }

    /// Detach a slot from anywhere in the list. O(1).
    ///
    /// Idempotent: detaching a slot that is not a member is a no-op.
    /// Returns `true` if the slot was actually removed.
    pub fn remove(&mut self, pool: &mut VehiclePool, index: SlotIndex) -> bool {
        if !pool.get(index).links(self.hook).linked {
            return false;
        }

        let links = *pool.get(index).links(self.hook);
        let (prev, next) = (links.prev, links.next);

        if prev == NULL_INDEX {
            debug_assert!(self.head == index);
            self.head = next;
        } else {
            pool.get_mut(prev).links_mut(self.hook).next = next;
        }

        if next == NULL_INDEX {
            debug_assert!(self.tail == index);
            self.tail = prev;
        } else {
            pool.get_mut(next).links_mut(self.hook).prev = prev;
        }

        let links = pool.get_mut(index).links_mut(self.hook);
        links.prev = NULL_INDEX;
        links.next = NULL_INDEX;
        links.linked = false;

        self.len -= 1;
        true
    }

    /// Remove and return the head slot, or `None` if empty. O(1).
    pub fn pop_front(&mut self, pool: &mut VehiclePool) -> Option<SlotIndex> {
        if self.head == NULL_INDEX {
            return None;
        }
        let index = self.head;
        self.remove(pool, index);
        Some(index)
    }

    /// Iterate the list front to back, yielding slot indices.
    #[inline]
    pub fn iter<'a>(&self, pool: &'a VehiclePool) -> ListIter<'a> {
        ListIter {
            pool,
            hook: self.hook,
            cursor: self.head,
        }
    }
}

/// Forward iterator over a [`VehicleList`].
pub struct ListIter<'a> {
    pool: &'a VehiclePool,
    hook: Hook,
    cursor: SlotIndex,
}

impl Iterator for ListIter<'_> {
    type Item = SlotIndex;

    fn next(&mut self) -> Option<SlotIndex> {
        if self.cursor == NULL_INDEX {
            return None;
        }
        let index = self.cursor;
        self.cursor = self.pool.get(index).links(self.hook).next;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_with(n: u32) -> (VehiclePool, Vec<SlotIndex>) {
        let mut pool = VehiclePool::new(n);
        let indices = (0..n).map(|_| pool.alloc().unwrap()).collect();
        (pool, indices)
    }

    #[test]
    fn test_empty_list() {
        let list = VehicleList::new(Hook::Category);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), NULL_INDEX);
    }

    #[test]
    fn test_push_back_order() {
        let (mut pool, idx) = pool_with(3);
        let mut list = VehicleList::new(Hook::Category);

        for &i in &idx {
            list.push_back(&mut pool, i);
        }

        assert_eq!(list.len(), 3);
        let collected: Vec<_> = list.iter(&pool).collect();
        assert_eq!(collected, idx);
    }

    #[test]
    fn test_insert_before_head_and_middle() {
        let (mut pool, idx) = pool_with(4);
        let mut list = VehicleList::new(Hook::Alpha);

        list.push_back(&mut pool, idx[0]);
        list.push_back(&mut pool, idx[1]);

        // Before head
        list.insert_before(&mut pool, idx[0], idx[2]);
        // Before a middle element
        list.insert_before(&mut pool, idx[1], idx[3]);

        let collected: Vec<_> = list.iter(&pool).collect();
        assert_eq!(collected, vec![idx[2], idx[0], idx[3], idx[1]]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_remove_positions() {
        let (mut pool, idx) = pool_with(3);
        let mut list = VehicleList::new(Hook::Category);
        for &i in &idx {
            list.push_back(&mut pool, i);
        }

        // Middle
        assert!(list.remove(&mut pool, idx[1]));
        assert_eq!(list.iter(&pool).collect::<Vec<_>>(), vec![idx[0], idx[2]]);

        // Head
        assert!(list.remove(&mut pool, idx[0]));
        assert_eq!(list.head(), idx[2]);

        // Tail (now the only node)
        assert!(list.remove(&mut pool, idx[2]));
        assert!(list.is_empty());
        assert_eq!(list.head(), NULL_INDEX);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut pool, idx) = pool_with(2);
        let mut list = VehicleList::new(Hook::Category);
        list.push_back(&mut pool, idx[0]);

        assert!(list.remove(&mut pool, idx[0]));
        assert!(!list.remove(&mut pool, idx[0]), "second detach is a no-op");
        assert!(!list.remove(&mut pool, idx[1]), "never-linked slot is a no-op");
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_pop_front() {
        let (mut pool, idx) = pool_with(2);
        let mut list = VehicleList::new(Hook::Category);
        list.push_back(&mut pool, idx[0]);
        list.push_back(&mut pool, idx[1]);

        assert_eq!(list.pop_front(&mut pool), Some(idx[0]));
        assert_eq!(list.pop_front(&mut pool), Some(idx[1]));
        assert_eq!(list.pop_front(&mut pool), None);
    }

    #[test]
    fn test_dual_hook_membership_independent() {
        let (mut pool, idx) = pool_with(2);
        let mut cat = VehicleList::new(Hook::Category);
        let mut alpha = VehicleList::new(Hook::Alpha);

        cat.push_back(&mut pool, idx[0]);
        alpha.push_back(&mut pool, idx[0]);

        // Removing from one list leaves the other membership intact.
        assert!(cat.remove(&mut pool, idx[0]));
        assert!(pool.get(idx[0]).links(Hook::Alpha).linked);
        assert!(alpha.remove(&mut pool, idx[0]));
    }
}
