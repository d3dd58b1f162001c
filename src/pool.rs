//! Vehicle Pool - fixed-capacity slot storage with an O(1) free list.
//!
//! The pool pre-allocates every slot at construction, eliminating slot
//! allocation while the monitor runs. Free slots are threaded into a
//! singly-linked free list through their category-hook `next` field.

use std::fmt;

use crate::signal::VehicleCategory;

/// Sentinel value representing a null/invalid slot index.
pub const NULL_INDEX: u32 = u32::MAX;

/// Index of a slot in the pool - a compressed pointer.
pub type SlotIndex = u32;

/// Selects one of the two link pairs embedded in each slot.
///
/// A live slot is a member of exactly one category list (via the
/// `Category` hook) and the alphabetical list (via the `Alpha` hook).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum Hook {
    Category = 0,
    Alpha = 1,
}

/// Linkage for one intrusive list membership.
///
/// `linked` is the explicit ownership tag: it records whether some list
/// currently holds this slot through this hook, which makes detaching
/// idempotent without consulting list heads.
#[derive(Clone, Copy, Debug)]
pub struct SlotLinks {
    pub next: SlotIndex,
    pub prev: SlotIndex,
    pub linked: bool,
}

impl SlotLinks {
    const fn unlinked() -> Self {
        Self {
            next: NULL_INDEX,
            prev: NULL_INDEX,
            linked: false,
        }
    }
}

/// One unit of pool storage: a tracked vehicle, or a free slot.
///
/// While free, the slot's id is empty, its count is 0, and its
/// category-hook `next` threads the free list.
pub struct VehicleSlot {
    pub category: VehicleCategory,
    pub id: String,
    pub count: u32,
    links: [SlotLinks; 2],
}

impl VehicleSlot {
    fn empty() -> Self {
        Self {
            category: VehicleCategory::Bicycle,
            id: String::new(),
            count: 0,
            links: [SlotLinks::unlinked(); 2],
        }
    }

    /// Clear vehicle data for reuse. Keeps the id's String capacity so a
    /// recycled slot does not reallocate for ids of similar length.
    fn reset(&mut self) {
        self.category = VehicleCategory::Bicycle;
        self.id.clear();
        self.count = 0;
        self.links = [SlotLinks::unlinked(); 2];
    }

    /// Linkage for the given hook (immutable).
    #[inline]
    pub fn links(&self, hook: Hook) -> &SlotLinks {
        &self.links[hook as usize]
    }

    /// Linkage for the given hook (mutable).
    #[inline]
    pub fn links_mut(&mut self, hook: Hook) -> &mut SlotLinks {
        &mut self.links[hook as usize]
    }

    /// Statistics line in the stable `"<id> - <Category> (<count>)"` form.
    pub fn stat_line(&self) -> String {
        format!("{} - {} ({})", self.id, self.category.name(), self.count)
    }
}

impl fmt::Debug for VehicleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VehicleSlot")
            .field("category", &self.category)
            .field("id", &self.id)
            .field("count", &self.count)
            .finish()
    }
}

/// Pre-allocated slot pool with O(1) allocation and deallocation.
///
/// The free list is threaded through the category-hook `next` field of
/// unused slots; the tail's link is terminated with `NULL_INDEX`.
pub struct VehiclePool {
    slots: Vec<VehicleSlot>,
    free_head: SlotIndex,
    live_count: u32,
    capacity: u32,
}

impl VehiclePool {
    /// Create a pool holding `capacity` slots.
    ///
    /// Walks the backing array exactly once, linking slot `i` to slot
    /// `i + 1` and explicitly terminating the tail's forward link.
    ///
    /// # Panics
    /// Panics if capacity is not below `NULL_INDEX` (reserved sentinel).
    pub fn new(capacity: u32) -> Self {
        assert!(capacity < NULL_INDEX, "capacity must be less than NULL_INDEX");

        let mut slots: Vec<VehicleSlot> = Vec::with_capacity(capacity as usize);
        slots.resize_with(capacity as usize, VehicleSlot::empty);

        for i in 0..capacity.saturating_sub(1) {
            slots[i as usize].links[Hook::Category as usize].next = i + 1;
        }
        // Terminate the tail explicitly; a dangling tail link would walk
        // off the end once the pool drains.
        if capacity > 0 {
            slots[(capacity - 1) as usize].links[Hook::Category as usize].next = NULL_INDEX;
        }

        Self {
            slots,
            free_head: if capacity > 0 { 0 } else { NULL_INDEX },
            live_count: 0,
            capacity,
        }
    }

    /// Acquire a free slot, cleared for use.
    ///
    /// Returns `None` when the pool is exhausted. O(1).
    #[inline]
    pub fn alloc(&mut self) -> Option<SlotIndex> {
        if self.free_head == NULL_INDEX {
            return None;
        }

        let index = self.free_head;
        self.free_head = self.slots[index as usize].links[Hook::Category as usize].next;
        self.live_count += 1;

        self.slots[index as usize].reset();
        Some(index)
    }

    /// Return a slot to the free list. O(1).
    ///
    /// The slot must already be detached from both index lists; the
    /// registry's detach path enforces that before calling here.
    #[inline]
    pub fn free(&mut self, index: SlotIndex) {
        debug_assert!(index < self.capacity, "index out of bounds");
        debug_assert!(self.live_count > 0, "double free detected");
        debug_assert!(
            !self.slots[index as usize].links[Hook::Category as usize].linked
                && !self.slots[index as usize].links[Hook::Alpha as usize].linked,
            "freeing a slot still linked in an index"
        );

        self.slots[index as usize].reset();
        self.slots[index as usize].links[Hook::Category as usize].next = self.free_head;
        self.free_head = index;
        self.live_count -= 1;
    }

    /// Immutable access to a slot. O(1).
    #[inline]
    pub fn get(&self, index: SlotIndex) -> &VehicleSlot {
        debug_assert!(index < self.capacity, "index out of bounds");
        &self.slots[index as usize]
    }

    /// Mutable access to a slot. O(1).
    #[inline]
    pub fn get_mut(&mut self, index: SlotIndex) -> &mut VehicleSlot {
        debug_assert!(index < self.capacity, "index out of bounds");
        &mut self.slots[index as usize]
    }

    /// Number of currently live slots.
    #[inline]
    pub fn live(&self) -> u32 {
        self.live_count
    }

    /// Total slot capacity.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// True when no slot is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// True when the free list is drained.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_head == NULL_INDEX
    }
}

impl fmt::Debug for VehiclePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VehiclePool")
            .field("capacity", &self.capacity)
            .field("live", &self.live_count)
            .field("free_head", &self.free_head)
            .finish()
    }
}
