//! Vehicle Registry - the dual index layer over live pool slots.
//!
//! Maintains one insertion-ordered list per category plus a single
//! alphabetical list across all categories. Both index the same slots
//! through independent hooks; neither owns the storage.

use crate::list::VehicleList;
use crate::pool::{Hook, SlotIndex, VehiclePool};
use crate::signal::{VehicleCategory, CATEGORIES};

/// Dual index over the live slots of a [`VehiclePool`].
///
/// Lookups are linear scans, acceptable at the bounded capacity this
/// registry is built for (1000 slots in the reference configuration).
#[derive(Debug)]
pub struct VehicleRegistry {
    bicycles: VehicleList,
    cars: VehicleList,
    scooters: VehicleList,
    alphabetical: VehicleList,
}

impl VehicleRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            bicycles: VehicleList::new(Hook::Category),
            cars: VehicleList::new(Hook::Category),
            scooters: VehicleList::new(Hook::Category),
            alphabetical: VehicleList::new(Hook::Alpha),
        }
    }

    #[inline]
    fn category_list(&self, category: VehicleCategory) -> &VehicleList {
        match category {
            VehicleCategory::Bicycle => &self.bicycles,
            VehicleCategory::Car => &self.cars,
            VehicleCategory::Scooter => &self.scooters,
        }
    }

    #[inline]
    fn category_list_mut(&mut self, category: VehicleCategory) -> &mut VehicleList {
        match category {
            VehicleCategory::Bicycle => &mut self.bicycles,
            VehicleCategory::Car => &mut self.cars,
            VehicleCategory::Scooter => &mut self.scooters,
        }
    }

    /// Insert a freshly populated slot into both indices.
    ///
    /// Appends to the tail of its category list (O(1)) and performs a
    /// sorted insertion by id into the alphabetical list (O(n) linear
    /// scan from the head). Equal ids keep insertion order, so the same
    /// id across categories lands in category arrival order.
    pub fn insert(&mut self, pool: &mut VehiclePool, index: SlotIndex) {
        let category = pool.get(index).category;
        self.category_list_mut(category).push_back(pool, index);
        self.insert_alpha_sorted(pool, index);
    }

    fn insert_alpha_sorted(&mut self, pool: &mut VehiclePool, index: SlotIndex) {
        let mut anchor = None;
        for cursor in self.alphabetical.iter(pool) {
            if pool.get(index).id < pool.get(cursor).id {
                anchor = Some(cursor);
                break;
            }
        }
        match anchor {
            Some(at) => self.alphabetical.insert_before(pool, at, index),
            None => self.alphabetical.push_back(pool, index),
        }
    }

    /// Find a live slot by (category, id). Linear scan of that
    /// category's list only.
    pub fn find(
        &self,
        pool: &VehiclePool,
        category: VehicleCategory,
        id: &str,
    ) -> Option<SlotIndex> {
        self.category_list(category)
            .iter(pool)
            .find(|&idx| pool.get(idx).id == id)
    }

    /// Number of live entries in one category.
    #[inline]
    pub fn category_len(&self, category: VehicleCategory) -> u32 {
        self.category_list(category).len()
    }

    /// Number of live entries across all categories.
    #[inline]
    pub fn len(&self) -> u32 {
        self.alphabetical.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alphabetical.is_empty()
    }

    /// Statistics lines for one category, in first-seen order.
    pub fn statistics_by(&self, pool: &VehiclePool, category: VehicleCategory) -> Vec<String> {
        self.category_list(category)
            .iter(pool)
            .map(|idx| pool.get(idx).stat_line())
            .collect()
    }

    /// Statistics lines across all categories, alphabetical by id.
    pub fn statistics(&self, pool: &VehiclePool) -> Vec<String> {
        self.alphabetical
            .iter(pool)
            .map(|idx| pool.get(idx).stat_line())
            .collect()
    }

    /// Detach every live slot from both indices and return it to the
    /// pool. Safe even if a slot is only a member of a subset of the
    /// indices; detaching is idempotent per hook.
    pub fn clear(&mut self, pool: &mut VehiclePool) {
        for category in CATEGORIES {
            while let Some(index) = self.category_list_mut(category).pop_front(pool) {
                self.alphabetical.remove(pool, index);
                pool.free(index);
            }
        }
        // Anything left here was never linked into a category list.
        while let Some(index) = self.alphabetical.pop_front(pool) {
            pool.free(index);
        }
    }
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
