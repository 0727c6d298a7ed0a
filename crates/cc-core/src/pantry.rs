//! Food inventory
//!
//! The host owns the real inventory; [`FoodStore`] is the slice of it that
//! eating needs. [`Pantry`] is a plain ordered implementation.

use serde::{Deserialize, Serialize};

use crate::food::{FoodItem, FoodKind, FoodRecord};
use crate::rng::RandomSource;
use crate::rules::ConsumeRules;
use crate::FoodError;

/// Identifier of an item within one collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub const NONE: ItemId = ItemId(0);

    /// The following id. Wraps past `u32::MAX` without ever yielding [`ItemId::NONE`].
    pub fn next(self) -> Self {
        ItemId(self.0.wrapping_add(1).max(1))
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inventory operations the consumption rules rely on
pub trait FoodStore {
    fn get(&self, id: ItemId) -> Option<&FoodItem>;
    fn get_mut(&mut self, id: ItemId) -> Option<&mut FoodItem>;

    /// Take the whole item out of the collection
    fn remove(&mut self, id: ItemId) -> Option<FoodItem>;

    /// Take one unit off a stack, removing the item when it was the last.
    /// Returns the units left.
    fn decrement_stack(&mut self, id: ItemId) -> Result<u32, FoodError> {
        let item = self.get_mut(id).ok_or(FoodError::ItemNotFound(id))?;
        let count = item.stack_count();
        if count > 1 {
            item.set_stack_count(count - 1);
            return Ok(count - 1);
        }
        self.remove(id);
        Ok(0)
    }

    /// Remove one unit: decrement stackable items, remove everything else
    fn remove_one(&mut self, id: ItemId) -> Result<(), FoodError> {
        let stackable = self
            .get(id)
            .map(FoodItem::is_stackable)
            .ok_or(FoodError::ItemNotFound(id))?;
        if stackable {
            self.decrement_stack(id)?;
        } else {
            self.remove(id);
        }
        Ok(())
    }
}

/// Ordered food collection with stable ids.
///
/// Persist it through [`Pantry::to_records`] and [`Pantry::from_records`].
#[derive(Debug, Clone)]
pub struct Pantry {
    items: Vec<(ItemId, FoodItem)>,
    last_id: ItemId,
}

impl Default for Pantry {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            last_id: ItemId::NONE,
        }
    }
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, returning its id
    pub fn add(&mut self, item: FoodItem) -> ItemId {
        self.last_id = self.last_id.next();
        self.items.push((self.last_id, item));
        self.last_id
    }

    /// Add a fresh ration stack of random size
    pub fn add_rations<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        rules: &ConsumeRules,
    ) -> ItemId {
        let count = rng.range(rules.ration_stack_min, rules.ration_stack_max);
        self.add(FoodItem::stack(FoodKind::Rations, count))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &FoodItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    /// First item of the given kind
    pub fn find_kind(&self, kind: FoodKind) -> Option<ItemId> {
        self.iter()
            .find(|(_, item)| item.kind() == kind)
            .map(|(id, _)| id)
    }

    /// Advance every item by one spoilage step; returns how many changed
    pub fn spoil_all(&mut self) -> usize {
        let mut changed = 0;
        for (_, item) in &mut self.items {
            if !item.advance() {
                changed += 1;
            }
        }
        tracing::debug!(changed, total = self.items.len(), "pantry spoiled");
        changed
    }

    /// Persistable state, one record and stack count per item
    pub fn to_records(&self) -> Vec<(FoodRecord, u32)> {
        self.items
            .iter()
            .map(|(_, item)| (item.to_record(), item.stack_count()))
            .collect()
    }

    /// Rebuild from saved records. Ids are reassigned.
    pub fn from_records(
        records: impl IntoIterator<Item = (FoodRecord, u32)>,
    ) -> Result<Self, FoodError> {
        let mut pantry = Self::new();
        for (record, count) in records {
            let mut item = FoodItem::from_record(record)?;
            item.set_stack_count(count);
            pantry.add(item);
        }
        Ok(pantry)
    }
}

impl FoodStore for Pantry {
    fn get(&self, id: ItemId) -> Option<&FoodItem> {
        self.items.iter().find(|(i, _)| *i == id).map(|(_, item)| item)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut FoodItem> {
        self.items
            .iter_mut()
            .find(|(i, _)| *i == id)
            .map(|(_, item)| item)
    }

    fn remove(&mut self, id: ItemId) -> Option<FoodItem> {
        let idx = self.items.iter().position(|(i, _)| *i == id)?;
        Some(self.items.remove(idx).1)
    }
}
