//! Food item instances

use serde::{Deserialize, Serialize};

use super::{FoodKind, Spoilage};
use crate::FoodError;

/// Which inventory icon to draw for a food item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryIcon {
    /// The kind's normal world icon
    World,
    /// Spoiled art stored in the kind's own archive
    Spoiled { archive: u32, record: u32 },
}

/// The complete recoverable state of one food item.
///
/// Everything else (calories, name, value) is derived from the kind on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Host item template identifier
    pub kind: u32,
    pub spoilage: Spoilage,
}

/// A single food item, or a stack of rations.
///
/// Not serializable on its own: persist it as a [`FoodRecord`] so the
/// derived name and value are rebuilt from the kind on load.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    kind: FoodKind,
    spoilage: Spoilage,
    /// Status prefix + template name
    short_name: String,
    value: u32,
    /// Units in this stack (always 1 unless stackable)
    stack_count: u32,
}

impl FoodItem {
    /// Create a fresh item of the given kind
    pub fn new(kind: FoodKind) -> Self {
        Self::with_spoilage(kind, Spoilage::Fresh)
    }

    /// Create a fresh item from a host template identifier
    pub fn from_template(template: u32) -> Result<Self, FoodError> {
        FoodKind::from_template(template).map(Self::new)
    }

    /// Create a stack of `count` units (at least one)
    pub fn stack(kind: FoodKind, count: u32) -> Self {
        let mut item = Self::new(kind);
        item.set_stack_count(count);
        item
    }

    fn with_spoilage(kind: FoodKind, spoilage: Spoilage) -> Self {
        let mut item = Self {
            kind,
            spoilage,
            short_name: String::new(),
            value: 0,
            stack_count: 1,
        };
        item.refresh();
        item
    }

    /// Rebuild a saved item. Rations never spoil, so a saved level is ignored for them.
    pub fn from_record(record: FoodRecord) -> Result<Self, FoodError> {
        let kind = FoodKind::from_template(record.kind)?;
        let spoilage = if kind.spoils() {
            record.spoilage
        } else {
            Spoilage::Fresh
        };
        Ok(Self::with_spoilage(kind, spoilage))
    }

    pub fn to_record(&self) -> FoodRecord {
        FoodRecord {
            kind: self.kind.template(),
            spoilage: self.spoilage,
        }
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    pub fn spoilage(&self) -> Spoilage {
        self.spoilage
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Sale value; zero once the item is no longer fresh
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn calorie_rating(&self) -> u32 {
        self.kind.calories()
    }

    pub fn is_stackable(&self) -> bool {
        self.kind.is_stackable()
    }

    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// Resize the stack. Non-stackable items stay at one unit, and no stack
    /// drops below one.
    pub fn set_stack_count(&mut self, count: u32) {
        self.stack_count = if self.is_stackable() { count.max(1) } else { 1 };
    }

    /// Nutrition if eaten now: calories / (ordinal + 1), rounded down
    pub fn effective_calories(&self) -> u32 {
        self.calorie_rating() / self.spoilage.divisor()
    }

    /// Advance spoilage by one level.
    ///
    /// Returns `true` when the item is already fully spoiled (or cannot
    /// spoil) and nothing changed, `false` after a step.
    pub fn advance(&mut self) -> bool {
        if !self.kind.spoils() {
            return true;
        }
        match self.spoilage.next() {
            Some(next) => {
                tracing::debug!(
                    kind = %self.kind,
                    from = %self.spoilage,
                    to = %next,
                    "food spoiled"
                );
                self.spoilage = next;
                self.short_name = self.display_name();
                self.value = 0;
                false
            }
            None => true,
        }
    }

    /// Inventory icon for the current spoilage level
    pub fn inventory_icon(&self) -> InventoryIcon {
        if self.kind.has_unique_icon() {
            return InventoryIcon::World;
        }
        let archive = self.kind.template();
        match self.spoilage {
            Spoilage::Fresh | Spoilage::Stale => InventoryIcon::World,
            Spoilage::Mouldy => InventoryIcon::Spoiled { archive, record: 0 },
            Spoilage::Rotten | Spoilage::Putrid => InventoryIcon::Spoiled { archive, record: 1 },
        }
    }

    fn display_name(&self) -> String {
        format!("{}{}", self.kind.status_prefix(self.spoilage), self.kind.name())
    }

    fn refresh(&mut self) {
        self.short_name = self.display_name();
        self.value = if self.spoilage == Spoilage::Fresh {
            self.kind.def().value
        } else {
            0
        };
    }
}

impl core::fmt::Display for FoodItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.stack_count > 1 {
            write!(f, "{} {}", self.stack_count, self.short_name)
        } else {
            f.write_str(&self.short_name)
        }
    }
}
