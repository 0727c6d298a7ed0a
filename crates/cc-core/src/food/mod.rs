//! Food system
//!
//! Contains the per-kind food table and spoilable item instances.

mod item;
mod kind;
mod spoilage;

pub use item::{FoodItem, FoodRecord, InventoryIcon};
pub use kind::{FoodFlags, FoodKind, KindDef, StalePrefix, UNIQUE_ICON_TEMPLATE_FLOOR};
pub use spoilage::Spoilage;
