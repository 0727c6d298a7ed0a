//! cc-core: Food spoilage and consumption for the Climates & Calories survival layer
//!
//! This crate contains the food model with no file I/O. It is designed to be
//! pure and testable: the host game supplies the eater, the inventory, the
//! message sink and the randomness through the traits exported here.

pub mod action;
pub mod consumer;
pub mod food;
pub mod notify;
pub mod pantry;
pub mod rules;

mod error;
mod rng;

pub use action::{
    ConsumeResult, DiseaseRisk, Feeling, MealContext, Rejection, UseOutcome, consume, resolve,
    use_item,
};
pub use consumer::{Consumer, Disease, DiseasePool, HungerClock, Survivor};
pub use error::FoodError;
pub use food::{FoodItem, FoodKind, FoodRecord, InventoryIcon, Spoilage};
pub use notify::{MessageLog, Notifier};
pub use pantry::{FoodStore, ItemId, Pantry};
pub use rng::{GameRng, RandomSource};
pub use rules::ConsumeRules;
