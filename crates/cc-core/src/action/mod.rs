//! Player actions on food
//!
//! Implements the "use item" entry point the host calls from its inventory.

pub mod eat;

pub use eat::{
    ConsumeResult, DiseaseRisk, Feeling, MealContext, RATIONS_HINT, Rejection, UseOutcome,
    consume, resolve, use_item,
};
