//! Errors raised by the food core.
//!
//! Refusing a meal is not an error; see [`crate::action::Rejection`].

use thiserror::Error;

use crate::pantry::ItemId;

/// Content and lookup errors
#[derive(Error, Debug)]
pub enum FoodError {
    #[error("Unknown food template: {0}")]
    UnknownTemplate(u32),

    #[error("No food item {0} in this collection")]
    ItemNotFound(ItemId),

    #[error("Invalid consumption rules: {0}")]
    Rules(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_error_display() {
        let err = FoodError::UnknownTemplate(999);
        assert!(err.to_string().contains("999"));

        let err = FoodError::ItemNotFound(ItemId(7));
        assert!(err.to_string().contains("#7"));
    }
}
