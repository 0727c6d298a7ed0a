//! Tuning constants for meals

use serde::{Deserialize, Serialize};

use crate::FoodError;

/// Consumption tuning. `Default` holds the stock values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumeRules {
    /// Hunger headroom: food is refused when `hunger + slack < calories`
    pub hunger_slack: u32,
    /// Most banked hunger (game minutes) one meal can draw on
    pub banked_hunger_cap: u32,
    /// Health gained = calories / this
    pub health_divisor: u32,
    /// Magicka gained = calories / this
    pub magicka_divisor: u32,
    /// Fatigue recovered = calories / this
    pub fatigue_divisor: u32,
    /// Smallest fresh ration stack
    pub ration_stack_min: u32,
    /// Exclusive upper bound of a fresh ration stack
    pub ration_stack_max: u32,
}

impl Default for ConsumeRules {
    fn default() -> Self {
        Self {
            hunger_slack: 1500,
            banked_hunger_cap: 240,
            health_divisor: 10,
            magicka_divisor: 10,
            fatigue_divisor: 5,
            ration_stack_min: 2,
            ration_stack_max: 10,
        }
    }
}

impl ConsumeRules {
    /// Parse rules from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, FoodError> {
        let rules: Self = serde_json::from_str(json)?;
        Ok(rules.sanitized())
    }

    /// Replace zero divisors with 1
    fn sanitized(mut self) -> Self {
        for d in [
            &mut self.health_divisor,
            &mut self.magicka_divisor,
            &mut self.fatigue_divisor,
        ] {
            if *d == 0 {
                tracing::warn!("zero divisor in consumption rules, using 1");
                *d = 1;
            }
        }
        self
    }

    /// True when `hunger` leaves room for `calories`
    pub fn hungry_enough(&self, hunger: u32, calories: u32) -> bool {
        hunger.saturating_add(self.hunger_slack) >= calories
    }

    /// True when banked hunger should be trimmed before eating
    pub fn caps_banked_hunger(&self, hunger: u32, calories: u32) -> bool {
        hunger > calories.saturating_add(self.banked_hunger_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = ConsumeRules::default();
        assert_eq!(rules.hunger_slack, 1500);
        assert_eq!(rules.banked_hunger_cap, 240);
        assert_eq!(rules.fatigue_divisor, 5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let rules = ConsumeRules::from_json(r#"{ "hunger_slack": 600 }"#).unwrap();
        assert_eq!(rules.hunger_slack, 600);
        assert_eq!(rules.banked_hunger_cap, 240);
    }

    #[test]
    fn test_zero_divisor_sanitized() {
        let rules = ConsumeRules::from_json(r#"{ "health_divisor": 0 }"#).unwrap();
        assert_eq!(rules.health_divisor, 1);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(matches!(
            ConsumeRules::from_json("{ not json"),
            Err(FoodError::Rules(_))
        ));
    }

    #[test]
    fn test_hunger_thresholds() {
        let rules = ConsumeRules::default();
        assert!(rules.hungry_enough(0, 1200));
        assert!(rules.hungry_enough(0, 1500));
        assert!(!rules.hungry_enough(0, 3000));
        assert!(rules.hungry_enough(1500, 3000));

        assert!(rules.caps_banked_hunger(1000, 100));
        assert!(!rules.caps_banked_hunger(340, 100));
        assert!(rules.caps_banked_hunger(341, 100));
    }
}
