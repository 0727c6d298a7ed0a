//! Eating food
//!
//! A meal is refused outright when the food is putrid or the eater is not
//! hungry enough for it. Otherwise hunger is satisfied and the food either
//! restores the eater or, if it is spoiled or raw, risks a disease.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::FoodError;
use crate::consumer::{Consumer, Disease, DiseasePool};
use crate::food::{FoodItem, FoodKind, Spoilage};
use crate::notify::Notifier;
use crate::pantry::{FoodStore, ItemId};
use crate::rng::RandomSource;
use crate::rules::ConsumeRules;

/// Shown when rations are used by hand
pub const RATIONS_HINT: &str = "When too hungry, you will eat some rations.";

/// How the eater feels after a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Feeling {
    Invigorated,
    Nauseated,
    Disgusted,
    /// Vampires get nothing from food
    Nothing,
}

/// Why a meal was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Rejection {
    /// The food is putrid
    TooDisgusting,
    /// Not enough hunger for this much food
    NotHungryEnough,
    /// Rations are eaten by the hunger process, not by hand
    EatenAutomatically,
}

/// A disease caught from a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRisk {
    /// The set the disease was drawn from
    pub pool: DiseasePool,
    pub disease: Disease,
}

/// Outcome of an attempt to eat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumeResult {
    pub consumed: bool,
    pub feeling: Option<Feeling>,
    pub disease: Option<DiseaseRisk>,
    pub rejection: Option<Rejection>,
    /// Hunger satisfied, in game minutes
    pub calories: u32,
}

impl ConsumeResult {
    fn rejected(reason: Rejection) -> Self {
        Self {
            consumed: false,
            feeling: None,
            disease: None,
            rejection: Some(reason),
            calories: 0,
        }
    }
}

/// Result of the host's "use item" on a food item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseOutcome {
    /// Only a message was shown (rations)
    Informed,
    /// An attempt to eat was made
    Meal(ConsumeResult),
}

/// Everything a meal touches apart from the food itself
pub struct MealContext<'a> {
    pub consumer: &'a mut dyn Consumer,
    pub notifier: &'a mut dyn Notifier,
    pub rng: &'a mut dyn RandomSource,
    pub rules: &'a ConsumeRules,
    /// Current game time in minutes
    pub now: u32,
}

/// Host entry point for using a food item from an inventory
pub fn use_item(
    store: &mut dyn FoodStore,
    id: ItemId,
    ctx: &mut MealContext<'_>,
) -> Result<UseOutcome, FoodError> {
    let kind = store.get(id).ok_or(FoodError::ItemNotFound(id))?.kind();
    if kind == FoodKind::Rations {
        ctx.notifier.message_box(RATIONS_HINT);
        return Ok(UseOutcome::Informed);
    }
    consume(store, id, ctx).map(UseOutcome::Meal)
}

/// Eat one unit of an item, removing it from the store when the meal goes ahead
pub fn consume(
    store: &mut dyn FoodStore,
    id: ItemId,
    ctx: &mut MealContext<'_>,
) -> Result<ConsumeResult, FoodError> {
    let item = store.get(id).ok_or(FoodError::ItemNotFound(id))?.clone();
    let result = resolve(&item, ctx);
    if result.consumed {
        store.remove_one(id)?;
    }
    Ok(result)
}

fn refusal(item: &FoodItem, hunger: u32, rules: &ConsumeRules) -> Option<Rejection> {
    if item.kind() == FoodKind::Rations {
        Some(Rejection::EatenAutomatically)
    } else if item.spoilage().is_putrid() {
        Some(Rejection::TooDisgusting)
    } else if !rules.hungry_enough(hunger, item.effective_calories()) {
        Some(Rejection::NotHungryEnough)
    } else {
        None
    }
}

fn refusal_message(item: &FoodItem, reason: Rejection) -> String {
    match reason {
        Rejection::TooDisgusting => format!(
            "This {} is too disgusting to force down.",
            item.short_name()
        ),
        Rejection::NotHungryEnough => format!(
            "You are not hungry enough to eat the {} right now.",
            item.short_name()
        ),
        Rejection::EatenAutomatically => RATIONS_HINT.to_string(),
    }
}

/// Apply a meal of `item` to the eater. Does not touch any inventory.
pub fn resolve(item: &FoodItem, ctx: &mut MealContext<'_>) -> ConsumeResult {
    let now = ctx.now;
    let hunger = ctx.consumer.hunger_clock().hunger_at(now);

    if let Some(reason) = refusal(item, hunger, ctx.rules) {
        tracing::debug!(food = item.short_name(), hunger, ?reason, "meal refused");
        ctx.notifier.message_box(&refusal_message(item, reason));
        return ConsumeResult::rejected(reason);
    }

    let cals = item.effective_calories();
    let clock = ctx.consumer.hunger_clock_mut();
    if ctx.rules.caps_banked_hunger(hunger, cals) {
        clock.bank_limit(now, ctx.rules.banked_hunger_cap);
    }
    clock.credit(cals);

    ctx.notifier
        .message_box(&format!("You eat the {}.", item.short_name()));

    let kind = item.kind();
    let mut disease = None;
    let mut feeling = Feeling::Invigorated;

    if item.spoilage() > Spoilage::Stale || kind.is_raw() {
        if kind.is_raw_meat() {
            feeling = Feeling::Nauseated;
        }
        let unlucky = !ctx.rng.success_roll(ctx.consumer.luck());
        // Raw food lands here whatever the roll says.
        if unlucky || kind.is_raw() {
            feeling = Feeling::Disgusted;
            let pool = if item.spoilage() > Spoilage::Mouldy {
                DiseasePool::Severe
            } else {
                DiseasePool::Mild
            };
            let picked = pool.pick(&mut *ctx.rng);
            tracing::debug!(food = item.short_name(), unlucky, %picked, "disease from meal");
            ctx.consumer.inflict_disease(picked);
            disease = Some(DiseaseRisk {
                pool,
                disease: picked,
            });
        }
    } else {
        ctx.consumer.increase_health(cals / ctx.rules.health_divisor);
        ctx.consumer.increase_magicka(cals / ctx.rules.magicka_divisor);
        ctx.consumer.increase_fatigue(cals / ctx.rules.fatigue_divisor);
    }

    if ctx.consumer.is_vampire() {
        feeling = Feeling::Nothing;
        ctx.notifier.hud_text("The meal does nothing for you.");
    } else {
        ctx.notifier
            .hud_text(&format!("You feel {} by the meal.", feeling));
    }

    tracing::info!(food = item.short_name(), cals, %feeling, "meal eaten");

    ConsumeResult {
        consumed: true,
        feeling: Some(feeling),
        disease,
        rejection: None,
        calories: cals,
    }
}
