//! The eater: hunger clock, vitals and diseases

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::RandomSource;

/// Diseases that bad food can pass on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Disease {
    StomachRot,
    SwampRot,
    BloodRot,
    Cholera,
    YellowFever,
}

/// The set a disease is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum DiseasePool {
    /// Stomach rot only (food no worse than mouldy)
    Mild,
    /// Anything (rotten or worse)
    Severe,
}

const MILD: [Disease; 1] = [Disease::StomachRot];
const SEVERE: [Disease; 5] = [
    Disease::StomachRot,
    Disease::SwampRot,
    Disease::BloodRot,
    Disease::Cholera,
    Disease::YellowFever,
];

impl DiseasePool {
    pub const fn diseases(self) -> &'static [Disease] {
        match self {
            DiseasePool::Mild => &MILD,
            DiseasePool::Severe => &SEVERE,
        }
    }

    /// Uniform pick from the pool
    pub fn pick<R: RandomSource + ?Sized>(self, rng: &mut R) -> Disease {
        let pool = self.diseases();
        let idx = rng.rn2(pool.len() as u32) as usize;
        pool[idx.min(pool.len() - 1)]
    }
}

/// Game-minute timestamp of the last meal.
///
/// Hunger is the time elapsed since then; eating moves the timestamp
/// forward, which makes the eater less hungry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HungerClock {
    last_meal: u32,
}

impl HungerClock {
    pub const fn new(last_meal: u32) -> Self {
        Self { last_meal }
    }

    pub const fn last_meal(&self) -> u32 {
        self.last_meal
    }

    /// Minutes since the last meal (zero if the clock runs ahead of `now`)
    pub const fn hunger_at(&self, now: u32) -> u32 {
        now.saturating_sub(self.last_meal)
    }

    /// Forget hunger older than `cap` minutes
    pub fn bank_limit(&mut self, now: u32, cap: u32) {
        self.last_meal = now.saturating_sub(cap);
    }

    /// Satisfy `minutes` worth of hunger
    pub fn credit(&mut self, minutes: u32) {
        self.last_meal = self.last_meal.saturating_add(minutes);
    }
}

/// Whoever is eating. Implemented by the host's player entity.
pub trait Consumer {
    fn hunger_clock(&self) -> &HungerClock;
    fn hunger_clock_mut(&mut self) -> &mut HungerClock;

    /// Luck on a 0-100 scale
    fn luck(&self) -> u32;

    /// Vampires get nothing out of a meal
    fn is_vampire(&self) -> bool {
        false
    }

    fn increase_health(&mut self, amount: u32);
    fn increase_magicka(&mut self, amount: u32);
    fn increase_fatigue(&mut self, amount: u32);

    /// Infect the consumer. Resistances and duplicates are the consumer's business.
    fn inflict_disease(&mut self, disease: Disease);
}

/// Bounded stat pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub current: u32,
    pub max: u32,
}

impl Pool {
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn increase(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }
}

/// Stand-alone consumer for hosts without their own entity type, and for tests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survivor {
    pub name: String,
    pub hunger: HungerClock,
    luck: u32,
    pub vampire: bool,
    pub health: Pool,
    pub magicka: Pool,
    pub fatigue: Pool,
    pub diseases: Vec<Disease>,
}

impl Survivor {
    /// Maximum luck value
    pub const MAX_LUCK: u32 = 100;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hunger: HungerClock::default(),
            luck: 50,
            vampire: false,
            health: Pool::full(100),
            magicka: Pool::full(100),
            fatigue: Pool::full(200),
            diseases: Vec::new(),
        }
    }

    pub fn set_luck(&mut self, luck: u32) {
        self.luck = luck.min(Self::MAX_LUCK);
    }

    pub fn has_disease(&self, disease: Disease) -> bool {
        self.diseases.contains(&disease)
    }
}

impl Default for Survivor {
    fn default() -> Self {
        Self::new("survivor")
    }
}

impl Consumer for Survivor {
    fn hunger_clock(&self) -> &HungerClock {
        &self.hunger
    }

    fn hunger_clock_mut(&mut self) -> &mut HungerClock {
        &mut self.hunger
    }

    fn luck(&self) -> u32 {
        self.luck
    }

    fn is_vampire(&self) -> bool {
        self.vampire
    }

    fn increase_health(&mut self, amount: u32) {
        self.health.increase(amount);
    }

    fn increase_magicka(&mut self, amount: u32) {
        self.magicka.increase(amount);
    }

    fn increase_fatigue(&mut self, amount: u32) {
        self.fatigue.increase(amount);
    }

    fn inflict_disease(&mut self, disease: Disease) {
        if !self.has_disease(disease) {
            self.diseases.push(disease);
        }
    }
}
