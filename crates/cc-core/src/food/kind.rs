//! Food kinds and their static data table

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Spoilage;
use crate::FoodError;

bitflags! {
    /// Category flags for a food kind
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FoodFlags: u8 {
        /// Advances through spoilage levels
        const SPOILS = 0x01;
        /// Raw meat: nauseating, always risky
        const RAW_MEAT = 0x02;
        /// Raw fish: always risky
        const RAW_FISH = 0x04;
        /// Carried as a stack of units
        const STACKABLE = 0x08;

        const RAW = Self::RAW_MEAT.bits() | Self::RAW_FISH.bits();
    }
}

/// What a kind shows in front of its name at the Stale level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StalePrefix {
    /// "Smelly " (meats and fish)
    Smelly,
    /// "Soft " (fruits, cheeses, prepared dishes)
    Soft,
    /// "Stale " (bread)
    Stale,
}

impl StalePrefix {
    pub const fn as_str(self) -> &'static str {
        match self {
            StalePrefix::Smelly => "Smelly ",
            StalePrefix::Soft => "Soft ",
            StalePrefix::Stale => "Stale ",
        }
    }
}

/// Template identifiers above this value belong to food with no separate
/// spoiled inventory art.
pub const UNIQUE_ICON_TEMPLATE_FLOOR: u32 = 102099;

/// Static definition of a food kind
#[derive(Debug, Clone, Copy)]
pub struct KindDef {
    pub kind: FoodKind,
    /// Host item template identifier (persisted)
    pub template: u32,
    /// Base display name
    pub name: &'static str,
    /// Nutrition at the Fresh level
    pub calories: u32,
    /// Sale value while Fresh
    pub value: u32,
    pub stale_prefix: StalePrefix,
    pub flags: FoodFlags,
}

/// Every food kind the survival layer adds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum FoodKind {
    Apple = 0,
    Orange = 1,
    Bread = 2,
    RawFish = 3,
    CookedFish = 4,
    Meat = 5,
    RawMeat = 6,
    Rations = 7,
    Cherries = 8,
    YellowPear = 9,
    Plum = 10,
    Peach = 11,
    Olives = 12,
    CheeseWheel = 13,
    NearlyFullCheeseWheel = 14,
    CheeseSlice = 15,
    SwissCheeseSlice = 16,
    SwissCheeseWheel = 17,
    SoftCheese = 18,
    PigRoastPlatter = 19,
    FlourPorridge = 20,
    Broth = 21,
    Grapes = 22,
    WhiteGrapes = 23,
    CabbageHead = 24,
    YellowTomato = 25,
}

const fn def(
    kind: FoodKind,
    template: u32,
    name: &'static str,
    calories: u32,
    value: u32,
    stale_prefix: StalePrefix,
    flags: FoodFlags,
) -> KindDef {
    KindDef {
        kind,
        template,
        name,
        calories,
        value,
        stale_prefix,
        flags,
    }
}

const SOFT: StalePrefix = StalePrefix::Soft;
const SMELLY: StalePrefix = StalePrefix::Smelly;
const SPOILS: FoodFlags = FoodFlags::SPOILS;

/// Kind table, indexed by `FoodKind as usize`
#[rustfmt::skip]
static KINDS: [KindDef; 26] = [
    def(FoodKind::Apple,                 532,    "Apple",                    60,   2,  SOFT,   SPOILS),
    def(FoodKind::Orange,                533,    "Orange",                   60,   2,  SOFT,   SPOILS),
    def(FoodKind::Bread,                 534,    "Bread",                    180,  3,  StalePrefix::Stale, SPOILS),
    def(FoodKind::RawFish,               535,    "Fish",                     90,   3,  SMELLY, SPOILS.union(FoodFlags::RAW_FISH)),
    def(FoodKind::CookedFish,            536,    "Salted Fish",              200,  6,  SMELLY, SPOILS),
    def(FoodKind::Meat,                  537,    "Meat",                     240,  8,  SMELLY, SPOILS),
    def(FoodKind::RawMeat,               538,    "Raw Meat",                 100,  4,  SMELLY, SPOILS.union(FoodFlags::RAW_MEAT)),
    def(FoodKind::Rations,               539,    "Rations",                  0,    10, SMELLY, FoodFlags::STACKABLE),
    def(FoodKind::Cherries,              102100, "Cherries",                 30,   1,  SOFT,   SPOILS),
    def(FoodKind::YellowPear,            102101, "Yellow Pear",              60,   2,  SOFT,   SPOILS),
    def(FoodKind::Plum,                  102102, "Plum",                     60,   2,  SOFT,   SPOILS),
    def(FoodKind::Peach,                 102103, "Peach",                    60,   2,  SOFT,   SPOILS),
    def(FoodKind::Olives,                102104, "Olives",                   50,   2,  SOFT,   SPOILS),
    def(FoodKind::CheeseWheel,           102105, "Cheese Wheel",             640,  40, SOFT,   SPOILS),
    def(FoodKind::NearlyFullCheeseWheel, 102106, "Nearly Full Cheese Wheel", 560,  35, SOFT,   SPOILS),
    def(FoodKind::CheeseSlice,           102107, "Cheese Slice",             80,   5,  SOFT,   SPOILS),
    def(FoodKind::SwissCheeseSlice,      102108, "Swiss Cheese Slice",       80,   6,  SOFT,   SPOILS),
    def(FoodKind::SwissCheeseWheel,      102109, "Swiss Cheese Wheel",       640,  48, SOFT,   SPOILS),
    def(FoodKind::SoftCheese,            102110, "Soft Cheese",              360,  20, SOFT,   SPOILS),
    def(FoodKind::PigRoastPlatter,       102111, "Pig Roast Platter",        1200, 60, SOFT,   SPOILS),
    def(FoodKind::FlourPorridge,         102112, "Flour Porridge",           30,   1,  SOFT,   SPOILS),
    def(FoodKind::Broth,                 102113, "Broth",                    15,   1,  SOFT,   SPOILS),
    def(FoodKind::Grapes,                102114, "Grapes",                   60,   2,  SOFT,   SPOILS),
    def(FoodKind::WhiteGrapes,           102115, "White Grapes",             60,   2,  SOFT,   SPOILS),
    def(FoodKind::CabbageHead,           102116, "Cabbage Head",             30,   1,  SOFT,   SPOILS),
    def(FoodKind::YellowTomato,          102117, "Yellow Tomato",            60,   2,  SOFT,   SPOILS),
];

impl FoodKind {
    /// Static data for this kind
    pub fn def(self) -> &'static KindDef {
        &KINDS[self as usize]
    }

    /// Look up a kind by its host template identifier
    pub fn from_template(template: u32) -> Result<Self, FoodError> {
        KINDS
            .iter()
            .find(|d| d.template == template)
            .map(|d| d.kind)
            .ok_or(FoodError::UnknownTemplate(template))
    }

    pub fn template(self) -> u32 {
        self.def().template
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Nutrition at the Fresh level
    pub fn calories(self) -> u32 {
        self.def().calories
    }

    pub fn flags(self) -> FoodFlags {
        self.def().flags
    }

    pub fn spoils(self) -> bool {
        self.flags().contains(FoodFlags::SPOILS)
    }

    pub fn is_stackable(self) -> bool {
        self.flags().contains(FoodFlags::STACKABLE)
    }

    /// Raw meat or raw fish
    pub fn is_raw(self) -> bool {
        self.flags().intersects(FoodFlags::RAW)
    }

    pub fn is_raw_meat(self) -> bool {
        self.flags().contains(FoodFlags::RAW_MEAT)
    }

    /// Kinds with no spoiled art keep their world icon at every level
    pub fn has_unique_icon(self) -> bool {
        self.template() > UNIQUE_ICON_TEMPLATE_FLOOR
    }

    /// Name prefix for this kind at a spoilage level
    pub fn status_prefix(self, level: Spoilage) -> &'static str {
        match level {
            Spoilage::Stale => self.def().stale_prefix.as_str(),
            other => other.default_prefix(),
        }
    }
}
