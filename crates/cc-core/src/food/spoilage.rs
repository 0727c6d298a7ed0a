//! Spoilage levels

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Freshness of a food item.
///
/// Levels only ever move forward. The ordinal doubles as the nutrition
/// divisor offset and as the index into the status prefix table:
///
/// | level  | ordinal | divisor | default prefix |
/// |--------|---------|---------|----------------|
/// | Fresh  | 0       | 1       | (none)         |
/// | Stale  | 1       | 2       | "Smelly "      |
/// | Mouldy | 2       | 3       | "Mouldy "      |
/// | Rotten | 3       | 4       | "Rotten "      |
/// | Putrid | 4       | 5       | "Putrid "      |
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Spoilage {
    #[default]
    Fresh = 0,
    Stale = 1,
    Mouldy = 2,
    Rotten = 3,
    /// Terminal: cannot advance and cannot be eaten
    Putrid = 4,
}

impl Spoilage {
    /// Number of spoilage levels
    pub const COUNT: usize = 5;

    /// Zero-based position in the Fresh..Putrid order
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Divisor applied to a food's calorie rating at this level
    pub const fn divisor(self) -> u32 {
        self.ordinal() as u32 + 1
    }

    /// Level for a saved ordinal, if it is in range
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Spoilage::Fresh),
            1 => Some(Spoilage::Stale),
            2 => Some(Spoilage::Mouldy),
            3 => Some(Spoilage::Rotten),
            4 => Some(Spoilage::Putrid),
            _ => None,
        }
    }

    /// The following level, or `None` once putrid
    pub const fn next(self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    pub const fn is_putrid(self) -> bool {
        matches!(self, Spoilage::Putrid)
    }

    /// Shared name prefix for this level. Kinds may override the Stale entry.
    pub const fn default_prefix(self) -> &'static str {
        match self {
            Spoilage::Fresh => "",
            Spoilage::Stale => "Smelly ",
            Spoilage::Mouldy => "Mouldy ",
            Spoilage::Rotten => "Rotten ",
            Spoilage::Putrid => "Putrid ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (i, level) in Spoilage::iter().enumerate() {
            assert_eq!(level.ordinal() as usize, i);
            assert_eq!(Spoilage::from_ordinal(i as u8), Some(level));
        }
        assert_eq!(Spoilage::iter().count(), Spoilage::COUNT);
        assert_eq!(Spoilage::from_ordinal(5), None);
    }

    #[test]
    fn test_next_stops_at_putrid() {
        assert_eq!(Spoilage::Fresh.next(), Some(Spoilage::Stale));
        assert_eq!(Spoilage::Rotten.next(), Some(Spoilage::Putrid));
        assert_eq!(Spoilage::Putrid.next(), None);
    }

    #[test]
    fn test_divisors() {
        let divisors: Vec<u32> = Spoilage::iter().map(Spoilage::divisor).collect();
        assert_eq!(divisors, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_default_prefixes() {
        assert_eq!(Spoilage::Fresh.default_prefix(), "");
        assert_eq!(Spoilage::Stale.default_prefix(), "Smelly ");
        assert_eq!(Spoilage::Putrid.default_prefix(), "Putrid ");
    }
}
