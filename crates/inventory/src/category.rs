//! Item categories and their per-day quality rules.
//!
//! Each category ages in two phases:
//! - **Pre-expiry**: [`Category::pre_expiry`] runs every day, using `sell_in`
//!   as it stood before the day's decrement.
//! - **Post-expiry**: [`Category::post_expiry`] runs only once `sell_in` has
//!   gone negative after the decrement.

use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

use crate::quality;

/// Name of the cheese that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the legendary item. It is never sold and never changes.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the concert tickets.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Backstage passes gain a second point per day below this many days.
const BACKSTAGE_DOUBLE_BELOW: i32 = 11;

/// Backstage passes gain a third point per day below this many days.
const BACKSTAGE_TRIPLE_BELOW: i32 = 6;

/// Rule set an item ages by, resolved once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ordinary,
    AgedBrie,
    Legendary,
    BackstagePasses,
}

impl ValueObject for Category {}

impl Category {
    /// Resolve by exact name match. Anything unrecognized is `Ordinary`.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASSES => Category::BackstagePasses,
            _ => Category::Ordinary,
        }
    }

    /// Whether items of this category count down `sell_in` and change quality.
    pub fn ages(self) -> bool {
        !matches!(self, Category::Legendary)
    }

    /// Quality after the daily change.
    ///
    /// `sell_in` is the value before today's decrement.
    pub fn pre_expiry(self, quality: i32, sell_in: i32) -> i32 {
        match self {
            Category::Ordinary => quality::lower(quality),
            Category::AgedBrie => quality::raise(quality),
            Category::Legendary => quality,
            Category::BackstagePasses => {
                let steps = if sell_in < BACKSTAGE_TRIPLE_BELOW {
                    3
                } else if sell_in < BACKSTAGE_DOUBLE_BELOW {
                    2
                } else {
                    1
                };
                quality::raise_by(quality, steps)
            }
        }
    }

    /// Extra correction once the sell date has passed.
    pub fn post_expiry(self, quality: i32) -> i32 {
        match self {
            Category::Ordinary => quality::lower(quality),
            Category::AgedBrie => quality::raise(quality),
            Category::Legendary => quality,
            // The concert is over.
            Category::BackstagePasses => 0,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Category::Ordinary => "ordinary",
            Category::AgedBrie => "aged_brie",
            Category::Legendary => "legendary",
            Category::BackstagePasses => "backstage_passes",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_by_exact_match() {
        assert_eq!(Category::from_name(AGED_BRIE), Category::AgedBrie);
        assert_eq!(Category::from_name(SULFURAS), Category::Legendary);
        assert_eq!(Category::from_name(BACKSTAGE_PASSES), Category::BackstagePasses);
        assert_eq!(Category::from_name("+5 Dexterity Vest"), Category::Ordinary);
    }

    #[test]
    fn near_miss_names_are_ordinary() {
        assert_eq!(Category::from_name("aged brie"), Category::Ordinary);
        assert_eq!(Category::from_name("Aged Brie "), Category::Ordinary);
        assert_eq!(Category::from_name("Sulfuras"), Category::Ordinary);
        assert_eq!(Category::from_name(""), Category::Ordinary);
    }

    #[test]
    fn only_legendary_does_not_age() {
        assert!(Category::Ordinary.ages());
        assert!(Category::AgedBrie.ages());
        assert!(Category::BackstagePasses.ages());
        assert!(!Category::Legendary.ages());
    }

    #[test]
    fn backstage_tiers_use_pre_decrement_sell_in() {
        let passes = Category::BackstagePasses;
        assert_eq!(passes.pre_expiry(2, 11), 3);
        assert_eq!(passes.pre_expiry(2, 10), 4);
        assert_eq!(passes.pre_expiry(2, 6), 4);
        assert_eq!(passes.pre_expiry(20, 5), 23);
        assert_eq!(passes.pre_expiry(20, 1), 23);
        assert_eq!(passes.pre_expiry(20, 0), 23);
    }

    #[test]
    fn backstage_tiers_stop_at_ceiling() {
        assert_eq!(Category::BackstagePasses.pre_expiry(49, 4), 50);
        assert_eq!(Category::BackstagePasses.pre_expiry(48, 10), 50);
    }

    #[test]
    fn post_expiry_shapes_differ_per_category() {
        assert_eq!(Category::Ordinary.post_expiry(10), 9);
        assert_eq!(Category::Ordinary.post_expiry(0), 0);
        assert_eq!(Category::AgedBrie.post_expiry(10), 11);
        assert_eq!(Category::AgedBrie.post_expiry(50), 50);
        assert_eq!(Category::BackstagePasses.post_expiry(23), 0);
        assert_eq!(Category::Legendary.post_expiry(80), 80);
    }

    #[test]
    fn legendary_quality_is_never_touched() {
        assert_eq!(Category::Legendary.pre_expiry(200, -3), 200);
        assert_eq!(Category::Legendary.post_expiry(-7), -7);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&Category::BackstagePasses).unwrap();
        assert_eq!(json, "\"backstage_passes\"");
        assert_eq!(Category::BackstagePasses.to_string(), "backstage_passes");
    }
}
