//! Day-by-day reports of the stock, in the classic text fixture layout.
//!
//! ```text
//! -------- day 0 --------
//! name, sellIn, quality
//! +5 Dexterity Vest, 10, 20
//! ...
//!
//! ```

use serde::{Deserialize, Serialize};

use crate::category::{AGED_BRIE, BACKSTAGE_PASSES, SULFURAS};
use crate::item::Item;
use crate::shop::GildedRose;

/// Column header printed under each day banner.
pub const HEADER: &str = "name, sellIn, quality";

/// The stock as it stood at the start of `day`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

impl core::fmt::Display for DaySnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "-------- day {} --------", self.day)?;
        writeln!(f, "{HEADER}")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        writeln!(f)
    }
}

/// Snapshot `items` on day 0 and after each of the next `days` updates.
///
/// Yields `days + 1` snapshots, one update at a time, so a large `days` only
/// costs what the caller actually consumes.
pub fn snapshots(items: Vec<Item>, days: u32) -> Snapshots {
    Snapshots {
        shop: GildedRose::new(items),
        next_day: Some(0),
        last_day: days,
    }
}

/// Iterator returned by [`snapshots`].
#[derive(Debug, Clone)]
pub struct Snapshots {
    shop: GildedRose,
    next_day: Option<u32>,
    last_day: u32,
}

impl Iterator for Snapshots {
    type Item = DaySnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        let day = self.next_day?;
        if day > 0 {
            self.shop.update_quality();
        }
        self.next_day = day.checked_add(1).filter(|next| *next <= self.last_day);
        Some(DaySnapshot {
            day,
            items: self.shop.items().to_vec(),
        })
    }
}

/// Render snapshots as the text fixture output.
pub fn render_text(snapshots: &[DaySnapshot]) -> String {
    snapshots.iter().map(ToString::to_string).collect()
}

/// The shop's usual opening stock.
pub fn default_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        // Not a recognized category; ages as an ordinary item.
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
