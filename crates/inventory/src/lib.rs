//! Gilded Rose inventory module.
//!
//! This crate contains the daily aging rules for the shop's stock,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! Callers build a list of [`Item`]s and call [`advance_one_day`] (or
//! [`GildedRose::update_quality`]) once per simulated day.

pub mod category;
pub mod item;
pub mod quality;
pub mod report;
pub mod shop;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, Category, SULFURAS};
pub use item::{Item, ItemRecord};
pub use quality::{MAX_QUALITY, MIN_QUALITY};
pub use report::{DaySnapshot, Snapshots, default_stock, render_text, snapshots};
pub use shop::{GildedRose, advance_one_day};
