//! Daily update engine.

use crate::item::Item;

/// Advance every item by one simulated day, in place.
///
/// Items age independently, so the order of `items` does not affect the
/// outcome. This never fails.
pub fn advance_one_day(items: &mut [Item]) {
    tracing::debug!(items = items.len(), "advancing inventory by one day");
    for item in items.iter_mut() {
        age(item);
    }
}

fn age(item: &mut Item) {
    let category = item.category();
    if !category.ages() {
        return;
    }

    let (sell_in_before, quality_before) = (item.sell_in, item.quality);

    item.quality = category.pre_expiry(item.quality, item.sell_in);
    // Pinned at i32::MIN rather than wrapping back to a fresh sell date.
    item.sell_in = item.sell_in.saturating_sub(1);
    if item.sell_in < 0 {
        item.quality = category.post_expiry(item.quality);
    }

    tracing::trace!(
        name = item.name(),
        %category,
        sell_in_before,
        sell_in = item.sell_in,
        quality_before,
        quality = item.quality,
        "item aged"
    );
}

/// The shop's stock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// End-of-day update for the whole stock.
    pub fn update_quality(&mut self) {
        advance_one_day(&mut self.items);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
