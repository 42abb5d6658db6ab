use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::DomainError;

use crate::category::Category;

/// Field separator of the canonical rendering.
const SEPARATOR: &str = ", ";

/// A stocked item.
///
/// The name is fixed at construction and decides the [`Category`]. `sell_in`
/// and `quality` are taken verbatim (no validation) and only change through
/// the daily update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: Category,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::from_name(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Days left before the sell-by date. Negative once past it.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }
}

/// Canonical rendering: `"<name>, <sell_in>, <quality>"`.
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{SEPARATOR}{}{SEPARATOR}{}", self.name, self.sell_in, self.quality)
    }
}

/// Reads the canonical rendering back.
///
/// Names may themselves contain `", "` (Sulfuras does), so the two numeric
/// fields are split off from the right.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.rsplitn(3, SEPARATOR);
        let quality = fields
            .next()
            .ok_or_else(|| DomainError::invalid_record("empty line"))?;
        let sell_in = fields
            .next()
            .ok_or_else(|| DomainError::invalid_record(format!("missing sell_in in {s:?}")))?;
        let name = fields
            .next()
            .ok_or_else(|| DomainError::invalid_record(format!("missing name in {s:?}")))?;

        let sell_in = parse_field("sell_in", sell_in)?;
        let quality = parse_field("quality", quality)?;
        Ok(Item::new(name, sell_in, quality))
    }
}

fn parse_field(field: &str, raw: &str) -> Result<i32, DomainError> {
    raw.trim()
        .parse()
        .map_err(|e| DomainError::invalid_record(format!("{field} {raw:?}: {e}")))
}

/// Serialized shape of an [`Item`]. The category is derived, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AGED_BRIE, SULFURAS};

    #[test]
    fn renders_canonical_line() {
        let item = Item::new(SULFURAS, 11, 80);
        assert_eq!(item.to_string(), "Sulfuras, Hand of Ragnaros, 11, 80");
    }

    #[test]
    fn renders_negative_values() {
        let item = Item::new("Elixir of the Mongoose", -3, -1);
        assert_eq!(item.to_string(), "Elixir of the Mongoose, -3, -1");
    }

    #[test]
    fn construction_accepts_any_values() {
        let item = Item::new(AGED_BRIE, -40, 55);
        assert_eq!(item.sell_in(), -40);
        assert_eq!(item.quality(), 55);
        assert_eq!(item.category(), Category::AgedBrie);
    }

    #[test]
    fn category_follows_name() {
        assert_eq!(Item::new(SULFURAS, 0, 80).category(), Category::Legendary);
        assert_eq!(Item::new("Conjured Mana Cake", 3, 6).category(), Category::Ordinary);
    }

    #[test]
    fn parses_name_containing_separator() {
        let item: Item = "Sulfuras, Hand of Ragnaros, -1, 80".parse().unwrap();
        assert_eq!(item, Item::new(SULFURAS, -1, 80));
        assert_eq!(item.category(), Category::Legendary);
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let err = "Aged Brie, 2".parse::<Item>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecord(_)));

        let err = "Aged Brie".parse::<Item>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecord(_)));
    }

    #[test]
    fn parse_rejects_non_numeric_fields() {
        let err = "Aged Brie, two, 0".parse::<Item>().unwrap_err();
        assert!(err.to_string().contains("sell_in"));

        let err = "Aged Brie, 2, lots".parse::<Item>().unwrap_err();
        assert!(err.to_string().contains("quality"));
    }

    #[test]
    fn serde_round_trip_rederives_category() {
        let json = serde_json::to_value(Item::new(AGED_BRIE, 2, 0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Aged Brie", "sell_in": 2, "quality": 0 })
        );

        let item: Item = serde_json::from_value(json).unwrap();
        assert_eq!(item.category(), Category::AgedBrie);
    }
}
