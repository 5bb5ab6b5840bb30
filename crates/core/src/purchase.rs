use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Store;

/// Unit of measure for a purchased line. Receipts never state the unit
/// explicitly; it is inferred from the quantity format and item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Piece,
    Kilogram,
    Gram,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Piece => write!(f, "piece"),
            Unit::Kilogram => write!(f, "kilogram"),
            Unit::Gram => write!(f, "gram"),
        }
    }
}

/// One purchased item recovered from a receipt.
///
/// Created only inside the accumulation step of a parse; discount rows fold
/// into `price` and `discount` while the parse is in progress, after which
/// the record is returned as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Trimmed item description, with the trailing product code stripped
    /// where the store prints one.
    pub name: String,
    /// Positive; fractional for weighed goods. Zero only for the Auchan
    /// unparseable-row sentinel.
    pub quantity: Decimal,
    pub unit: Unit,
    /// Total line price after discounts, rounded to 2 decimal places.
    pub price: Decimal,
    /// Cumulative discount percentage, clamped to [0, 100].
    pub discount: u32,
    /// Always empty at parse time; categorization happens downstream.
    pub category: String,
    /// Receipt-wide date — identical on every record from one parse.
    pub date: NaiveDate,
    /// Store name literal, provenance marker.
    pub note: String,
}

impl PurchaseRecord {
    pub fn new(
        name: String,
        quantity: Decimal,
        unit: Unit,
        price: Decimal,
        date: NaiveDate,
        store: Store,
    ) -> Self {
        PurchaseRecord {
            name,
            quantity,
            unit,
            price,
            discount: 0,
            category: String::new(),
            date,
            note: store.to_string(),
        }
    }
}
