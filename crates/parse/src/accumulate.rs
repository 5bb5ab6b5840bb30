use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;

use paragon_core::{PurchaseRecord, Store, Unit};

use crate::util;

/// Owns the in-progress record collection for a single parse call.
///
/// Auchan receipts repeat item names and address discounts by name, so its
/// records live in an insertion-ordered name-keyed map and repeated rows
/// merge. Lidl prints one row per item and addresses discounts positionally,
/// so its records are appended without merging.
pub struct PurchaseAccumulator {
    store: Store,
    date: NaiveDate,
    records: Records,
}

enum Records {
    Keyed(IndexMap<String, PurchaseRecord>),
    Ordered(Vec<PurchaseRecord>),
}

impl PurchaseAccumulator {
    pub fn new(store: Store, date: NaiveDate) -> Self {
        let records = match store {
            Store::Auchan => Records::Keyed(IndexMap::new()),
            Store::Lidl => Records::Ordered(Vec::new()),
        };
        PurchaseAccumulator { store, date, records }
    }

    /// Record an item row. Under the keyed layout a repeated name sums its
    /// quantity and price into the existing record; otherwise a new record
    /// is appended.
    pub fn upsert_item(&mut self, name: String, quantity: Decimal, unit: Unit, price: Decimal) {
        match &mut self.records {
            Records::Keyed(map) => {
                if let Some(existing) = map.get_mut(&name) {
                    existing.quantity += quantity;
                    existing.price = util::round_price(existing.price + price);
                } else {
                    let record =
                        PurchaseRecord::new(name.clone(), quantity, unit, price, self.date, self.store);
                    map.insert(name, record);
                }
            }
            Records::Ordered(list) => {
                list.push(PurchaseRecord::new(name, quantity, unit, price, self.date, self.store));
            }
        }
    }

    /// Fold a discount into the collection. A named target is looked up by
    /// item name; no target means the most recently appended record. A
    /// discount with nothing to land on is dropped.
    pub fn apply_discount(&mut self, target: Option<&str>, amount: Decimal) {
        let record = match (&mut self.records, target) {
            (Records::Keyed(map), Some(name)) => map.get_mut(name),
            (Records::Ordered(list), None) => list.last_mut(),
            _ => None,
        };
        match record {
            Some(record) => fold_discount(record, amount),
            None => tracing::debug!(?target, %amount, "discount with no matching record, dropped"),
        }
    }

    /// The accumulated records, in first-insertion order.
    pub fn finish(self) -> Vec<PurchaseRecord> {
        match self.records {
            Records::Keyed(map) => map.into_values().collect(),
            Records::Ordered(list) => list,
        }
    }
}

fn fold_discount(record: &mut PurchaseRecord, amount: Decimal) {
    if record.price.is_zero() {
        // A zero-price sentinel absorbs no discount; the percentage would
        // be meaningless.
        return;
    }
    let pct = util::percent_of(amount, record.price);
    record.price = util::round_price(record.price - amount);
    record.discount = (record.discount + pct).min(100);
}
