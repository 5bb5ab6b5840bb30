use rust_decimal::Decimal;

use paragon_core::{Store, Unit};

/// What a single row candidate turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum RowClassification {
    /// Not a two-column name/amount line, or unusable for this store.
    Ignore,
    /// A purchased line.
    Item {
        name: String,
        quantity: Decimal,
        unit: Unit,
        price: Decimal,
    },
    /// A loyalty discount, voucher, or negative-amount refund line.
    /// `target` names the discounted item (Auchan convention); `None` means
    /// the discount applies to the most recently accumulated record (Lidl).
    Discount {
        target: Option<String>,
        amount: Decimal,
    },
}

/// Classify one row candidate under the given store's layout rules.
pub fn classify(store: Store, row: &[String]) -> RowClassification {
    match store {
        Store::Auchan => crate::auchan::classify(row),
        Store::Lidl => crate::lidl::classify(row),
    }
}
