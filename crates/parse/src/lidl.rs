//! Lidl receipt layout rules.
//!
//! Item amount columns look like `1 x 3.99 3.99` or `1,474kg x 3.99 5.88`.
//! Discount rows are recognized by a fixed set of loyalty labels or by a
//! negative amount, and always apply to the most recently appended item.

use rust_decimal::Decimal;

use paragon_core::Unit;

use crate::row::RowClassification;
use crate::util::{self, re};

const DISCOUNT_LABELS: [&str; 4] = [
    "Lidl Plus rabat",
    "Lidl Plus voucher",
    "Lidl Plus kupon",
    "Rabat grupowy",
];

/// Marker for loose/bulk goods sold by weight.
const BULK_MARKERS: [&str; 2] = ["Luz", "luz"];

re!(re_amount, r"^(\d+(?:[.,]\d+)?)k?g?\s*[x*]\s*(\d+(?:[.,]\d+)?)\s+(\d+(?:[.,]\d+)?)$");

pub(crate) fn classify(row: &[String]) -> RowClassification {
    let [name_col, amount_col] = row else {
        return RowClassification::Ignore;
    };

    let amount_value = util::parse_decimal_pl(amount_col);
    let labelled = DISCOUNT_LABELS.contains(&name_col.as_str());
    if labelled || amount_value.is_some_and(|v| v.is_sign_negative()) {
        let Some(value) = amount_value else {
            tracing::debug!(row = %name_col, "discount row with unparseable amount, dropped");
            return RowClassification::Ignore;
        };
        return RowClassification::Discount {
            target: None,
            amount: value.abs(),
        };
    }

    // Unlike Auchan, a row whose amount column does not parse is dropped
    // entirely rather than recorded with zero amounts.
    let Some(caps) = re_amount().captures(amount_col) else {
        tracing::debug!(row = %name_col, "item row did not match amount pattern, dropped");
        return RowClassification::Ignore;
    };

    let quantity = util::parse_decimal_pl(&caps[1]).unwrap_or(Decimal::ZERO);
    let price = util::parse_decimal_pl(&caps[3]).unwrap_or(Decimal::ZERO);
    let unit = if BULK_MARKERS.iter().any(|m| name_col.contains(m)) {
        Unit::Gram
    } else {
        Unit::Piece
    };

    RowClassification::Item {
        name: name_col.clone(),
        quantity,
        unit,
        price,
    }
}
