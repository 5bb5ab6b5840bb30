//! Auchan receipt layout rules.
//!
//! Item amount columns look like `1 x3,50 3,50A` — quantity, unit price,
//! total, trailing tax-category letter. Discount rows repeat the item name
//! after a `Rabat ` prefix, and the name column of an item row carries a
//! trailing product code that is stripped from the output.

use rust_decimal::Decimal;

use paragon_core::Unit;

use crate::row::RowClassification;
use crate::util::{self, re};

const DISCOUNT_PREFIX: &str = "Rabat ";

re!(re_amount, r"^(\d+(?:,\d+)?) x(\d+(?:,\d+)?) (\d+(?:,\d+)?)[A-C]$");
re!(re_name_code, r"^(.+) \d+[A-C]?$");

pub(crate) fn classify(row: &[String]) -> RowClassification {
    let [name_col, amount_col] = row else {
        return RowClassification::Ignore;
    };

    if let Some(target) = name_col.strip_prefix(DISCOUNT_PREFIX) {
        // First and last characters of the amount are currency/tax markers.
        let Some(amount) = util::parse_decimal_pl(util::strip_edges(amount_col)) else {
            tracing::debug!(row = %name_col, "discount row with unparseable amount, dropped");
            return RowClassification::Ignore;
        };
        return RowClassification::Discount {
            target: Some(target.to_string()),
            amount,
        };
    }

    let (quantity, unit, price) = match re_amount().captures(amount_col) {
        Some(caps) => {
            // A fractional quantity means the item was weighed.
            let unit = if caps[1].contains(',') { Unit::Kilogram } else { Unit::Piece };
            let quantity = util::parse_decimal_pl(&caps[1]).unwrap_or(Decimal::ZERO);
            let price = util::parse_decimal_pl(&caps[3]).unwrap_or(Decimal::ZERO);
            (quantity, unit, price)
        }
        // Amount column did not match: keep the item with zero amounts so
        // its presence on the receipt is not lost.
        None => (Decimal::ZERO, Unit::Piece, Decimal::ZERO),
    };

    let name = match re_name_code().captures(name_col) {
        Some(caps) => caps[1].to_string(),
        None => name_col.trim().to_string(),
    };

    RowClassification::Item { name, quantity, unit, price }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn row(a: &str, b: &str) -> Vec<String> {
        vec![a.to_string(), b.to_string()]
    }

    #[test]
    fn item_row_by_piece() {
        let c = classify(&row("Chleb 10A", "1 x3,50 3,50A"));
        assert_eq!(
            c,
            RowClassification::Item {
                name: "Chleb".to_string(),
                quantity: dec("1"),
                unit: Unit::Piece,
                price: dec("3.50"),
            }
        );
    }

    #[test]
    fn item_row_by_weight() {
        let c = classify(&row("Ziemniaki 456C", "0,926 x2,99 2,77A"));
        assert_eq!(
            c,
            RowClassification::Item {
                name: "Ziemniaki".to_string(),
                quantity: dec("0.926"),
                unit: Unit::Kilogram,
                price: dec("2.77"),
            }
        );
    }

    #[test]
    fn item_row_tax_code_variants() {
        for code in ["A", "B", "C"] {
            let c = classify(&row("Woda 99", &format!("2 x1,00 2,00{code}")));
            assert!(matches!(c, RowClassification::Item { quantity, .. } if quantity == dec("2")));
        }
    }

    #[test]
    fn item_row_name_without_product_code_kept_verbatim() {
        let c = classify(&row("Chleb", "1 x3,50 3,50A"));
        assert!(matches!(c, RowClassification::Item { name, .. } if name == "Chleb"));
    }

    #[test]
    fn unparseable_amount_yields_zero_sentinel() {
        let c = classify(&row("Jogurt 5B", "garbled text"));
        assert_eq!(
            c,
            RowClassification::Item {
                name: "Jogurt".to_string(),
                quantity: Decimal::ZERO,
                unit: Unit::Piece,
                price: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn discount_row_names_its_target() {
        let c = classify(&row("Rabat Mleko", "-0,50zł"));
        assert_eq!(
            c,
            RowClassification::Discount {
                target: Some("Mleko".to_string()),
                amount: dec("0.50"),
            }
        );
    }

    #[test]
    fn discount_row_with_unparseable_amount_dropped() {
        let c = classify(&row("Rabat Mleko", "??"));
        assert_eq!(c, RowClassification::Ignore);
    }

    #[test]
    fn wrong_column_count_ignored() {
        assert_eq!(classify(&[]), RowClassification::Ignore);
        assert_eq!(classify(&row("Chleb", "1 x3,50 3,50A")[..1].to_vec()), RowClassification::Ignore);
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(classify(&three), RowClassification::Ignore);
    }
}
