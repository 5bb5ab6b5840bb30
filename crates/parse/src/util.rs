use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static ::regex::Regex {
            static R: ::std::sync::OnceLock<::regex::Regex> = ::std::sync::OnceLock::new();
            R.get_or_init(|| ::regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}
pub(crate) use re;

re!(re_decimal_prefix, r"^-?\d+(?:\.\d+)?");

/// Parse the leading numeric prefix of a Polish-formatted amount string.
/// Comma decimal separators are accepted; trailing currency or tax markers
/// (`zł`, `A`…) are ignored. Returns `None` when no number leads the string.
pub(crate) fn parse_decimal_pl(s: &str) -> Option<Decimal> {
    let normalized = s.trim().replace(',', ".");
    let m = re_decimal_prefix().find(&normalized)?;
    Decimal::from_str(m.as_str()).ok()
}

/// Drop the first and last character. Character-wise, not byte-wise — the
/// `zł` currency suffix is multibyte.
pub(crate) fn strip_edges(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

pub(crate) fn round_price(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount` as a whole percentage of `base`, rounded to the nearest integer.
/// Caller guarantees `base` is non-zero.
pub(crate) fn percent_of(amount: Decimal, base: Decimal) -> u32 {
    (amount * Decimal::ONE_HUNDRED / base)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}
