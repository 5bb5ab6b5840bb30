//! Receipt OCR text → structured purchase list.
//!
//! A parse is a pure function over one text blob: the cropper locates the
//! transactional region and splits it into row candidates, each row is
//! classified under the store's layout rules, and the accumulator merges
//! item and discount rows into the final record sequence. Nothing here does
//! I/O; the OCR boundary lives in `paragon-ocr`.

mod auchan;
mod lidl;
pub(crate) mod util;

pub mod accumulate;
pub mod crop;
pub mod row;

pub use accumulate::PurchaseAccumulator;
pub use crop::{crop, CropError, CroppedReceipt};
pub use row::{classify, RowClassification};

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use paragon_core::{PurchaseRecord, Store};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Crop(#[from] CropError),
}

/// Parse one receipt's OCR text into purchase records, using the current
/// UTC date as the fallback when the receipt itself carries no date.
pub fn parse_receipt(store: Store, text: &str) -> Result<Vec<PurchaseRecord>, ParseError> {
    parse_receipt_at(store, text, Utc::now().date_naive())
}

/// Same as [`parse_receipt`], with an explicit fallback date.
pub fn parse_receipt_at(
    store: Store,
    text: &str,
    today: NaiveDate,
) -> Result<Vec<PurchaseRecord>, ParseError> {
    let cropped = crop::crop(store, text, today)?;
    let mut acc = PurchaseAccumulator::new(store, cropped.date);
    for row in &cropped.rows {
        match row::classify(store, row) {
            RowClassification::Ignore => {}
            RowClassification::Item { name, quantity, unit, price } => {
                acc.upsert_item(name, quantity, unit, price);
            }
            RowClassification::Discount { target, amount } => {
                acc.apply_discount(target.as_deref(), amount);
            }
        }
    }
    let records = acc.finish();
    tracing::debug!(%store, rows = cropped.rows.len(), records = records.len(), "receipt parsed");
    Ok(records)
}

// ── End-to-end tests ─────────────────────────────────────────────────────────
