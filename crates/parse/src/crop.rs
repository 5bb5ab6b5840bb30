use chrono::NaiveDate;
use thiserror::Error;

use paragon_core::Store;

use crate::util::re;

/// Footer anchors: the fiscal summary block that follows the item region.
const AUCHAN_FOOTER: &str = "SPRZEDAŻ OPODATK";
const LIDL_FOOTER: &str = "PTU";

re!(re_date, r"\d{4}-\d{2}-\d{2}");
// Lidl anchors on the whole token around the date, as OCR prints it.
re!(re_lidl_anchor, r"\S*(\d{4}-\d{2}-\d{2})\S*");
re!(re_columns, r" {2,}");

#[derive(Debug, Error)]
pub enum CropError {
    /// The Lidl layout anchors the item region on the receipt date; without
    /// one there is nothing to crop against.
    #[error("no YYYY-MM-DD date anchor found in receipt text")]
    MissingDateAnchor,
}

/// The transactional region of a receipt: its date plus the row candidates
/// between the header and footer anchors, split into column strings.
#[derive(Debug, Clone, PartialEq)]
pub struct CroppedReceipt {
    pub date: NaiveDate,
    pub rows: Vec<Vec<String>>,
}

/// Locate the item region of `text` for the given store layout.
///
/// Auchan falls back to `today` when the receipt carries no date and crops
/// from the start of the text; Lidl treats a missing date as an error. Both
/// stores crop to the end of the text when the footer marker is absent.
pub fn crop(store: Store, text: &str, today: NaiveDate) -> Result<CroppedReceipt, CropError> {
    match store {
        Store::Auchan => Ok(crop_auchan(text, today)),
        Store::Lidl => crop_lidl(text),
    }
}

fn crop_auchan(text: &str, today: NaiveDate) -> CroppedReceipt {
    let (start, date) = first_valid_date(text).unwrap_or((0, today));
    CroppedReceipt {
        date,
        rows: split_rows(region(text, start, AUCHAN_FOOTER)),
    }
}

fn crop_lidl(text: &str) -> Result<CroppedReceipt, CropError> {
    let found = re_lidl_anchor().captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        let date = parse_iso_date(caps.get(1)?.as_str())?;
        Some((whole.start(), date))
    });
    let (start, date) = found.ok_or(CropError::MissingDateAnchor)?;
    Ok(CroppedReceipt {
        date,
        rows: split_rows(region(text, start, LIDL_FOOTER)),
    })
}

/// First `YYYY-MM-DD` substring that is a calendar-valid date.
fn first_valid_date(text: &str) -> Option<(usize, NaiveDate)> {
    re_date()
        .find_iter(text)
        .find_map(|m| parse_iso_date(m.as_str()).map(|d| (m.start(), d)))
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Text from `start` to the first occurrence of `footer` after it; a receipt
/// with no footer marker is cropped to the end instead.
fn region<'a>(text: &'a str, start: usize, footer: &str) -> &'a str {
    let tail = &text[start..];
    match tail.find(footer) {
        Some(idx) => &tail[..idx],
        None => tail,
    }
}

/// One row per line, columns reconstructed from runs of two-or-more spaces
/// (the OCR pass renders column gaps as wide space runs). The first row is
/// the header anchor line itself, never data, and is always discarded.
fn split_rows(region: &str) -> Vec<Vec<String>> {
    region
        .lines()
        .skip(1)
        .map(|line| {
            re_columns()
                .split(line)
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    const AUCHAN_TEXT: &str = "AUCHAN POLSKA Sp. z o.o.\n\
        Paragon fiskalny\n\
        2024-05-11  14:03\n\
        Chleb 10A  1 x3,50 3,50A\n\
        Rabat Chleb  -0,50zł\n\
        SPRZEDAŻ OPODATK. A  3,00\n";

    #[test]
    fn auchan_crop_extracts_date_and_rows() {
        let c = crop(Store::Auchan, AUCHAN_TEXT, today()).unwrap();
        assert_eq!(c.date, NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
        assert_eq!(c.rows[0], vec!["Chleb 10A", "1 x3,50 3,50A"]);
        assert_eq!(c.rows[1], vec!["Rabat Chleb", "-0,50zł"]);
    }

    #[test]
    fn auchan_crop_discards_header_row() {
        let c = crop(Store::Auchan, AUCHAN_TEXT, today()).unwrap();
        assert!(c.rows.iter().all(|r| !r.iter().any(|cell| cell.contains("14:03"))));
    }

    #[test]
    fn auchan_missing_date_falls_back_to_today() {
        let text = "AUCHAN\nChleb 10A  1 x3,50 3,50A\nSPRZEDAŻ OPODATK. A\n";
        let c = crop(Store::Auchan, text, today()).unwrap();
        assert_eq!(c.date, today());
        // Region starts at the top of the text; the first line is still dropped.
        assert_eq!(c.rows[0], vec!["Chleb 10A", "1 x3,50 3,50A"]);
    }

    #[test]
    fn auchan_missing_footer_crops_to_end() {
        let text = "2024-05-11  14:03\nChleb 10A  1 x3,50 3,50A\n";
        let c = crop(Store::Auchan, text, today()).unwrap();
        assert_eq!(c.rows[0], vec!["Chleb 10A", "1 x3,50 3,50A"]);
    }

    #[test]
    fn auchan_no_anchors_at_all_does_not_panic() {
        let c = crop(Store::Auchan, "just some noise", today()).unwrap();
        assert!(c.rows.is_empty());
        let c = crop(Store::Auchan, "", today()).unwrap();
        assert!(c.rows.is_empty());
    }

    #[test]
    fn invalid_calendar_date_is_skipped_for_a_later_valid_one() {
        let text = "9999-99-99\n2024-05-11  14:03\nMasło 7B  1 x6,99 6,99A\n";
        let c = crop(Store::Auchan, text, today()).unwrap();
        assert_eq!(c.date, NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
    }

    const LIDL_TEXT: &str = "LIDL sp. z o.o. sp. k.\n\
        Data:2024-05-11 Godz:14:03\n\
        Mleko  1 x 3.99 3.99\n\
        Lidl Plus rabat  -1.00\n\
        PTU A 23,00%\n";

    #[test]
    fn lidl_crop_extracts_date_and_rows() {
        let c = crop(Store::Lidl, LIDL_TEXT, today()).unwrap();
        assert_eq!(c.date, NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
        assert_eq!(c.rows[0], vec!["Mleko", "1 x 3.99 3.99"]);
        assert_eq!(c.rows[1], vec!["Lidl Plus rabat", "-1.00"]);
    }

    #[test]
    fn lidl_anchor_spans_the_whole_date_token() {
        // The anchor line includes the glued prefix/suffix characters and is
        // dropped as the header row.
        let c = crop(Store::Lidl, LIDL_TEXT, today()).unwrap();
        assert!(c.rows.iter().all(|r| !r.iter().any(|cell| cell.contains("Godz"))));
    }

    #[test]
    fn lidl_missing_date_is_an_error() {
        let err = crop(Store::Lidl, "LIDL\nMleko  1 x 3.99 3.99\nPTU A\n", today());
        assert!(matches!(err, Err(CropError::MissingDateAnchor)));
    }

    #[test]
    fn lidl_missing_footer_crops_to_end() {
        let text = "Data:2024-05-11\nMleko  1 x 3.99 3.99\n";
        let c = crop(Store::Lidl, text, today()).unwrap();
        assert_eq!(c.rows[0], vec!["Mleko", "1 x 3.99 3.99"]);
    }

    #[test]
    fn blank_lines_become_empty_rows() {
        let text = "2024-05-11\n\nChleb 10A  1 x3,50 3,50A\n";
        let c = crop(Store::Auchan, text, today()).unwrap();
        assert_eq!(c.rows[0], Vec::<String>::new());
        assert_eq!(c.rows[1].len(), 2);
    }
}
