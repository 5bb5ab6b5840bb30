use std::path::Path;

use thiserror::Error;

use paragon_core::{PurchaseRecord, Store};
use paragon_parse::ParseError;

use crate::recognizer::{OcrBackend, OcrError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
    #[error("Receipt parsing failed: {0}")]
    Parse(#[from] ParseError),
}

/// The result of scanning a single receipt.
#[derive(Debug)]
pub struct ScanResult {
    /// Raw recognized text, kept for review and debugging.
    pub ocr_text: String,
    /// The ordered purchase records recovered from the text.
    pub purchases: Vec<PurchaseRecord>,
}

/// Orchestrates one receipt: acquire OCR text → release worker → parse.
///
/// The recognizer is invoked exactly once per scan; parsing operates on the
/// returned text only, so a slow or failing engine never holds parser state.
pub struct ReceiptPipeline<R: OcrBackend> {
    recognizer: R,
}

impl<R: OcrBackend> ReceiptPipeline<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Scan a receipt file on disk.
    pub async fn scan_file(&self, path: &Path, store: Store) -> Result<ScanResult, PipelineError> {
        let bytes = tokio::fs::read(path).await?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "scanning receipt file");
        self.scan_bytes(&bytes, store)
    }

    /// Scan raw receipt bytes (from camera capture or file read).
    pub fn scan_bytes(&self, data: &[u8], store: Store) -> Result<ScanResult, PipelineError> {
        let ocr_text = self.recognizer.recognize(data)?;
        let purchases = paragon_parse::parse_receipt(store, &ocr_text)?;
        tracing::info!(%store, purchases = purchases.len(), "receipt scanned");
        Ok(ScanResult { ocr_text, purchases })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
