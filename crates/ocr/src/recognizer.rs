use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidText(#[from] std::str::Utf8Error),
    #[error("OCR engine error: {0}")]
    Engine(String),
    #[error("Tesseract not available — build with `tesseract` feature")]
    NotAvailable,
}

/// Abstraction over an OCR backend.
/// Implementations accept the raw bytes of one receipt (image or text) and
/// return the recognized text blob.
pub trait OcrBackend: Send + Sync {
    fn recognize(&self, input_bytes: &[u8]) -> Result<String, OcrError>;
}

// ── Mock backend (always available, used for tests) ───────────────────────────

/// Returns a pre-set string — useful for unit testing the parsing pipeline
/// without requiring Tesseract to be installed.
pub struct MockRecognizer {
    pub text: String,
}

impl MockRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl OcrBackend for MockRecognizer {
    fn recognize(&self, _input_bytes: &[u8]) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}

// ── Plain-text backend ────────────────────────────────────────────────────────

/// Treats the input bytes as already-recognized UTF-8 text. Used when the
/// recognition pass happened upstream and only the parse is wanted.
pub struct PlainTextRecognizer;

impl OcrBackend for PlainTextRecognizer {
    fn recognize(&self, input_bytes: &[u8]) -> Result<String, OcrError> {
        Ok(std::str::from_utf8(input_bytes)?.to_string())
    }
}

// ── Tesseract backend (optional, gated behind `tesseract` feature) ─────────────

#[cfg(feature = "tesseract")]
pub mod tesseract_backend {
    use super::{OcrBackend, OcrError};
    use leptess::LepTess;

    /// Recognizes receipt images. The engine handle is created per call and
    /// dropped as soon as the text is out, so a recognizer can be shared
    /// without holding a worker alive between receipts.
    pub struct TesseractRecognizer {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractRecognizer {
        /// `lang` is a Tesseract language code; Polish receipts use `pol`.
        pub fn new(data_path: Option<String>, lang: &str) -> Self {
            Self { data_path, lang: lang.to_string() }
        }
    }

    impl OcrBackend for TesseractRecognizer {
        fn recognize(&self, input_bytes: &[u8]) -> Result<String, OcrError> {
            let mut lt = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            lt.set_image_from_mem(input_bytes)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            lt.get_utf8_text().map_err(|e| OcrError::Engine(e.to_string()))
        }
    }
}
