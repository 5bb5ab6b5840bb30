pub mod pipeline;
pub mod recognizer;

pub use pipeline::{PipelineError, ReceiptPipeline, ScanResult};
pub use recognizer::{MockRecognizer, OcrBackend, OcrError, PlainTextRecognizer};
