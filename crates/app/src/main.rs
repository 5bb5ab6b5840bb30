use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use paragon_core::Store;
use paragon_ocr::{PlainTextRecognizer, ReceiptPipeline, ScanResult};

/// Parse a supermarket receipt into a structured purchase list (JSON on stdout).
#[derive(Debug, Parser)]
#[command(name = "paragon", version)]
struct Args {
    /// Receipt file: recognized OCR text, or an image with `--image`.
    input: PathBuf,

    /// Store whose layout rules to apply (auchan, lidl).
    #[arg(short, long)]
    store: Store,

    /// Treat the input as an image and run OCR on it (requires the
    /// `tesseract` build feature).
    #[arg(long)]
    image: bool,

    /// Tesseract language code used with `--image`.
    #[arg(long, default_value = "pol")]
    lang: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    tracing::debug!(store = %args.store, image = args.image, lang = %args.lang, "scan starting");

    let result = scan(&args).await?;
    tracing::info!(
        "{} purchases parsed from {}",
        result.purchases.len(),
        args.input.display()
    );
    println!("{}", serde_json::to_string_pretty(&result.purchases)?);
    Ok(())
}

async fn scan(args: &Args) -> anyhow::Result<ScanResult> {
    if args.image {
        #[cfg(feature = "tesseract")]
        {
            use paragon_ocr::recognizer::tesseract_backend::TesseractRecognizer;
            let pipeline = ReceiptPipeline::new(TesseractRecognizer::new(None, &args.lang));
            return pipeline
                .scan_file(&args.input, args.store)
                .await
                .context("image recognition failed");
        }
        #[cfg(not(feature = "tesseract"))]
        anyhow::bail!(
            "this build cannot OCR images; rebuild with --features tesseract or pass recognized text"
        );
    }

    let pipeline = ReceiptPipeline::new(PlainTextRecognizer);
    pipeline
        .scan_file(&args.input, args.store)
        .await
        .with_context(|| format!("failed to scan {}", args.input.display()))
}
