//! PDF text extraction — raw upload bytes in, plain text out.
//!
//! The bytes are staged to a uniquely named temp file (the decoders want a
//! path) which is removed on every exit path. Strategies are tried in order;
//! a later one runs only if the previous one errored. An empty string is the
//! "could not read this file" result, never an error.

pub mod strategies;

#[cfg(test)]
pub(crate) mod test_pdf;

use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

pub use strategies::{ExtractionStrategy, LopdfStrategy, PdfExtractStrategy, StrategyError};

const STAGING_PREFIX: &str = "resume-";
const STAGING_SUFFIX: &str = ".pdf";

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The temp copy could not be written or removed.
    #[error("Staging file error: {0}")]
    Staging(#[from] std::io::Error),
}

pub struct PdfTextExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl PdfTextExtractor {
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Returns the document text, or `""` when no strategy could read it.
    /// Only staging I/O failures are reported as errors.
    pub fn extract(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut staged = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .suffix(STAGING_SUFFIX)
            .tempfile()?;
        staged.write_all(pdf_bytes)?;
        staged.flush()?;

        let text = self.extract_from_path(staged.path());

        // Dropping would also unlink, but silently; close() surfaces the error.
        staged.close()?;
        Ok(text)
    }

    fn extract_from_path(&self, path: &Path) -> String {
        for strategy in &self.strategies {
            match strategy.try_extract(path) {
                Ok(text) => {
                    debug!(
                        strategy = strategy.name(),
                        chars = text.len(),
                        "PDF text extracted"
                    );
                    return if text.trim().is_empty() {
                        String::new()
                    } else {
                        text
                    };
                }
                Err(e) => warn!("Extraction strategy failed: {e}"),
            }
        }
        debug!("All extraction strategies failed");
        String::new()
    }
}

impl Default for PdfTextExtractor {
    /// `pdf-extract` first, `lopdf` as fallback.
    fn default() -> Self {
        Self::new(vec![Box::new(PdfExtractStrategy), Box::new(LopdfStrategy)])
    }
}
