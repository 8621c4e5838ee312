//! PDF decoding backends. Each one turns a staged PDF file into plain text
//! or reports why it could not.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("{strategy}: failed to decode PDF: {reason}")]
    Decode {
        strategy: &'static str,
        reason: String,
    },

    #[error("{strategy}: decoder panicked: {reason}")]
    Panicked {
        strategy: &'static str,
        reason: String,
    },
}

/// One way of turning a PDF into text. `PdfTextExtractor` tries its strategies
/// in order and stops at the first that returns `Ok`.
pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn try_extract(&self, path: &Path) -> Result<String, StrategyError>;
}

/// Primary backend (`pdf-extract`). Page texts are joined in page order,
/// each followed by a newline.
pub struct PdfExtractStrategy;

impl ExtractionStrategy for PdfExtractStrategy {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn try_extract(&self, path: &Path) -> Result<String, StrategyError> {
        let pages = guard(self.name(), || pdf_extract::extract_text_by_pages(path))?.map_err(
            |e| StrategyError::Decode {
                strategy: self.name(),
                reason: e.to_string(),
            },
        )?;

        let mut text = String::new();
        for page in pages {
            if !page.is_empty() {
                text.push_str(&page);
                text.push('\n');
            }
        }
        Ok(text)
    }
}

/// Fallback backend (`lopdf`). Pages are concatenated in page-number order;
/// lopdf already terminates each page's text.
pub struct LopdfStrategy;

impl ExtractionStrategy for LopdfStrategy {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn try_extract(&self, path: &Path) -> Result<String, StrategyError> {
        let decode_err = |e: lopdf::Error| StrategyError::Decode {
            strategy: "lopdf",
            reason: e.to_string(),
        };

        guard(self.name(), || {
            let doc = lopdf::Document::load(path).map_err(decode_err)?;
            let mut text = String::new();
            // get_pages() is a BTreeMap keyed by page number
            for page_number in doc.get_pages().keys() {
                let page_text = doc.extract_text(&[*page_number]).map_err(decode_err)?;
                text.push_str(&page_text);
            }
            Ok(text)
        })?
    }
}

/// Runs a decoder, turning a panic inside it into a `StrategyError`.
/// Both backends are known to panic on some malformed files.
fn guard<T>(strategy: &'static str, f: impl FnOnce() -> T) -> Result<T, StrategyError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        StrategyError::Panicked { strategy, reason }
    })
}
