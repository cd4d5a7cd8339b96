//! Interface contracts for mature external collaborators.
//!
//! Nothing in this module is implemented in production: the archive reader,
//! HTML extractor, language-ID/content-safety classifiers, and final
//! tokenizer are explicitly out of scope. These traits exist only so a
//! caller can plug a real crate in at these exact seams without touching
//! pipeline internals.

use std::io;

/// One record yielded by a raw archive reader: `(record_id, url,
/// content_type, bytes)`.
#[derive(Debug, Clone)]
pub struct ArchiveRecord {
    pub record_id: String,
    pub url: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Yields archive records from whatever container format backs it (e.g. WARC).
pub trait ArchiveReader {
    fn records(&mut self) -> Box<dyn Iterator<Item = io::Result<ArchiveRecord>> + '_>;
}

/// Converts raw HTML bytes to a Unicode string with auto-detected encoding.
pub trait HtmlExtractor {
    fn extract(&self, bytes: &[u8]) -> String;
}

/// A pretrained fastText-style binary/label classifier: language-ID and
/// content-safety share this exact shape.
pub trait LabelClassifier {
    fn classify(&self, text: &str) -> (String, f32);
}

/// The final tokenizer that converts kept text into integer token streams
/// for pretraining. Distinct from `WordTokenizer` (internal, used only for
/// Gopher heuristic counts).
pub trait IntegerTokenizer {
    fn encode(&self, text: &str) -> Vec<u32>;
}
