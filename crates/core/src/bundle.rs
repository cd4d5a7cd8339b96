//! Document bundle format: many documents in one file, separated by a
//! literal sentinel.

use crate::error::{CoreError, Result};
use std::path::Path;

/// The literal separator between documents in a bundle file:
/// `"\n\n---END_OF_DOC---\n\n"` — this exact byte sequence is the contract;
/// readers must tolerate a missing trailing sentinel on the last document.
pub const DOC_SENTINEL: &str = "\n\n---END_OF_DOC---\n\n";

/// A single document: an ordered sequence of `\n`-terminated lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub lines: Vec<String>,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        let lines = text.lines().map(str::to_string).collect();
        Self { lines }
    }

    /// A document is empty iff it has no non-whitespace character.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Split a bundle file's contents into documents on the literal sentinel.
///
/// Tolerates a missing trailing sentinel (the common case when a writer
/// always appends one, but a hand-crafted or truncated file may not).
pub fn split_documents(contents: &str) -> Vec<Document> {
    let mut parts: Vec<&str> = contents.split(DOC_SENTINEL).collect();

    // `str::split` on a string that ends with the sentinel produces a
    // trailing empty segment; drop it so we don't emit a bogus empty doc.
    if parts.last().is_some_and(|s| s.is_empty()) {
        parts.pop();
    }

    parts.into_iter().map(Document::from_text).collect()
}

/// Rejoin documents into bundle-file bytes, always appending a trailing
/// sentinel after the last document.
pub fn join_documents(docs: &[Document]) -> String {
    let mut out = String::new();
    for doc in docs {
        out.push_str(&doc.to_text());
        out.push_str(DOC_SENTINEL);
    }
    out
}

/// Read a bundle file into its constituent documents. Decode errors are
/// rare and always recovered via lossy UTF-8 replacement rather than
/// failing the read.
pub fn read_bundle(path: &Path) -> Result<Vec<Document>> {
    let bytes = std::fs::read(path).map_err(|e| CoreError::io(path.display().to_string(), e))?;
    let text = String::from_utf8_lossy(&bytes);
    let docs = split_documents(&text);
    log::debug!("read {} document(s) from {}", docs.len(), path.display());
    Ok(docs)
}

/// Write documents to `path` atomically: write to a `.tmp` sibling, then
/// rename over the destination, so a crashed task never leaves a
/// half-written file visible.
pub fn write_bundle_atomic(path: &Path, docs: &[Document]) -> Result<()> {
    let tmp = path.with_extension(tmp_extension(path));
    let contents = join_documents(docs);
    std::fs::write(&tmp, contents).map_err(|e| CoreError::io(tmp.display().to_string(), e))?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        CoreError::io(path.display().to_string(), e)
    })?;
    Ok(())
}

fn tmp_extension(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{ext}.tmp"),
        None => "tmp".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_when_no_document_dropped() {
        let original = format!(
            "doc one line a\ndoc one line b{sentinel}doc two{sentinel}",
            sentinel = DOC_SENTINEL
        );
        let docs = split_documents(&original);
        assert_eq!(docs.len(), 2);
        let rejoined = join_documents(&docs);
        assert_eq!(rejoined, original);
    }

    #[test]
    fn tolerates_missing_trailing_sentinel() {
        let text = format!("only doc{}", "");
        let docs = split_documents(&text);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].lines, vec!["only doc".to_string()]);
    }

    #[test]
    fn document_emptiness_ignores_whitespace() {
        let doc = Document::from_text("   \n\t\n  ");
        assert!(doc.is_empty());
        let doc2 = Document::from_text("   \nsomething\n  ");
        assert!(!doc2.is_empty());
    }

    #[test]
    fn write_bundle_atomic_leaves_no_tmp_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let docs = vec![Document::from_text("hello\nworld")];
        write_bundle_atomic(&path, &docs).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("txt.tmp").exists());
    }
}
