//! Exact line-level deduplication across a corpus of bundle files.
//! Two passes: count every line hash corpus-wide, then rewrite each file
//! dropping lines whose hash occurred more than once.

pub mod dedup;
pub mod error;

pub use dedup::{
    build_duplicate_map, count_documents, count_file, merge_counts, prune_unique,
    rewrite_documents, rewrite_file, CountMap, LineCount, RewriteStats, MIN_SURVIVING_TOKENS,
};
pub use error::{DedupError, Result};
