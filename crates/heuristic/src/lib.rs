//! Per-document, per-line quality rules: the C4 page/line filter composed
//! with the Gopher document filter.

pub mod config;
pub mod error;
pub mod filter;

pub use config::HeuristicConfig;
pub use error::{HeuristicError, Result};
pub use filter::{FilterOutcome, HeuristicFilter, LineStats, RejectReason};
