//! Near-duplicate document deduplication via MinHash signatures,
//! banded LSH candidate generation, and verified Jaccard clustering.

pub mod checkpoint;
pub mod cluster;
pub mod config;
pub mod error;
pub mod lsh;
pub mod pipeline;
pub mod signature;
pub mod state;

pub use checkpoint::{load_checkpoint, save_checkpoint};
pub use cluster::{cluster_candidates, DuplicateCluster, NgramCache};
pub use config::NearDedupConfig;
pub use error::{NearDedupError, Result};
pub use lsh::candidate_pairs;
pub use pipeline::{build_signatures, run, NearDedupOutcome};
pub use signature::{build_signature, MinHashSignature};
pub use state::FileState;
