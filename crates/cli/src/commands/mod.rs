pub mod classify;
pub mod exact_dedup;
pub mod heuristic;
pub mod near_dedup;
pub mod pii;
pub mod stage_args;
pub mod sweep;
