//! Orchestrator: per-file reservation protocol, a pool of interchangeable
//! `JobRunner`s, and resumable execution over a corpus of bundle files.

pub mod error;
pub mod pipeline;
pub mod reservation;
pub mod runner;
pub mod sweep;

pub use error::{OrchestratorError, Result};
pub use pipeline::{output_path_for, plan_jobs, reserve_all, run_stage};
pub use reservation::{create_reservation, is_complete, is_eligible, reservation_path};
pub use runner::{ExternalRunner, FileJob, JobFn, JobOutcome, JobRunner, SingleRunner, ThreadPoolRunner};
pub use sweep::{sweep_stale_reservations, ReclaimedReservation, DEFAULT_RESERVATION_TIMEOUT};
