//! Per-file reservation protocol: before a worker is
//! dispatched on an input file, it claims the eventual output path by
//! writing an empty `<output>.reservation.txt` sentinel. A file is eligible
//! for (re-)dispatch iff neither the output nor a reservation for it exists.
//! Completion is signaled by the output file appearing alongside its
//! `.meta.json` sidecar — the reservation is never removed by the worker
//! itself, only by [`crate::sweep::sweep_stale_reservations`] once it is
//! confirmed stale.

use crate::error::{OrchestratorError, Result};
use corpusforge_core::StageMeta;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// The reservation sentinel path for a given output path.
pub fn reservation_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".reservation.txt");
    PathBuf::from(name)
}

/// A file is eligible for dispatch iff its output and reservation are both
/// absent. Present output (with or without a reservation left behind by a
/// crashed prior attempt) or a live reservation both make it ineligible.
pub fn is_eligible(output: &Path) -> bool {
    !output.exists() && !reservation_path(output).exists()
}

/// Claims `output` for processing by writing its reservation sentinel, iff
/// one does not already exist. Idempotent: calling this twice for the same
/// output is a no-op on the second call.
pub fn create_reservation(output: &Path) -> Result<()> {
    let path = reservation_path(output);
    if path.exists() {
        return Ok(());
    }
    std::fs::write(&path, "1").map_err(|e| OrchestratorError::Core(corpusforge_core::CoreError::io(path.display().to_string(), e)))
}

/// A completed job: both the output file and its `.meta.json` sidecar are
/// present. Reservation removal is the sweep's job, not the worker's.
pub fn is_complete(output: &Path) -> bool {
    output.exists() && StageMeta::path_for(output).exists()
}

/// Age of a reservation sentinel, used by the sweep to decide staleness. A
/// missing reservation is reported as `None` rather than erroring — races
/// against a concurrently-completing worker are expected, not exceptional.
pub fn reservation_age(output: &Path) -> Option<std::time::Duration> {
    let path = reservation_path(output);
    let modified = std::fs::metadata(&path).ok()?.modified().ok()?;
    SystemTime::now().duration_since(modified).ok()
}
