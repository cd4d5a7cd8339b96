//! Stale-reservation sweep. A standalone batch scheduler's submission log
//! (matching reservations against recorded job failures) is outside this
//! crate's scope, so the sweep here uses a wall-clock criterion instead: a
//! reservation older than the per-file timeout with no matching output+meta
//! pair is presumed to belong to a dead worker and is removed so the file
//! is re-dispatched.

use crate::reservation::{is_complete, reservation_path};
use corpusforge_core::CoreError;
use std::path::Path;
use std::time::Duration;

/// Default per-file wall-clock timeout: a task's reservation older than
/// this with no completed output is considered abandoned.
pub const DEFAULT_RESERVATION_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// One reservation the sweep reclaimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReclaimedReservation {
    pub output_path: std::path::PathBuf,
}

/// Walks `out_dir` for `*.reservation.txt` sentinels and deletes every one
/// whose paired output+meta are absent and whose age exceeds `timeout`.
/// A live reservation for an in-flight task is left untouched; a
/// reservation whose output already completed is also left untouched (the
/// owning worker will have raced to delete it... except workers never
/// delete their own reservation — see module docs — so a completed pair
/// with a lingering reservation is simply stale bookkeeping, not a bug,
/// and is reclaimed too).
pub fn sweep_stale_reservations(
    out_dir: &Path,
    timeout: Duration,
) -> corpusforge_core::Result<Vec<ReclaimedReservation>> {
    let mut reclaimed = Vec::new();
    if !out_dir.exists() {
        return Ok(reclaimed);
    }

    let entries = std::fs::read_dir(out_dir)
        .map_err(|e| CoreError::io(out_dir.display().to_string(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| CoreError::io(out_dir.display().to_string(), e))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(output_name) = name.strip_suffix(".reservation.txt") else {
            continue;
        };
        let output_path = out_dir.join(output_name);

        if is_complete(&output_path) {
            let _ = std::fs::remove_file(&path);
            reclaimed.push(ReclaimedReservation { output_path });
            continue;
        }

        let age = std::fs::metadata(&path)
            .ok()
            .and_then(|m| m.modified().ok())
            .and_then(|m| m.elapsed().ok());

        if age.is_some_and(|age| age >= timeout) {
            std::fs::remove_file(&path)
                .map_err(|e| CoreError::io(path.display().to_string(), e))?;
            reclaimed.push(ReclaimedReservation { output_path });
        }
    }

    reclaimed.sort_by(|a, b| a.output_path.cmp(&b.output_path));
    Ok(reclaimed)
}
