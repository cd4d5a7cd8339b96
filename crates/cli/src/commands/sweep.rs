//! Orchestrator maintenance: `corpusforge sweep` reclaims reservation
//! sentinels left behind by a crashed or killed worker.

use anyhow::Result;
use clap::Args;
use corpusforge_orchestrator::{sweep_stale_reservations, DEFAULT_RESERVATION_TIMEOUT};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Clone, Debug)]
pub struct SweepCommand {
    /// Directory to scan for `*.reservation.txt` sentinels.
    #[arg(long)]
    pub out_dir: PathBuf,

    /// Reservations older than this are considered abandoned and removed.
    #[arg(long, default_value_t = DEFAULT_RESERVATION_TIMEOUT.as_secs())]
    pub timeout_secs: u64,
}

pub fn run(cmd: SweepCommand) -> Result<()> {
    let timeout = Duration::from_secs(cmd.timeout_secs);
    let reclaimed = sweep_stale_reservations(&cmd.out_dir, timeout)?;

    if reclaimed.is_empty() {
        log::info!("sweep: no stale reservations found under {}", cmd.out_dir.display());
    } else {
        for r in &reclaimed {
            log::info!("sweep: reclaimed stale reservation for {}", r.output_path.display());
        }
        log::info!("sweep: reclaimed {} stale reservation(s)", reclaimed.len());
    }

    Ok(())
}
