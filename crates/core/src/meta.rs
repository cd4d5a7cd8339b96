//! The `.meta.json` sidecar written alongside every stage output file.
//! Field names are a stable contract for downstream dashboards — never
//! rename them without a migration plan.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StageMeta {
    pub total_docs: u64,
    pub accepted_docs_ct: u64,
    pub rejected_docs_ct: u64,
    pub rejected_docs_by_type: HashMap<String, u64>,

    /// Stage-specific counters (e.g. `total_lines`/`unique_lines` for
    /// exact dedup, `emails`/`phones`/`ips` for PII masking) that don't
    /// belong in the common fields above but still need a stable name.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StageMeta {
    pub fn record_rejection(&mut self, reason: &str) {
        self.rejected_docs_ct += 1;
        *self.rejected_docs_by_type.entry(reason.to_string()).or_insert(0) += 1;
    }

    pub fn record_acceptance(&mut self) {
        self.accepted_docs_ct += 1;
    }

    /// Sidecar path for a given output file: `<output>.meta.json`.
    pub fn path_for(output_path: &Path) -> std::path::PathBuf {
        let mut name = output_path.as_os_str().to_os_string();
        name.push(".meta.json");
        std::path::PathBuf::from(name)
    }

    pub fn write_atomic(&self, output_path: &Path) -> Result<()> {
        let meta_path = Self::path_for(output_path);
        let tmp = meta_path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&tmp, json).map_err(|e| CoreError::io(tmp.display().to_string(), e))?;
        std::fs::rename(&tmp, &meta_path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            CoreError::io(meta_path.display().to_string(), e)
        })
    }

    pub fn load(output_path: &Path) -> Result<Self> {
        let meta_path = Self::path_for(output_path);
        let bytes =
            std::fs::read(&meta_path).map_err(|e| CoreError::io(meta_path.display().to_string(), e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("shard-0001.txt");
        let mut meta = StageMeta::default();
        meta.total_docs = 10;
        meta.record_acceptance();
        meta.record_rejection("short");
        meta.record_rejection("short");

        meta.write_atomic(&out).unwrap();
        assert!(StageMeta::path_for(&out).exists());

        let loaded = StageMeta::load(&out).unwrap();
        assert_eq!(loaded.total_docs, 10);
        assert_eq!(loaded.accepted_docs_ct, 1);
        assert_eq!(loaded.rejected_docs_ct, 2);
        assert_eq!(loaded.rejected_docs_by_type.get("short"), Some(&2));
    }
}
