use crate::error::{NearDedupError, Result};
use crate::signature::MinHashSignature;
use std::collections::HashMap;
use std::path::Path;

/// Serializes the path → signature map with `bincode`: compact, self
/// describing, and round-trips exactly.
pub fn save_checkpoint(path: &Path, signatures: &HashMap<String, MinHashSignature>) -> Result<()> {
    let rows: Vec<(String, Vec<u32>)> = signatures
        .iter()
        .map(|(p, sig)| (p.clone(), sig.values.clone()))
        .collect();
    let bytes = bincode::serialize(&rows)
        .map_err(|e| NearDedupError::Checkpoint(e.to_string()))?;
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, &bytes).map_err(|e| {
        corpusforge_core::CoreError::io(tmp.display().to_string(), e)
    })?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        corpusforge_core::CoreError::io(path.display().to_string(), e)
    })?;
    Ok(())
}

/// Loads a checkpoint, rejecting it outright (no silent regeneration) if any
/// stored signature's length disagrees with `num_hashes` — fatal at startup.
pub fn load_checkpoint(path: &Path, num_hashes: u32) -> Result<HashMap<String, MinHashSignature>> {
    let bytes =
        std::fs::read(path).map_err(|e| corpusforge_core::CoreError::io(path.display().to_string(), e))?;
    let rows: Vec<(String, Vec<u32>)> =
        bincode::deserialize(&bytes).map_err(|e| NearDedupError::Checkpoint(e.to_string()))?;

    let mut out = HashMap::with_capacity(rows.len());
    for (p, values) in rows {
        if values.len() != num_hashes as usize {
            return Err(NearDedupError::CheckpointMismatch {
                path: path.display().to_string(),
                found: values.len(),
                expected: num_hashes as usize,
            });
        }
        out.insert(p, MinHashSignature { values });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_checkpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigs.bin");
        let mut signatures = HashMap::new();
        signatures.insert(
            "a.txt".to_string(),
            MinHashSignature {
                values: vec![1, 2, 3],
            },
        );
        save_checkpoint(&path, &signatures).unwrap();
        let loaded = load_checkpoint(&path, 3).unwrap();
        assert_eq!(loaded.get("a.txt").unwrap().values, vec![1, 2, 3]);
    }

    #[test]
    fn rejects_checkpoint_whose_length_disagrees_with_configured_num_hashes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigs.bin");
        let mut signatures = HashMap::new();
        signatures.insert(
            "a.txt".to_string(),
            MinHashSignature {
                values: vec![1, 2, 3],
            },
        );
        save_checkpoint(&path, &signatures).unwrap();
        let result = load_checkpoint(&path, 100);
        assert!(matches!(
            result,
            Err(NearDedupError::CheckpointMismatch { .. })
        ));
    }
}
