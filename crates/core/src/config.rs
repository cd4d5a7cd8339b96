//! Shared config-loading helper. Each stage owns its own config struct
//! (with `Default` + `validate()`); this just fixes how that struct is
//! read from disk so every stage's `--config` flag behaves identically.

use crate::error::{CoreError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a config from a TOML or JSON file (chosen by extension), falling
/// back to `T::default()` when `path` is `None`.
pub fn load_config<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = path else {
        return Ok(T::default());
    };

    let contents =
        std::fs::read_to_string(path).map_err(|e| CoreError::io(path.display().to_string(), e))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|e| {
            CoreError::config(format!("invalid JSON config at {}: {e}", path.display()))
        }),
        _ => toml::from_str(&contents).map_err(|e| {
            CoreError::config(format!("invalid TOML config at {}: {e}", path.display()))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Sample {
        threshold: u32,
    }

    #[test]
    fn missing_path_yields_default() {
        let cfg: Sample = load_config(None).unwrap();
        assert_eq!(cfg, Sample::default());
    }

    #[test]
    fn loads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "threshold = 7\n").unwrap();
        let cfg: Sample = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.threshold, 7);
    }

    #[test]
    fn loads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, r#"{"threshold": 9}"#).unwrap();
        let cfg: Sample = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.threshold, 9);
    }
}
