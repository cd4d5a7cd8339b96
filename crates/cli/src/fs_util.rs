//! Directory listing helpers shared by every stage command.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the document-bundle files under `data_dir`, descending into
/// subdirectories (real corpora are commonly sharded into dated or
/// numbered subdirectories rather than one flat directory), sorted for a
/// deterministic input order that's stable given the same worker count
/// and the same input directory listing. Sidecars (`.meta.json`,
/// `.reservation.txt`) and hidden files are never themselves bundle inputs.
pub fn discover_bundle_files(data_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(data_dir).into_iter() {
        let entry = entry.with_context(|| format!("walking data directory {}", data_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || name.ends_with(".meta.json") || name.ends_with(".reservation.txt") {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}
