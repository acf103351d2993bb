//! Installed application discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// All `*.app` bundles directly inside `dir`, sorted by file name.
pub fn discover_applications(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut apps: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_app_bundle(path))
        .collect();
    apps.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(dir = %dir.display(), count = apps.len(), "discovered applications");
    Ok(apps)
}

/// True for paths ending in `.app`.
pub fn is_app_bundle(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "app")
}
