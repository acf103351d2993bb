//! Resolving selected paths to ring entries.

use std::path::{Path, PathBuf};

use crate::model::app_display_name;

/// One app in the ring: the platform-free half of an icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub name: String,
    pub path: PathBuf,
}

impl AppEntry {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: app_display_name(&path),
            path,
        }
    }
}

/// Entries for every selected path that still exists, in order.
///
/// Deleted apps are skipped silently; they stay in the settings until the
/// user removes them.
pub fn resolve_apps<S: AsRef<str>>(paths: &[S]) -> Vec<AppEntry> {
    paths
        .iter()
        .map(|p| Path::new(p.as_ref()))
        .filter(|p| {
            let exists = p.exists();
            if !exists {
                tracing::debug!(path = %p.display(), "skipping missing app");
            }
            exists
        })
        .map(AppEntry::from_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_paths_are_skipped_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("Notes.app");
        let mail = dir.path().join("Mail.app");
        std::fs::create_dir(&notes).unwrap();
        std::fs::create_dir(&mail).unwrap();

        let paths = vec![
            mail.to_string_lossy().into_owned(),
            dir.path().join("Gone.app").to_string_lossy().into_owned(),
            notes.to_string_lossy().into_owned(),
        ];
        let apps = resolve_apps(&paths);

        let names: Vec<_> = apps.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Mail", "Notes"]);
        assert_eq!(apps[0].path, mail);
    }
}
