//! Pinned app entry as stored in `pinned_apps.json`.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One favourite app: display name plus bundle path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedAppConfig {
    pub name: String,
    pub path: String,
}

impl PinnedAppConfig {
    /// Build an entry from a bundle path, naming it after the bundle.
    pub fn from_path(path: &Path) -> Self {
        Self {
            name: app_display_name(path),
            path: path.to_string_lossy().into_owned(),
        }
    }
}

/// Bundle file name without the `.app` extension.
pub fn app_display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_strips_extension() {
        assert_eq!(
            app_display_name(Path::new("/Applications/Visual Studio Code.app")),
            "Visual Studio Code"
        );
    }

    #[test]
    fn json_shape_matches_file_format() {
        let entry = PinnedAppConfig::from_path(Path::new("/Applications/Notes.app"));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Notes","path":"/Applications/Notes.app"}"#);
    }
}
