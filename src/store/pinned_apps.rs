//! JSON list of pinned apps.
//!
//! Stored as `pinned_apps.json` in the per-user data directory
//! (`~/Library/Application Support/TapThatApp/` on macOS). The selected-app
//! list in NSUserDefaults is authoritative; this file is the legacy source
//! used to seed a first run when none of the stock apps are installed.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::discovery::discover_applications;
use crate::error::{Error, Result};
use crate::model::constants::*;
use crate::model::{app_display_name, PinnedAppConfig};

/// Names a bundle for the fallback list.
pub type DisplayNameFn = fn(&Path) -> String;

/// Reads and writes the pinned-apps file.
#[derive(Debug, Clone)]
pub struct PinnedAppLoader {
    path: PathBuf,
    applications_dir: PathBuf,
    display_name: DisplayNameFn,
}

impl PinnedAppLoader {
    /// Loader for the file at `path`, discovering fallbacks in `/Applications`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            applications_dir: PathBuf::from(APPLICATIONS_DIR),
            display_name: app_display_name,
        }
    }

    /// Name discovered apps with `f` instead of the bundle file stem.
    pub fn with_display_names(mut self, f: DisplayNameFn) -> Self {
        self.display_name = f;
        self
    }

    /// Use another directory for fallback discovery.
    pub fn with_applications_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.applications_dir = dir.into();
        self
    }

    /// Loader for the standard per-user location.
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", APP_DATA_DIR_NAME).ok_or(Error::NoDataDirectory)?;
        Ok(Self::new(dirs.data_dir().join(PINNED_APPS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the file as is.
    pub fn read(&self) -> Result<Vec<PinnedAppConfig>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Decode the file, or fall back to discovered apps.
    ///
    /// When the file is missing or invalid the fallback list is written
    /// back so the next load finds it.
    pub fn load(&self) -> Vec<PinnedAppConfig> {
        match self.read() {
            Ok(apps) => apps,
            Err(err) => {
                tracing::info!(path = %self.path.display(), %err, "pinned apps unavailable, using defaults");
                let fallback = self.default_apps();
                if let Err(err) = self.save(&fallback) {
                    tracing::warn!(%err, "could not write default pinned apps");
                }
                fallback
            }
        }
    }

    /// Write `apps`, creating the parent directory if needed.
    pub fn save(&self, apps: &[PinnedAppConfig]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(apps)?;
        fs::write(&self.path, json).map_err(|e| Error::io(&self.path, e))
    }

    /// The first few installed applications, by name.
    pub fn default_apps(&self) -> Vec<PinnedAppConfig> {
        let apps = match discover_applications(&self.applications_dir) {
            Ok(apps) => apps,
            Err(err) => {
                tracing::warn!(%err, "application discovery failed");
                Vec::new()
            }
        };
        apps.iter()
            .take(DEFAULT_PINNED_APP_COUNT)
            .map(|p| PinnedAppConfig {
                name: (self.display_name)(p),
                path: p.to_string_lossy().into_owned(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location_ends_with_file_name() {
        if let Ok(loader) = PinnedAppLoader::default_location() {
            assert!(loader.path().ends_with(PINNED_APPS_FILE));
        }
    }

    #[test]
    fn default_apps_are_capped() {
        let apps_dir = tempfile::tempdir().unwrap();
        for i in 0..12 {
            fs::create_dir(apps_dir.path().join(format!("App{i:02}.app"))).unwrap();
        }
        let loader = PinnedAppLoader::new(apps_dir.path().join("unused.json"))
            .with_applications_dir(apps_dir.path());

        let apps = loader.default_apps();
        assert_eq!(apps.len(), DEFAULT_PINNED_APP_COUNT);
        assert_eq!(apps[0].name, "App00");
    }
}
