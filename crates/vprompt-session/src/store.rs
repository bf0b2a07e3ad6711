//! Local profile snapshot store.
//!
//! One flat JSON object under a fixed key: written on login and plan change,
//! read once at startup, removed on logout. A corrupt snapshot is discarded
//! rather than surfaced, matching a fresh-install experience.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use vprompt_models::UserProfile;

use crate::error::SessionResult;

/// Fixed key the profile snapshot lives under.
pub const SNAPSHOT_KEY: &str = "vp_pro_user";

/// Key-value style store holding the single profile snapshot as a JSON file.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store rooted at the given directory. The snapshot file is
    /// `<dir>/vp_pro_user.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{SNAPSHOT_KEY}.json")),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, if any. A snapshot that fails to parse is removed
    /// and reported as absent.
    pub fn load(&self) -> SessionResult<Option<UserProfile>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding corrupt profile snapshot");
                self.clear()?;
                Ok(None)
            }
        }
    }

    /// Overwrite the snapshot wholesale.
    pub fn save(&self, profile: &UserProfile) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(profile)?)?;
        Ok(())
    }

    /// Remove the snapshot. Removing an absent snapshot is not an error.
    pub fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
