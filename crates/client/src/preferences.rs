use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dex_filter::FilterSettings;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Fixed key the settings blob is stored under.
pub const SETTINGS_KEY: &str = "pokedex-settings";

/// Injected persistence port for `FilterSettings`.
///
/// `load` never fails: a missing, malformed or expired blob yields defaults.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> FilterSettings;

    fn save(&self, settings: &FilterSettings) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredBlob {
    value: FilterSettings,
    expires_at: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// JSON blob on disk with an expiry stamp, `<dir>/pokedex-settings.json`.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    ttl: Duration,
}

impl FilePreferenceStore {
    pub fn new(dir: impl AsRef<Path>, ttl: Duration) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SETTINGS_KEY}.json")),
            ttl,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ClientError::preferences(&self.path, err)),
        }
    }

    fn read_blob(&self) -> Option<StoredBlob> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("Failed to read {}: {err}", self.path.display());
                return None;
            }
        };
        match serde_json::from_str::<StoredBlob>(&raw) {
            Ok(blob) => Some(blob),
            Err(err) => {
                log::warn!(
                    "Ignoring malformed settings blob {}: {err}",
                    self.path.display()
                );
                None
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> FilterSettings {
        let Some(blob) = self.read_blob() else {
            return FilterSettings::default();
        };
        if blob.expires_at <= now_secs() {
            log::debug!("Settings blob {} expired", self.path.display());
            return FilterSettings::default();
        }
        blob.value
    }

    fn save(&self, settings: &FilterSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| ClientError::preferences(parent, err))?;
        }
        let blob = StoredBlob {
            value: settings.clone(),
            expires_at: now_secs().saturating_add(self.ttl.as_secs()),
        };
        let bytes = serde_json::to_vec_pretty(&blob)
            .map_err(|err| ClientError::preferences(&self.path, err))?;
        let tmp = self.path.with_extension("json.tmp");
        let written = std::fs::write(&tmp, bytes).and_then(|()| std::fs::rename(&tmp, &self.path));
        if let Err(err) = written {
            if let Err(cleanup) = std::fs::remove_file(&tmp) {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Failed to remove {}: {cleanup}", tmp.display());
                }
            }
            return Err(ClientError::preferences(&self.path, err));
        }
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// In-process store, for tests and hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<FilterSettings>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: FilterSettings) -> Self {
        Self {
            value: Mutex::new(Some(settings)),
        }
    }

    pub fn stored(&self) -> Option<FilterSettings> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> FilterSettings {
        self.stored().unwrap_or_default()
    }

    fn save(&self, settings: &FilterSettings) -> Result<()> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(settings.clone());
        Ok(())
    }
}
