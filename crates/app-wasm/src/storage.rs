//! Settings store backed by `window.localStorage`

use crosshair_config::{ConfigError, PersistedRecord, SettingsStore, STORAGE_KEY};
use web_sys::{Storage, Window};

/// Stores the record as JSON under a single key.
///
/// Private browsing modes may deny storage access; the store then reports
/// `Unavailable` and the session carries on with defaults.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn from_window(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> Result<&Storage, ConfigError> {
        self.storage
            .as_ref()
            .ok_or_else(|| ConfigError::Unavailable("localStorage is not accessible".into()))
    }
}

impl SettingsStore for LocalStorageStore {
    fn load(&self) -> Result<Option<PersistedRecord>, ConfigError> {
        let item = self
            .storage()?
            .get_item(STORAGE_KEY)
            .map_err(|e| ConfigError::Unavailable(format!("{e:?}")))?;
        match item {
            Some(json) if !json.trim().is_empty() => Ok(Some(PersistedRecord::from_json(&json)?)),
            _ => Ok(None),
        }
    }

    fn save(&mut self, record: &PersistedRecord) -> Result<(), ConfigError> {
        let json = record.to_json()?;
        self.storage()?
            .set_item(STORAGE_KEY, &json)
            .map_err(|e| ConfigError::Unavailable(format!("{e:?}")))
    }
}
