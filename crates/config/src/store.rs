//! Settings stores and startup resolution.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::model::CrosshairConfig;
use crate::record::PersistedRecord;

/// A local key-value store holding the last used settings record.
pub trait SettingsStore {
    /// Read the stored record, `Ok(None)` if nothing was saved yet.
    fn load(&self) -> Result<Option<PersistedRecord>, ConfigError>;

    /// Replace the stored record.
    fn save(&mut self, record: &PersistedRecord) -> Result<(), ConfigError>;
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> Result<Option<PersistedRecord>, ConfigError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        if contents.trim().is_empty() {
            return Ok(None);
        }
        PersistedRecord::from_json(&contents).map(Some)
    }

    fn save(&mut self, record: &PersistedRecord) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!("Saved crosshair settings to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<PersistedRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: PersistedRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    pub fn record(&self) -> Option<&PersistedRecord> {
        self.record.as_ref()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedRecord>, ConfigError> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &PersistedRecord) -> Result<(), ConfigError> {
        self.record = Some(record.clone());
        Ok(())
    }
}

/// Load the stored record, treating any failure as "nothing stored".
pub fn load_or_none<S: SettingsStore + ?Sized>(store: &S) -> Option<PersistedRecord> {
    match store.load() {
        Ok(record) => record,
        Err(e) => {
            warn!("Failed to load settings: {e}");
            None
        }
    }
}

/// Pick the starting config: URL query first, then the store, then defaults.
pub fn resolve_initial<S: SettingsStore + ?Sized>(query: Option<&str>, store: &S) -> CrosshairConfig {
    if let Some(record) = query.and_then(PersistedRecord::from_query_string) {
        info!("Loaded crosshair settings from URL");
        return record.to_config();
    }
    if let Some(record) = load_or_none(store) {
        info!("Loaded crosshair settings from store");
        return record.to_config();
    }
    CrosshairConfig::default()
}
