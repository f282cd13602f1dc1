use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::AppError;

/// Persistence slot for the whole snapshot: read once at startup, rewritten
/// in full after every mutation. Backends perform no schema validation.
pub trait KeyValueStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AppError>;
    fn save(&self, key: &str, payload: &str) -> Result<(), AppError>;
}

/// One `<dir>/<key>.json` file per slot. Writes go through a temp file and
/// rename, so a crash mid-write never leaves a truncated slot behind.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Ephemeral backend for tests. Clones share the same slots, so a second
/// store handle opened on a clone sees earlier writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.slots
            .lock()
            .map_err(|_| AppError::Internal("storage mutex poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
