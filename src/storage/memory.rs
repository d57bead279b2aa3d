/// In-process implementation of the habit storage interface
///
/// Keeps slots in a map guarded by a mutex. Useful for tests and for embedding
/// the tracker where nothing should touch the disk.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::{HabitStorage, StorageError};

/// Storage that forgets everything when dropped
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose `key` slot already holds `value`
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        storage
    }

    fn poisoned() -> StorageError {
        StorageError::Connection("Memory storage lock poisoned".to_string())
    }
}

impl HabitStorage for MemoryStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().map_err(|_| Self::poisoned())?;
        Ok(slots.get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| Self::poisoned())?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
