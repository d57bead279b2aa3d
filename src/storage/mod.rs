/// Storage layer for persisting habit data
///
/// The whole habit collection lives in one durable key-value slot. Backends
/// only need to read and write raw text under a key; encoding, decoding and
/// the fall-back-to-defaults policy live in the provided `load`/`save`
/// methods of the `HabitStorage` trait.

pub mod memory;
pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use memory::*;
pub use sqlite::*;

use thiserror::Error;
use crate::domain::Habit;

/// Key under which the serialized collection is stored
pub const HABITS_KEY: &str = "habits";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the persistence interface for the habit collection
///
/// This lets the store run against SQLite, an in-memory slot, or any other
/// medium that can hold a string under a key.
pub trait HabitStorage {
    /// Read the raw value stored under `key`, if any
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing whatever was there
    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Load the stored collection
    ///
    /// Missing, unreadable or malformed content yields `defaults`. Problems are
    /// logged and never propagated, so the caller always gets a collection.
    fn load(&self, defaults: Vec<Habit>) -> Vec<Habit> {
        match self.load_stored() {
            Ok(Some(habits)) => habits,
            Ok(None) => defaults,
            Err(e) => {
                tracing::warn!("Failed to read stored habits, using defaults: {}", e);
                defaults
            }
        }
    }

    /// Decode the stored collection without substituting anything
    ///
    /// `Ok(None)` covers both a missing slot and malformed content (logged
    /// here). Only a failed read is an error.
    fn load_stored(&self) -> Result<Option<Vec<Habit>>, StorageError> {
        let Some(raw) = self.read_slot(HABITS_KEY)? else {
            tracing::debug!("No stored habits found");
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Habit>>(&raw) {
            Ok(habits) => {
                tracing::debug!("Loaded {} habits from storage", habits.len());
                Ok(Some(habits))
            }
            Err(e) => {
                tracing::warn!("Discarding malformed stored habits: {}", e);
                Ok(None)
            }
        }
    }

    /// Write the full collection, overwriting any previous snapshot
    fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(habits)?;
        self.write_slot(HABITS_KEY, &encoded)?;
        tracing::debug!("Saved {} habits", habits.len());
        Ok(())
    }
}

impl<S: HabitStorage + ?Sized> HabitStorage for Box<S> {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write_slot(key, value)
    }
}
