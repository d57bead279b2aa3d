/// The authoritative habit collection
///
/// `HabitStore` owns the habits for one session. Every successful mutation is
/// followed immediately by a full-collection write through the injected
/// storage. Failed operations leave both the collection and storage untouched.

use thiserror::Error;

use crate::domain::{DomainError, Habit, HabitId, NewHabit};
use crate::notify::{HabitEvent, HabitObserver};
use crate::storage::HabitStorage;

/// Errors surfaced to callers of the store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HabitError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Habit not found: {habit_id}")]
    NotFound { habit_id: String },
}

impl HabitError {
    fn not_found(id: &HabitId) -> Self {
        HabitError::NotFound { habit_id: id.to_string() }
    }
}

/// In-memory habit collection backed by a persistence adapter
pub struct HabitStore<S: HabitStorage> {
    storage: S,
    habits: Vec<Habit>,
    observers: Vec<Box<dyn HabitObserver>>,
}

impl<S: HabitStorage> HabitStore<S> {
    /// Open a store over `storage`, starting from `defaults` when it holds
    /// nothing usable
    ///
    /// Defaults that replace missing or malformed content are written back
    /// straight away so their ids survive a reopen. After a failed read the
    /// stored copy is left alone.
    pub fn open(storage: S, defaults: Vec<Habit>) -> Self {
        let habits = match storage.load_stored() {
            Ok(Some(habits)) => habits,
            Ok(None) => {
                if !defaults.is_empty() {
                    if let Err(e) = storage.save(&defaults) {
                        tracing::error!("Failed to persist {} default habits: {}", defaults.len(), e);
                    }
                }
                defaults
            }
            Err(e) => {
                tracing::warn!("Failed to read stored habits, using defaults: {}", e);
                defaults
            }
        };
        tracing::info!("Habit store opened with {} habits", habits.len());

        Self {
            storage,
            habits,
            observers: Vec::new(),
        }
    }

    /// Register an observer for store events
    pub fn subscribe(&mut self, observer: Box<dyn HabitObserver>) {
        self.observers.push(observer);
    }

    /// All habits in insertion order
    pub fn list(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &HabitId) -> Result<&Habit, HabitError> {
        self.habits
            .iter()
            .find(|h| &h.id == id)
            .ok_or_else(|| HabitError::not_found(id))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Add a new habit at the end of the collection
    pub fn create(&mut self, input: NewHabit) -> Result<Habit, HabitError> {
        let habit = Habit::new(input)?;

        tracing::debug!("Created habit: {} ({})", habit.name, habit.id);
        self.habits.push(habit.clone());
        self.commit(HabitEvent::Created(habit.clone()));

        Ok(habit)
    }

    /// Replace the editable fields of the habit sharing `habit.id`
    pub fn update(&mut self, habit: Habit) -> Result<Habit, HabitError> {
        let index = self.position(&habit.id)?;
        self.habits[index].apply_changes(habit)?;

        let updated = self.habits[index].clone();
        tracing::debug!("Updated habit: {} ({})", updated.name, updated.id);
        self.commit(HabitEvent::Updated(updated.clone()));

        Ok(updated)
    }

    /// Remove a habit permanently
    pub fn delete(&mut self, id: &HabitId) -> Result<(), HabitError> {
        let index = self.position(id)?;
        let removed = self.habits.remove(index);

        tracing::debug!("Deleted habit: {} ({})", removed.name, removed.id);
        self.commit(HabitEvent::Deleted(removed));

        Ok(())
    }

    /// Flip a habit's completion flag, adjusting its streak
    pub fn toggle_complete(&mut self, id: &HabitId) -> Result<Habit, HabitError> {
        let index = self.position(id)?;
        let outcome = self.habits[index].toggle_completion();

        let habit = self.habits[index].clone();
        tracing::debug!(
            "Toggled habit {} ({:?}): completed={}, streak={}",
            habit.id, outcome, habit.completed, habit.streak
        );
        self.commit(HabitEvent::Toggled { habit: habit.clone(), outcome });

        Ok(habit)
    }

    fn position(&self, id: &HabitId) -> Result<usize, HabitError> {
        self.habits
            .iter()
            .position(|h| &h.id == id)
            .ok_or_else(|| HabitError::not_found(id))
    }

    /// Persist the current snapshot and tell observers what happened
    ///
    /// A failed write is logged and otherwise ignored: the in-memory change
    /// stands and durable storage lags until the next successful write.
    fn commit(&self, event: HabitEvent) {
        if let Err(e) = self.storage.save(&self.habits) {
            tracing::error!("Failed to persist {} habits: {}", self.habits.len(), e);
        }

        for observer in &self.observers {
            observer.on_event(&event);
        }
    }
}
