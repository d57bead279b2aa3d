/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a user's habit
/// they want to track, along with the creation input and validation rules.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{Category, Frequency, HabitColor, HabitId, DomainError};

/// A habit represents something the user wants to do regularly
///
/// This is the only entity in the system. Besides its descriptive fields it
/// carries the current-period completion flag and the streak counter that the
/// toggle operation maintains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Optional detailed description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category for organization (health, productivity, etc.)
    pub category: Category,
    /// How often this habit should be performed
    pub frequency: Frequency,
    /// Consecutive completions, adjusted only by toggling
    pub streak: u32,
    /// Whether the habit is done for the current period
    pub completed: bool,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// Optional accent color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HabitColor>,
}

/// Caller-supplied fields for a new habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHabit {
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub frequency: Frequency,
    pub color: Option<HabitColor>,
}

impl NewHabit {
    /// Input with just the required fields
    pub fn new(name: impl Into<String>, category: Category, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            description: None,
            category,
            frequency,
            color: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: HabitColor) -> Self {
        self.color = Some(color);
        self
    }
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// Assigns a fresh id and creation time; the streak starts at zero and the
    /// habit starts out not completed.
    pub fn new(input: NewHabit) -> Result<Self, DomainError> {
        Self::validate_name(&input.name)?;

        Ok(Self {
            id: HabitId::new(),
            name: input.name,
            description: input.description,
            category: input.category,
            frequency: input.frequency,
            streak: 0,
            completed: false,
            created_at: Utc::now(),
            color: input.color,
        })
    }

    /// Copy the user-editable fields of `changes` onto this habit
    ///
    /// Identity, creation time and the completion state stay as they are; those
    /// only change through creation and toggling.
    pub fn apply_changes(&mut self, changes: Habit) -> Result<(), DomainError> {
        Self::validate_name(&changes.name)?;

        self.name = changes.name;
        self.description = changes.description;
        self.category = changes.category;
        self.frequency = changes.frequency;
        self.color = changes.color;

        Ok(())
    }

    /// Validate habit name according to business rules
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }
        Ok(())
    }
}
