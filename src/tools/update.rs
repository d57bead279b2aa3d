/// Tool for updating existing habits
///
/// This module implements the habit_update MCP tool to modify
/// existing habit properties like name, category and frequency.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Frequency, Habit, HabitColor};
use crate::storage::HabitStorage;
use crate::store::{HabitError, HabitStore};
use crate::tools::{parse_habit_id, parse_optional};

/// Parameters for updating an existing habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateHabitParams {
    /// ID of the habit to update
    pub habit_id: String,
    pub name: Option<String>,
    /// New description; an empty string clears it
    pub description: Option<String>,
    pub category: Option<String>,
    pub frequency: Option<String>,
    /// New color; an empty string clears it
    pub color: Option<String>,
}

/// Response from updating a habit
#[derive(Debug, Serialize)]
pub struct UpdateHabitResponse {
    pub success: bool,
    pub habit: Habit,
    pub message: String,
}

/// Update an existing habit in the provided store
pub fn update_habit<S: HabitStorage>(
    store: &mut HabitStore<S>,
    params: UpdateHabitParams,
) -> Result<UpdateHabitResponse, HabitError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let mut edited = store.get(&habit_id)?.clone();

    // Parse everything before touching the copy so bad input changes nothing
    let category = parse_optional::<Category>(params.category.as_deref())?;
    let frequency = parse_optional::<Frequency>(params.frequency.as_deref())?;
    let color = match params.color.as_deref().map(str::trim) {
        Some("") => Some(None),
        Some(raw) => Some(Some(raw.parse::<HabitColor>()?)),
        None => None,
    };

    if let Some(name) = params.name {
        edited.name = name;
    }
    if let Some(description) = params.description {
        edited.description = Some(description).filter(|d| !d.trim().is_empty());
    }
    if let Some(category) = category {
        edited.category = category;
    }
    if let Some(frequency) = frequency {
        edited.frequency = frequency;
    }
    if let Some(color) = color {
        edited.color = color;
    }

    let habit = store.update(edited)?;

    Ok(UpdateHabitResponse {
        success: true,
        message: format!("✅ Updated habit '{}'", habit.name),
        habit,
    })
}
