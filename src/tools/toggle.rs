/// Tool for marking habits done or not done
///
/// This module implements the habit_toggle MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::Habit;
use crate::storage::HabitStorage;
use crate::store::{HabitError, HabitStore};
use crate::tools::parse_habit_id;

/// Parameters for toggling a habit's completion
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ToggleHabitParams {
    /// ID of the habit to toggle
    pub habit_id: String,
}

/// Response from toggling a habit
#[derive(Debug, Serialize)]
pub struct ToggleHabitResponse {
    pub success: bool,
    pub habit: Habit,
    pub message: String,
}

/// Flip the completion state of a habit in the provided store
pub fn toggle_habit<S: HabitStorage>(
    store: &mut HabitStore<S>,
    params: ToggleHabitParams,
) -> Result<ToggleHabitResponse, HabitError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let habit = store.toggle_complete(&habit_id)?;

    let message = if habit.completed {
        format!("🎉 Completed '{}'! Streak: {} days", habit.name, habit.streak)
    } else {
        format!("↩️ Marked '{}' as not done. Streak: {} days", habit.name, habit.streak)
    };

    Ok(ToggleHabitResponse {
        success: true,
        habit,
        message,
    })
}
