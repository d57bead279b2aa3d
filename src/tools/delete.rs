/// Tool for deleting habits
///
/// This module implements the habit_delete MCP tool. Deletion is permanent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::storage::HabitStorage;
use crate::store::{HabitError, HabitStore};
use crate::tools::parse_habit_id;

/// Parameters for deleting a habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteHabitParams {
    /// ID of the habit to delete
    pub habit_id: String,
}

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub success: bool,
    pub message: String,
}

/// Delete a habit from the provided store
pub fn delete_habit<S: HabitStorage>(
    store: &mut HabitStore<S>,
    params: DeleteHabitParams,
) -> Result<DeleteHabitResponse, HabitError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let name = store.get(&habit_id)?.name.clone();

    store.delete(&habit_id)?;

    Ok(DeleteHabitResponse {
        success: true,
        message: format!("🗑️ Deleted habit '{}'", name),
    })
}
