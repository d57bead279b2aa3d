/// Tool for creating new habits
///
/// This module implements the habit_create MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Frequency, Habit, NewHabit};
use crate::storage::HabitStorage;
use crate::store::{HabitError, HabitStore};
use crate::tools::parse_optional;

/// Parameters for creating a new habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateHabitParams {
    /// Name of the habit
    pub name: String,
    /// Optional longer description
    pub description: Option<String>,
    /// health, productivity, learning or personal (default: productivity)
    pub category: Option<String>,
    /// daily, weekly or custom (default: daily)
    pub frequency: Option<String>,
    /// purple, teal, amber, pink or slate (optional)
    pub color: Option<String>,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub success: bool,
    pub habit: Habit,
    pub message: String,
}

/// Create a new habit in the provided store
pub fn create_habit<S: HabitStorage>(
    store: &mut HabitStore<S>,
    params: CreateHabitParams,
) -> Result<CreateHabitResponse, HabitError> {
    let category = parse_optional::<Category>(params.category.as_deref())?
        .unwrap_or(Category::Productivity);
    let frequency = parse_optional::<Frequency>(params.frequency.as_deref())?
        .unwrap_or(Frequency::Daily);

    let mut input = NewHabit::new(params.name, category, frequency);
    input.description = params.description.filter(|d| !d.trim().is_empty());
    input.color = parse_optional(params.color.as_deref())?;

    let habit = store.create(input)?;

    Ok(CreateHabitResponse {
        success: true,
        message: format!("✅ Created habit '{}'! Ready to start your streak!", habit.name),
        habit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HabitColor;
    use crate::storage::MemoryStorage;

    fn params(name: &str) -> CreateHabitParams {
        CreateHabitParams {
            name: name.to_string(),
            description: None,
            category: None,
            frequency: None,
            color: None,
        }
    }

    #[test]
    fn test_create_with_defaults() {
        let mut store = HabitStore::open(MemoryStorage::new(), Vec::new());

        let response = create_habit(&mut store, params("Plan the day")).unwrap();

        assert!(response.success);
        assert_eq!(response.habit.category, Category::Productivity);
        assert_eq!(response.habit.frequency, Frequency::Daily);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_create_parses_arguments() {
        let mut store = HabitStore::open(MemoryStorage::new(), Vec::new());
        let mut p = params("Exercise");
        p.category = Some("Health".to_string());
        p.frequency = Some("weekly".to_string());
        p.color = Some("teal".to_string());
        p.description = Some("  ".to_string());

        let habit = create_habit(&mut store, p).unwrap().habit;

        assert_eq!(habit.category, Category::Health);
        assert_eq!(habit.frequency, Frequency::Weekly);
        assert_eq!(habit.color, Some(HabitColor::Teal));
        assert!(habit.description.is_none());
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let mut store = HabitStore::open(MemoryStorage::new(), Vec::new());

        let mut bad_category = params("Exercise");
        bad_category.category = Some("social".to_string());
        assert!(matches!(create_habit(&mut store, bad_category), Err(HabitError::Validation(_))));

        assert!(create_habit(&mut store, params("")).is_err());
        assert!(store.list().is_empty());
    }
}
