/// Tool for listing habits
///
/// This module implements the habit_list MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analytics::partition_by_completion;
use crate::domain::{DomainError, Habit};
use crate::storage::HabitStorage;
use crate::store::{HabitError, HabitStore};

/// Parameters for listing habits
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListHabitsParams {
    /// all, pending or completed (default: all)
    pub filter: Option<String>,
}

/// Which habits a listing includes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Pending,
    Completed,
}

impl ListFilter {
    fn parse(raw: Option<&str>) -> Result<Self, HabitError> {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("all") => Ok(ListFilter::All),
            Some("pending") => Ok(ListFilter::Pending),
            Some("completed") => Ok(ListFilter::Completed),
            Some(other) => Err(DomainError::Validation {
                message: format!("Invalid filter '{}'. Valid options: all, pending, completed", other),
            }
            .into()),
        }
    }
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub pending: Vec<Habit>,
    pub completed: Vec<Habit>,
    pub message: String,
}

/// List habits from the provided store, pending first
pub fn list_habits<S: HabitStorage>(
    store: &HabitStore<S>,
    params: ListHabitsParams,
) -> Result<ListHabitsResponse, HabitError> {
    let filter = ListFilter::parse(params.filter.as_deref())?;
    let (pending, completed) = partition_by_completion(store.list());

    let pending: Vec<Habit> = match filter {
        ListFilter::All | ListFilter::Pending => pending.into_iter().cloned().collect(),
        ListFilter::Completed => Vec::new(),
    };
    let completed: Vec<Habit> = match filter {
        ListFilter::All | ListFilter::Completed => completed.into_iter().cloned().collect(),
        ListFilter::Pending => Vec::new(),
    };

    let message = render(&pending, &completed);

    Ok(ListHabitsResponse {
        pending,
        completed,
        message,
    })
}

fn render(pending: &[Habit], completed: &[Habit]) -> String {
    if pending.is_empty() && completed.is_empty() {
        return "No habits found. Create your first habit to get started!".to_string();
    }

    let mut sections = Vec::new();
    for (title, habits) in [("Pending", pending), ("Completed", completed)] {
        if habits.is_empty() {
            continue;
        }
        let lines = habits
            .iter()
            .map(|h| {
                format!(
                    "🎯 **{}** ({} | {}) 🔥 {} days\n   ID: {}{}",
                    h.name,
                    h.category.display_name(),
                    h.frequency.display_name(),
                    h.streak,
                    h.id,
                    h.description
                        .as_ref()
                        .map(|d| format!("\n   {}", d))
                        .unwrap_or_default()
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        sections.push(format!("📋 **{}** ({})\n\n{}", title, habits.len(), lines));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_habits;
    use crate::storage::MemoryStorage;

    fn seeded() -> HabitStore<MemoryStorage> {
        HabitStore::open(MemoryStorage::new(), default_habits())
    }

    #[test]
    fn test_list_splits_pending_and_completed() {
        let store = seeded();
        let response = list_habits(&store, ListHabitsParams::default()).unwrap();

        assert_eq!(response.pending.len(), 2);
        assert_eq!(response.completed.len(), 1);
        assert_eq!(response.completed[0].name, "Drink Water");
        assert!(response.message.contains("Morning Exercise"));
    }

    #[test]
    fn test_list_filters() {
        let store = seeded();

        let completed = list_habits(&store, ListHabitsParams { filter: Some("completed".to_string()) }).unwrap();
        assert!(completed.pending.is_empty());
        assert_eq!(completed.completed.len(), 1);

        let bogus = list_habits(&store, ListHabitsParams { filter: Some("archived".to_string()) });
        assert!(bogus.is_err());
    }

    #[test]
    fn test_list_empty_store() {
        let store = HabitStore::open(MemoryStorage::new(), Vec::new());
        let response = list_habits(&store, ListHabitsParams::default()).unwrap();
        assert!(response.message.starts_with("No habits found"));
    }
}
