/// Tool for habit statistics
///
/// This module implements the habit_stats MCP tool, combining the dashboard
/// summary with the per-habit breakdowns.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analytics::{AnalyticsEngine, StatisticsReport};
use crate::storage::HabitStorage;
use crate::store::{HabitError, HabitStore};

/// Parameters for the statistics tool
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct StatsParams {
    /// Include per-habit streaks and the frequency breakdown (default: true)
    pub detailed: Option<bool>,
}

/// Response from the statistics tool
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub report: StatisticsReport,
    pub message: String,
}

/// Compute statistics over the current collection
pub fn get_habit_stats<S: HabitStorage>(
    store: &HabitStore<S>,
    params: StatsParams,
) -> Result<StatsResponse, HabitError> {
    let report = AnalyticsEngine::new().report(store.list());
    let summary = &report.summary;

    let mut message = format!(
        "📊 **Today's Progress**: {}% ({} of {} habits completed)\n\
         🔥 **Highest Streak**: {} days\n\
         📈 **Weekly Average**: {:.1}/7\n\
         🏆 **Top Category**: {} ({} habits)",
        summary.completion_rate_percent,
        summary.completed_count,
        summary.total_count,
        summary.highest_streak,
        summary.weekly_average,
        summary
            .top_category
            .map(|c| c.display_name())
            .unwrap_or("None"),
        summary.top_category_count(),
    );

    if params.detailed.unwrap_or(true) && summary.total_count > 0 {
        let categories = summary
            .category_distribution
            .iter()
            .map(|(c, n)| format!("{}: {}", c.display_name(), n))
            .collect::<Vec<_>>()
            .join(", ");
        let frequencies = report
            .frequency_distribution
            .iter()
            .map(|(f, n)| format!("{}: {}", f.display_name(), n))
            .collect::<Vec<_>>()
            .join(", ");
        let streaks = report
            .streaks
            .iter()
            .map(|bar| format!("   {} - {} days", bar.name, bar.streak))
            .collect::<Vec<_>>()
            .join("\n");

        message.push_str(&format!(
            "\n\n**Categories**: {}\n**Frequency**: {}\n**Completion**: {} completed, {} pending\n**Streaks**:\n{}",
            categories, frequencies, summary.completed_count, report.pending_count, streaks
        ));
    }

    Ok(StatsResponse { report, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_habits;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_stats_over_seed() {
        let store = HabitStore::open(MemoryStorage::new(), default_habits());
        let response = get_habit_stats(&store, StatsParams::default()).unwrap();

        let summary = &response.report.summary;
        assert_eq!(summary.completion_rate_percent, 33);
        assert_eq!(summary.highest_streak, 7);
        assert_eq!(summary.top_category_label(), "health");
        assert!(response.message.contains("Health (2 habits)"));
        assert!(response.message.contains("**Streaks**"));
    }

    #[test]
    fn test_stats_on_empty_store() {
        let store = HabitStore::open(MemoryStorage::new(), Vec::new());
        let response = get_habit_stats(&store, StatsParams { detailed: Some(true) }).unwrap();

        assert!(response.message.contains("Top Category**: None"));
        assert!(!response.message.contains("**Streaks**"));
    }
}
