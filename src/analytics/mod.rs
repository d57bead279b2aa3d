/// Analytics engine for aggregate habit statistics
///
/// Everything here is a pure function of a habit snapshot. Nothing is cached
/// and nothing is written back.

use serde::Serialize;

use crate::domain::{Category, Frequency, Habit};

/// Longest habit name shown untruncated in streak charts
const CHART_NAME_LIMIT: usize = 15;

/// Dashboard summary of a habit collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitStats {
    pub total_count: usize,
    pub completed_count: usize,
    pub completion_rate_percent: u32,
    pub highest_streak: u32,
    /// Habit count per category, in the order categories first appear
    pub category_distribution: Vec<(Category, usize)>,
    pub top_category: Option<Category>,
    /// Completion rate scaled to a seven-day week, one decimal place
    pub weekly_average: f64,
}

impl HabitStats {
    /// Top category name, or "none" for an empty collection
    pub fn top_category_label(&self) -> &'static str {
        self.top_category.map(|c| c.as_str()).unwrap_or("none")
    }

    /// Number of habits in the top category
    pub fn top_category_count(&self) -> usize {
        self.top_category
            .and_then(|top| {
                self.category_distribution
                    .iter()
                    .find(|(category, _)| *category == top)
                    .map(|(_, count)| *count)
            })
            .unwrap_or(0)
    }
}

/// One bar of the per-habit streak chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreakBar {
    pub name: String,
    pub streak: u32,
}

/// Everything the statistics page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub summary: HabitStats,
    pub frequency_distribution: Vec<(Frequency, usize)>,
    pub pending_count: usize,
    pub streaks: Vec<StreakBar>,
}

/// Analytics engine for processing habit data
#[derive(Debug, Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the dashboard summary
    pub fn summarize(&self, habits: &[Habit]) -> HabitStats {
        let total_count = habits.len();
        let completed_count = habits.iter().filter(|h| h.completed).count();

        let completion_rate_percent = if total_count == 0 {
            0
        } else {
            (completed_count as f64 / total_count as f64 * 100.0).round() as u32
        };

        let highest_streak = habits.iter().map(|h| h.streak).max().unwrap_or(0);

        let category_distribution = count_in_order(habits.iter().map(|h| h.category));
        let top_category = top_entry(&category_distribution);

        let weekly_average = if total_count == 0 {
            0.0
        } else {
            round_to_tenth(completion_rate_percent as f64 / 100.0 * 7.0)
        };

        HabitStats {
            total_count,
            completed_count,
            completion_rate_percent,
            highest_streak,
            category_distribution,
            top_category,
            weekly_average,
        }
    }

    /// Compute the full statistics page data
    pub fn report(&self, habits: &[Habit]) -> StatisticsReport {
        let summary = self.summarize(habits);
        let pending_count = summary.total_count - summary.completed_count;

        StatisticsReport {
            frequency_distribution: count_in_order(habits.iter().map(|h| h.frequency)),
            pending_count,
            streaks: habits
                .iter()
                .map(|h| StreakBar {
                    name: chart_label(&h.name),
                    streak: h.streak,
                })
                .collect(),
            summary,
        }
    }
}

/// Split a snapshot into (pending, completed), each in original order
pub fn partition_by_completion(habits: &[Habit]) -> (Vec<&Habit>, Vec<&Habit>) {
    habits.iter().partition(|h| !h.completed)
}

/// Count occurrences, keeping keys in first-seen order
fn count_in_order<K: PartialEq + Copy>(keys: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

/// Highest count wins; on a tie the earlier entry stays
fn top_entry<K: Copy>(counts: &[(K, usize)]) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for &(key, count) in counts {
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((key, count)),
        }
    }
    best.map(|(key, _)| key)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn chart_label(name: &str) -> String {
    if name.chars().count() > CHART_NAME_LIMIT {
        let head: String = name.chars().take(CHART_NAME_LIMIT).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}
