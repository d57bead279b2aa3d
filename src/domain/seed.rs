/// Starter habits used when nothing valid has been stored yet

use crate::domain::{Category, Frequency, Habit, HabitId, NewHabit};

/// The demo collection a fresh tracker starts with
///
/// Seed ids are fixed ("1", "2", "3") so every copy of the seed agrees.
pub fn default_habits() -> Vec<Habit> {
    [
        (
            NewHabit::new("Morning Exercise", Category::Health, Frequency::Daily)
                .with_description("30 minutes of cardio or strength training"),
            3,
            false,
        ),
        (
            NewHabit::new("Read a Book", Category::Learning, Frequency::Daily)
                .with_description("Read at least 20 pages"),
            5,
            false,
        ),
        (
            NewHabit::new("Drink Water", Category::Health, Frequency::Daily)
                .with_description("Drink 8 glasses of water throughout the day"),
            7,
            true,
        ),
    ]
    .into_iter()
    .zip(1..)
    .filter_map(|((input, streak, completed), n)| {
        Habit::new(input).ok().map(|mut habit| {
            habit.id = HabitId::from_string(&n.to_string());
            habit.streak = streak;
            habit.completed = completed;
            habit
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_contents() {
        let habits = default_habits();

        assert_eq!(habits.len(), 3);
        assert_eq!(habits[0].name, "Morning Exercise");
        assert_eq!(habits[1].category, Category::Learning);
        assert_eq!(habits[2].streak, 7);
        assert!(habits[2].completed);
        assert!(habits.iter().all(|h| h.description.is_some()));

        let ids: Vec<&str> = habits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(default_habits()[0].id, habits[0].id);
    }
}
