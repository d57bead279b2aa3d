/// Basic unit tests to verify core functionality through the public API
use habit_tracker::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new(
            NewHabit::new("Test Habit", Category::Health, Frequency::Daily).with_description("A test habit"),
        )
        .expect("Valid habit rejected");

        assert_eq!(habit.name, "Test Habit");
        assert_eq!(habit.description.as_deref(), Some("A test habit"));
        assert_eq!(habit.streak, 0);
        assert!(!habit.completed);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("productivity".parse::<Category>(), Ok(Category::Productivity));
        assert_eq!("custom".parse::<Frequency>(), Ok(Frequency::Custom));
        assert_eq!("pink".parse::<HabitColor>(), Ok(HabitColor::Pink));
        assert!(matches!("hourly".parse::<Frequency>(), Err(DomainError::InvalidFrequency(_))));
    }

    #[test]
    fn test_completion_rate_examples() {
        let engine = AnalyticsEngine::new();
        assert_eq!(engine.summarize(&[]).completion_rate_percent, 0);

        let mut habits = default_habits();
        for h in habits.iter_mut() {
            h.completed = false;
        }
        habits[1].completed = true;
        assert_eq!(engine.summarize(&habits).completion_rate_percent, 33);
    }

    #[test]
    fn test_top_category_tie_break() {
        let habits: Vec<Habit> = [Category::Health, Category::Learning, Category::Health]
            .into_iter()
            .map(|c| Habit::new(NewHabit::new("Habit", c, Frequency::Daily)).unwrap())
            .collect();

        let stats = AnalyticsEngine::new().summarize(&habits);
        assert_eq!(
            stats.category_distribution,
            vec![(Category::Health, 2), (Category::Learning, 1)]
        );
        assert_eq!(stats.top_category_label(), "health");
    }

    #[test]
    fn test_zero_floor() {
        let mut store = HabitStore::open(MemoryStorage::new(), Vec::new());
        let habit = store
            .create(NewHabit::new("Floss", Category::Health, Frequency::Daily))
            .unwrap();

        let once = store.toggle_complete(&habit.id).unwrap();
        assert_eq!((once.completed, once.streak), (true, 1));

        let twice = store.toggle_complete(&habit.id).unwrap();
        assert_eq!((twice.completed, twice.streak), (false, 0));
    }

    #[test]
    fn test_partition_keeps_order() {
        let habits = default_habits();
        let (pending, completed) = partition_by_completion(&habits);

        assert_eq!(pending.iter().map(|h| h.name.as_str()).collect::<Vec<_>>(), ["Morning Exercise", "Read a Book"]);
        assert_eq!(completed[0].name, "Drink Water");
    }

    #[test]
    fn test_session_defaults_to_signed_out() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }
}
