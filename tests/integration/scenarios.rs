/// End-to-end habit scenarios against the public store API
use habit_tracker::*;
use std::collections::HashSet;
use tempfile::NamedTempFile;

fn sqlite_store() -> (NamedTempFile, HabitStore<SqliteStorage>) {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let storage = SqliteStorage::new(temp_file.path().to_path_buf()).expect("Failed to open storage");
    (temp_file, HabitStore::open(storage, Vec::new()))
}

#[test]
fn test_create_toggle_toggle_delete() {
    let (_file, mut store) = sqlite_store();

    // Scenario A
    let habit = store
        .create(NewHabit::new("Exercise", Category::Health, Frequency::Daily))
        .unwrap();
    assert_eq!(habit.streak, 0);
    assert!(!habit.completed);

    // Scenario B
    let habit = store.toggle_complete(&habit.id).unwrap();
    assert!(habit.completed);
    assert_eq!(habit.streak, 1);

    // Scenario C
    let habit = store.toggle_complete(&habit.id).unwrap();
    assert!(!habit.completed);
    assert_eq!(habit.streak, 0);

    // Scenario D
    store.delete(&habit.id).unwrap();
    assert!(store.list().iter().all(|h| h.id != habit.id));
    assert!(matches!(store.delete(&habit.id), Err(HabitError::NotFound { .. })));
}

#[test]
fn test_stats_over_mixed_streaks() {
    // Scenario E
    let mut habits = Vec::new();
    for (streak, completed) in [(3, true), (5, false), (0, true)] {
        let mut habit = Habit::new(NewHabit::new("Habit", Category::Personal, Frequency::Daily)).unwrap();
        habit.streak = streak;
        habit.completed = completed;
        habits.push(habit);
    }

    let stats = AnalyticsEngine::new().summarize(&habits);
    assert_eq!(stats.completion_rate_percent, 67);
    assert_eq!(stats.highest_streak, 5);
}

#[test]
fn test_ids_unique_across_create_and_delete() {
    let (_file, mut store) = sqlite_store();

    for round in 0..5 {
        let mut ids = Vec::new();
        for i in 0..4 {
            let habit = store
                .create(NewHabit::new(format!("Habit {round}-{i}"), Category::Learning, Frequency::Weekly))
                .unwrap();
            ids.push(habit.id);
        }
        store.delete(&ids[round % 4]).unwrap();

        let unique: HashSet<_> = store.list().iter().map(|h| &h.id).collect();
        assert_eq!(unique.len(), store.list().len());
    }
}

#[test]
fn test_toggle_is_self_inverse_for_positive_streaks() {
    for s in [1u32, 4, 30] {
        let mut habit = Habit::new(NewHabit::new("Read", Category::Learning, Frequency::Daily)).unwrap();
        habit.streak = s;
        let storage = MemoryStorage::new();
        storage.save(&[habit.clone()]).unwrap();
        let mut store = HabitStore::open(storage, Vec::new());

        store.toggle_complete(&habit.id).unwrap();
        let restored = store.toggle_complete(&habit.id).unwrap();

        assert!(!restored.completed);
        assert_eq!(restored.streak, s);
        assert_eq!(store.storage().load(Vec::new()), vec![restored]);
    }
}

#[test]
fn test_storage_round_trip_is_structurally_equal() {
    let (_file, mut store) = sqlite_store();
    store
        .create(NewHabit::new("Walk", Category::Health, Frequency::Daily).with_color(HabitColor::Amber))
        .unwrap();
    store
        .create(NewHabit::new("Plan", Category::Productivity, Frequency::Custom).with_description("Weekly review"))
        .unwrap();
    let snapshot = store.list().to_vec();

    let storage = store.storage();
    let loaded = storage.load(Vec::new());
    assert_eq!(loaded, snapshot);

    storage.save(&loaded).unwrap();
    let first: serde_json::Value =
        serde_json::from_str(&storage.read_slot(HABITS_KEY).unwrap().unwrap()).unwrap();
    storage.save(&storage.load(Vec::new())).unwrap();
    let second: serde_json::Value =
        serde_json::from_str(&storage.read_slot(HABITS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_notifications_follow_store_events() {
    let notifier = std::sync::Arc::new(CollectingNotifier::new());
    let mut store = HabitStore::open(MemoryStorage::new(), Vec::new());
    store.subscribe(Box::new(NotifyingObserver::new(std::sync::Arc::clone(&notifier))));

    let habit = store.create(NewHabit::new("Stretch", Category::Health, Frequency::Daily)).unwrap();
    let mut edited = habit.clone();
    edited.name = "Morning Stretch".to_string();
    store.update(edited).unwrap();
    store.delete(&habit.id).unwrap();

    let titles: Vec<String> = notifier.drain().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, ["Habit Added", "Habit Updated", "Habit Deleted"]);
}
