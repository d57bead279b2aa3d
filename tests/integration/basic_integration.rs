/// Server-level integration tests
use habit_tracker::*;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_database_gets_seed() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let server = HabitTrackerServer::new(temp_file.path().to_path_buf(), true)
            .await
            .expect("Failed to create server");

        let names: Vec<&str> = server.store().list().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Morning Exercise", "Read a Book", "Drink Water"]);
    }

    #[tokio::test]
    async fn test_no_seed_starts_empty() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let server = HabitTrackerServer::new(temp_file.path().to_path_buf(), false)
            .await
            .expect("Failed to create server");

        assert!(server.store().list().is_empty());
    }

    #[tokio::test]
    async fn test_database_persistence() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let created = {
            let mut server = HabitTrackerServer::new(db_path.clone(), false)
                .await
                .expect("Failed to create first server");
            let habit = server
                .store_mut()
                .create(NewHabit::new("Exercise", Category::Health, Frequency::Daily))
                .expect("Failed to create habit");
            server.store_mut().toggle_complete(&habit.id).expect("Failed to toggle");
            habit
        };

        // Seeding must not override what is already stored
        let server = HabitTrackerServer::new(db_path, true)
            .await
            .expect("Failed to create second server");

        let habits = server.store().list();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id, created.id);
        assert!(habits[0].completed);
        assert_eq!(habits[0].streak, 1);
    }

    #[test]
    fn test_seed_is_written_on_first_open() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let first_ids: Vec<HabitId> = {
            let storage = SqliteStorage::new(db_path.clone()).expect("Failed to open storage");
            let store = HabitStore::open(storage, default_habits());
            store.list().iter().map(|h| h.id.clone()).collect()
        };

        // No defaults this time: everything must come from the file
        let storage = SqliteStorage::new(db_path).expect("Failed to reopen storage");
        let mut store = HabitStore::open(storage, Vec::new());
        let reopened_ids: Vec<HabitId> = store.list().iter().map(|h| h.id.clone()).collect();
        assert_eq!(reopened_ids, first_ids);

        let toggled = store.toggle_complete(&first_ids[0]).expect("Seed habit should be found");
        assert!(toggled.completed);
        assert_eq!(toggled.streak, 4);
    }

    #[tokio::test]
    async fn test_mcp_session_over_streams() {
        let storage = SqliteStorage::open_in_memory().expect("Failed to open storage");
        let mut server = McpServer::new(HabitTrackerServer::with_storage(storage, Vec::new()));

        let input = [
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call",
                   "params": {"name": "habit_create", "arguments": {"name": "Read", "category": "learning"}}}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
                   "params": {"name": "habit_stats", "arguments": {}}}),
        ]
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n");

        let mut output: Vec<u8> = Vec::new();
        server
            .serve(input.as_bytes(), &mut output)
            .await
            .expect("Server loop failed");

        let messages: Vec<Value> = String::from_utf8(output)
            .expect("Output is not UTF-8")
            .lines()
            .map(|l| serde_json::from_str(l).expect("Output line is not JSON"))
            .collect();

        // initialize, notification + create response, stats response
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0]["id"], 1);
        assert_eq!(messages[1]["method"], "notifications/message");
        assert_eq!(messages[2]["id"], 2);
        assert!(messages[3]["result"]["content"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .contains("Learning (1 habits)"));
        assert!(server.is_initialized());
        assert_eq!(server.habit_tracker().store().list().len(), 1);
    }

    #[test]
    fn test_blocking_runtime_helper() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let server = tokio_test::block_on(HabitTrackerServer::new(temp_file.path().to_path_buf(), true));
        assert!(server.is_ok());
    }
}
