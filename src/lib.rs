/// Public library interface for the Habit Tracker
///
/// The core is `HabitStore` over an injected `HabitStorage`, with statistics
/// from `AnalyticsEngine`. `HabitTrackerServer` wires the core to SQLite, a
/// session and notifications, and serves it over MCP.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod analytics;
mod notify;
mod session;
mod store;
mod tools;
mod mcp;

// Re-export public modules and types
pub use domain::*;
pub use storage::{HabitStorage, MemoryStorage, SqliteStorage, StorageError, HABITS_KEY};
pub use analytics::{partition_by_completion, AnalyticsEngine, HabitStats, StatisticsReport, StreakBar};
pub use notify::{
    CollectingNotifier, HabitEvent, HabitObserver, Notification, Notifier, NotifyingObserver,
    Severity, TracingNotifier,
};
pub use session::{Session, User};
pub use store::{HabitError, HabitStore};
pub use mcp::McpServer;

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Habit tracker session served over MCP
///
/// Owns the habit store, the signed-in user and the notifications raised by
/// store events that have not been delivered yet.
pub struct HabitTrackerServer {
    store: HabitStore<SqliteStorage>,
    session: Session,
    notifications: Arc<CollectingNotifier>,
}

impl HabitTrackerServer {
    /// Create a new habit tracker server with the specified database path
    ///
    /// This will initialize the SQLite database with the required schema
    /// if it doesn't already exist. With `seed` set, an empty or unreadable
    /// database starts out with the demo habits.
    pub async fn new(db_path: PathBuf, seed: bool) -> Result<Self, ServerError> {
        tracing::info!("Initializing Habit Tracker server with database: {:?}", db_path);

        let storage = SqliteStorage::new(db_path)?;
        let defaults = if seed { default_habits() } else { Vec::new() };

        Ok(Self::with_storage(storage, defaults))
    }

    /// Build a server over an already opened storage
    pub fn with_storage(storage: SqliteStorage, defaults: Vec<Habit>) -> Self {
        let notifications = Arc::new(CollectingNotifier::new());

        let mut store = HabitStore::open(storage, defaults);
        store.subscribe(Box::new(NotifyingObserver::new(TracingNotifier)));
        store.subscribe(Box::new(NotifyingObserver::new(Arc::clone(&notifications))));

        Self {
            store,
            session: Session::new(),
            notifications,
        }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until stdin is closed or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Server started successfully, found {} existing habits", self.store.list().len());

        let mut mcp_server = McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    pub fn store(&self) -> &HabitStore<SqliteStorage> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut HabitStore<SqliteStorage> {
        &mut self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Take the notifications raised since the last call
    pub fn drain_notifications(&self) -> Vec<Notification> {
        self.notifications.drain()
    }
}
