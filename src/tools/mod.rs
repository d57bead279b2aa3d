/// MCP tools for habit management
///
/// This module contains all the MCP tools that external clients can call to
/// interact with the habit tracker. Each tool takes its parsed arguments and
/// the store, and returns a serializable response.

pub mod create;
pub mod delete;
pub mod list;
pub mod session;
pub mod stats;
pub mod toggle;
pub mod update;

// Re-export tool functions for easy access
pub use create::*;
pub use delete::*;
pub use list::*;
pub use stats::*;
pub use toggle::*;
pub use update::*;

use std::str::FromStr;

use crate::domain::{DomainError, HabitId};
use crate::store::HabitError;

/// Parse a habit id argument; a blank id is simply not found
pub(crate) fn parse_habit_id(raw: &str) -> Result<HabitId, HabitError> {
    let id = HabitId::from_string(raw);
    if id.as_str().is_empty() {
        return Err(HabitError::NotFound {
            habit_id: raw.to_string(),
        });
    }
    Ok(id)
}

/// Parse an optional enum argument, treating a blank string as absent
pub(crate) fn parse_optional<T>(raw: Option<&str>) -> Result<Option<T>, HabitError>
where
    T: FromStr<Err = DomainError>,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => Ok(Some(s.parse()?)),
        None => Ok(None),
    }
}
