/// Domain module containing core business logic and data types
///
/// This module defines the Habit entity, its classification enums, the
/// streak toggle rule and the starter collection.

pub mod habit;
pub mod seed;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use seed::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),
}
