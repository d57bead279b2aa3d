/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like Category, Frequency, and the
/// habit ID type that are used by Habit and the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// Ids are opaque: new habits get a random UUID, but any stored string is
/// accepted as-is so collections written with other id schemes still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub String);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create a habit ID from a string (useful for tool arguments)
    pub fn from_string(s: &str) -> Self {
        Self(s.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categories for organizing habits into different life areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Exercise, diet, sleep
    Health,
    /// Work habits
    Productivity,
    /// Reading, studying, skill building
    Learning,
    /// Personal growth and self-care
    Personal,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Productivity,
        Category::Learning,
        Category::Personal,
    ];

    /// Lower-case key used in storage and tool arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Productivity => "productivity",
            Category::Learning => "learning",
            Category::Personal => "personal",
        }
    }

    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Productivity => "Productivity",
            Category::Learning => "Learning",
            Category::Personal => "Personal",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "health" => Ok(Category::Health),
            "productivity" => Ok(Category::Productivity),
            "learning" => Ok(Category::Learning),
            "personal" => Ok(Category::Personal),
            other => Err(DomainError::InvalidCategory(format!(
                "'{}'. Valid options: health, productivity, learning, personal",
                other
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a habit should be performed
///
/// Frequency only classifies a habit. There is no calendar model behind it,
/// so it has no effect on streaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Custom,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Custom => "Custom",
        }
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "custom" => Ok(Frequency::Custom),
            other => Err(DomainError::InvalidFrequency(format!(
                "'{}'. Valid options: daily, weekly, custom",
                other
            ))),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accent color shown next to a habit. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitColor {
    Purple,
    Teal,
    Amber,
    Pink,
    Slate,
}

impl HabitColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitColor::Purple => "purple",
            HabitColor::Teal => "teal",
            HabitColor::Amber => "amber",
            HabitColor::Pink => "pink",
            HabitColor::Slate => "slate",
        }
    }
}

impl FromStr for HabitColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "purple" => Ok(HabitColor::Purple),
            "teal" => Ok(HabitColor::Teal),
            "amber" => Ok(HabitColor::Amber),
            "pink" => Ok(HabitColor::Pink),
            "slate" => Ok(HabitColor::Slate),
            other => Err(DomainError::Validation {
                message: format!(
                    "Invalid color '{}'. Valid options: purple, teal, amber, pink, slate",
                    other
                ),
            }),
        }
    }
}
