/// Streak bookkeeping for the completion toggle
///
/// A streak counts consecutive completions. It moves only when a habit's
/// completion flag is flipped: completing adds one, un-completing takes one
/// away but never goes below zero.

use crate::domain::Habit;

/// Which way a toggle moved a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Completed,
    Reopened,
}

impl Habit {
    /// Flip the completion flag and adjust the streak
    pub fn toggle_completion(&mut self) -> ToggleOutcome {
        if self.completed {
            self.completed = false;
            self.streak = self.streak.saturating_sub(1);
            ToggleOutcome::Reopened
        } else {
            self.completed = true;
            self.streak = self.streak.saturating_add(1);
            ToggleOutcome::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Frequency, NewHabit};

    fn habit_with(streak: u32, completed: bool) -> Habit {
        let mut habit = Habit::new(NewHabit::new("Meditate", Category::Personal, Frequency::Daily)).unwrap();
        habit.streak = streak;
        habit.completed = completed;
        habit
    }

    #[test]
    fn test_complete_then_reopen_restores_state() {
        for s in [1, 2, 7, 100] {
            let mut habit = habit_with(s, false);

            assert_eq!(habit.toggle_completion(), ToggleOutcome::Completed);
            assert!(habit.completed);
            assert_eq!(habit.streak, s + 1);

            assert_eq!(habit.toggle_completion(), ToggleOutcome::Reopened);
            assert!(!habit.completed);
            assert_eq!(habit.streak, s);
        }
    }

    #[test]
    fn test_streak_starts_from_zero() {
        let mut habit = habit_with(0, false);

        habit.toggle_completion();
        assert!(habit.completed);
        assert_eq!(habit.streak, 1);

        habit.toggle_completion();
        assert!(!habit.completed);
        assert_eq!(habit.streak, 0);
    }

    #[test]
    fn test_reopen_clamps_at_zero() {
        // Loaded data can be completed with a zero streak
        let mut habit = habit_with(0, true);

        assert_eq!(habit.toggle_completion(), ToggleOutcome::Reopened);
        assert!(!habit.completed);
        assert_eq!(habit.streak, 0);
    }
}
