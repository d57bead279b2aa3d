/// Store events and user-facing notifications
///
/// The store reports what it changed to any registered `HabitObserver`. It
/// never talks to a notification surface directly; `NotifyingObserver` is the
/// bridge that turns events into confirmations for a `Notifier`.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::domain::{Habit, ToggleOutcome};

/// Something the store did to the collection
#[derive(Debug, Clone, PartialEq)]
pub enum HabitEvent {
    Created(Habit),
    Updated(Habit),
    Deleted(Habit),
    Toggled { habit: Habit, outcome: ToggleOutcome },
}

/// Receives store events after each successful mutation
pub trait HabitObserver {
    fn on_event(&self, event: &HabitEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A confirmation or alert meant for the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    /// The confirmation shown for a store event
    pub fn for_event(event: &HabitEvent) -> Self {
        match event {
            HabitEvent::Created(habit) => Self::new(
                "Habit Added",
                format!("\"{}\" has been added to your habits.", habit.name),
                Severity::Success,
            ),
            HabitEvent::Updated(habit) => Self::new(
                "Habit Updated",
                format!("\"{}\" has been updated.", habit.name),
                Severity::Success,
            ),
            HabitEvent::Deleted(habit) => Self::new(
                "Habit Deleted",
                format!("\"{}\" has been removed from your habits.", habit.name),
                Severity::Info,
            ),
            HabitEvent::Toggled { habit, outcome: ToggleOutcome::Completed } => Self::new(
                "Habit Completed",
                format!("\"{}\" is done. Streak: {}.", habit.name, habit.streak),
                Severity::Success,
            ),
            HabitEvent::Toggled { habit, outcome: ToggleOutcome::Reopened } => Self::new(
                "Habit Reopened",
                format!("\"{}\" is marked as not done. Streak: {}.", habit.name, habit.streak),
                Severity::Info,
            ),
        }
    }
}

/// A surface that can show notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Writes notifications to the log
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => tracing::error!("{}: {}", notification.title, notification.message),
            Severity::Warning => tracing::warn!("{}: {}", notification.title, notification.message),
            Severity::Info | Severity::Success => {
                tracing::info!("{}: {}", notification.title, notification.message)
            }
        }
    }
}

/// Buffers notifications until someone drains them
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    pending: Mutex<Vec<Notification>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every notification collected so far
    pub fn drain(&self) -> Vec<Notification> {
        match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(e) => {
                tracing::warn!("Notification queue unavailable, nothing to drain: {}", e);
                Vec::new()
            }
        }
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notification: Notification) {
        match self.pending.lock() {
            Ok(mut pending) => pending.push(notification),
            Err(e) => tracing::warn!("Dropping notification '{}': {}", notification.title, e),
        }
    }
}

/// Observer that forwards every store event to a notifier
pub struct NotifyingObserver<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> NotifyingObserver<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }
}

impl<N: Notifier> HabitObserver for NotifyingObserver<N> {
    fn on_event(&self, event: &HabitEvent) {
        self.notifier.notify(Notification::for_event(event));
    }
}
