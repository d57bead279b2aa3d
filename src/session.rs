/// Signed-in user for one server session
///
/// Held by the outer server layer and passed to whatever needs it. The habit
/// store never looks at it, and nothing here restricts access.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in, replacing any previous user
    pub fn login(&mut self, email: &str, name: &str) -> Result<&User, DomainError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::Validation {
                message: "Email cannot be empty".to_string(),
            });
        }

        let user = User {
            email: email.to_string(),
            name: name.trim().to_string(),
        };
        tracing::info!("User signed in: {}", user.email);

        Ok(self.user.insert(user))
    }

    /// Sign out, returning who was signed in
    pub fn logout(&mut self) -> Option<User> {
        let user = self.user.take();
        if let Some(ref u) = user {
            tracing::info!("User signed out: {}", u.email);
        }
        user
    }
}
