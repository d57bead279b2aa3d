/// Tools for signing in and out
///
/// Session state is informational only; habit tools work either way.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::session::{Session, User};

/// Parameters for signing in
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LoginParams {
    pub email: String,
    /// Display name (optional)
    #[serde(default)]
    pub name: String,
}

/// Current session state
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub message: String,
}

impl SessionResponse {
    fn from_session(session: &Session, message: String) -> Self {
        Self {
            is_authenticated: session.is_authenticated(),
            user: session.current_user().cloned(),
            message,
        }
    }
}

pub fn login(session: &mut Session, params: LoginParams) -> Result<SessionResponse, DomainError> {
    let user = session.login(&params.email, &params.name)?;
    let greeting = if user.name.is_empty() { user.email.clone() } else { user.name.clone() };

    Ok(SessionResponse::from_session(session, format!("👋 Welcome, {}!", greeting)))
}

pub fn logout(session: &mut Session) -> SessionResponse {
    let message = match session.logout() {
        Some(user) => format!("Signed out {}", user.email),
        None => "Nobody is signed in".to_string(),
    };
    SessionResponse::from_session(session, message)
}

pub fn status(session: &Session) -> SessionResponse {
    let message = match session.current_user() {
        Some(user) => format!("Signed in as {} <{}>", user.name, user.email),
        None => "Not signed in".to_string(),
    };
    SessionResponse::from_session(session, message)
}
