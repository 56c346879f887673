//! Authentication
//!
//! - [`AuthProvider`] - the capability the storefront talks to
//! - [`MockAuthProvider`] - in-memory implementation, always succeeds
//! - [`LoginForm`] - checks run on the login page before calling the provider

mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};

use crate::utils::validation::{MAX_EMAIL_LEN, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, is_blank};

pub use mock::MockAuthProvider;

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// How the session was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInMethod {
    Password,
    #[serde(rename = "oauth")]
    OAuth(OAuthProvider),
}

/// Third-party sign-in provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub method: SignInMethod,
    /// Unix millis
    pub created_at: i64,
}

/// Session change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
}

/// Listener registered through [`AuthProvider::on_session_change`]
pub type SessionCallback = Arc<dyn Fn(SessionEvent, Option<&Session>) + Send + Sync>;

/// Handle returned by [`AuthProvider::on_session_change`]
///
/// The listener stays registered until [`Subscription::unsubscribe`] is
/// called; dropping the handle keeps it alive.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingCredentials,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("{field} is too long")]
    TooLong { field: &'static str },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication failed: {0}")]
    Provider(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let code = match &err {
            AuthError::MissingCredentials => ErrorCode::RequiredField,
            AuthError::PasswordTooShort => ErrorCode::PasswordTooShort,
            AuthError::TooLong { .. } => ErrorCode::ValueOutOfRange,
            AuthError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AuthError::Provider(_) => ErrorCode::AuthProviderError,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Authentication capability
///
/// The storefront only needs these six operations; implementations decide
/// where sessions live.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Current session, if signed in
    async fn get_current_session(&self) -> Result<Option<Session>, AuthError>;

    /// Register a listener for sign-in / sign-out
    fn on_session_change(&self, callback: SessionCallback) -> Subscription;

    async fn sign_in_with_provider(&self, provider: OAuthProvider) -> Result<Session, AuthError>;

    async fn sign_in_with_password(&self, email: &str, password: &str)
    -> Result<Session, AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Email + password as typed on the login page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Check the form and return the trimmed email
    ///
    /// Both fields must be non-blank and the password at least
    /// 6 characters long.
    pub fn validate(&self) -> Result<&str, AuthError> {
        if is_blank(&self.email) || is_blank(&self.password) {
            return Err(AuthError::MissingCredentials);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }
        let email = self.email.trim();
        if email.len() > MAX_EMAIL_LEN {
            return Err(AuthError::TooLong { field: "email" });
        }
        if self.password.len() > MAX_PASSWORD_LEN {
            return Err(AuthError::TooLong { field: "password" });
        }
        Ok(email)
    }
}
