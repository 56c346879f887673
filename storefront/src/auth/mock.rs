//! In-memory auth provider
//!
//! Every call succeeds. Sessions live in memory only and are lost on
//! restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use shared::util::now_millis;

use super::{
    AuthError, AuthProvider, OAuthProvider, Session, SessionCallback, SessionEvent, SignInMethod,
    Subscription, User,
};

type Listeners = Mutex<HashMap<u64, SessionCallback>>;

/// User returned for provider sign-in
const OAUTH_USER_ID: &str = "1";
const OAUTH_USER_EMAIL: &str = "user@example.com";

#[derive(Default)]
pub struct MockAuthProvider {
    session: RwLock<Option<Session>>,
    listeners: Arc<Listeners>,
    next_listener_id: AtomicU64,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn start_session(&self, user: User, method: SignInMethod) -> Session {
        let session = Session {
            user,
            access_token: uuid::Uuid::new_v4().to_string(),
            method,
            created_at: now_millis(),
        };
        *self.session.write() = Some(session.clone());
        self.notify(SessionEvent::SignedIn, Some(&session));
        session
    }

    /// Call listeners outside the lock so they may (un)subscribe
    fn notify(&self, event: SessionEvent, session: Option<&Session>) {
        let listeners: Vec<SessionCallback> = self.listeners.lock().values().cloned().collect();
        for listener in listeners {
            listener(event, session);
        }
    }
}

impl std::fmt::Debug for MockAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockAuthProvider")
            .field("session", &*self.session.read())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn get_current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.session.read().clone())
    }

    fn on_session_change(&self, callback: SessionCallback) -> Subscription {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().insert(id, callback);

        let listeners: Weak<Listeners> = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.lock().remove(&id);
            }
        })
    }

    async fn sign_in_with_provider(&self, provider: OAuthProvider) -> Result<Session, AuthError> {
        tracing::info!(provider = ?provider, "Mock sign-in with provider");
        let user = User {
            id: OAUTH_USER_ID.to_string(),
            email: OAUTH_USER_EMAIL.to_string(),
        };
        Ok(self.start_session(user, SignInMethod::OAuth(provider)))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<Session, AuthError> {
        tracing::info!(email = %email, "Mock sign-in with password");
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
        };
        Ok(self.start_session(user, SignInMethod::Password))
    }

    async fn sign_up(&self, email: &str, _password: &str) -> Result<Session, AuthError> {
        tracing::info!(email = %email, "Mock sign-up");
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
        };
        Ok(self.start_session(user, SignInMethod::Password))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let previous = self.session.write().take();
        tracing::info!(was_signed_in = previous.is_some(), "Mock sign-out");
        if previous.is_some() {
            self.notify(SessionEvent::SignedOut, None);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_session_initially() {
        let auth = MockAuthProvider::new();
        assert_eq!(auth.get_current_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_provider_sign_in_sets_demo_user() {
        let auth = MockAuthProvider::new();
        let session = auth
            .sign_in_with_provider(OAuthProvider::Google)
            .await
            .unwrap();
        assert_eq!(session.user.id, "1");
        assert_eq!(session.user.email, "user@example.com");
        assert_eq!(session.method, SignInMethod::OAuth(OAuthProvider::Google));
        assert_eq!(auth.get_current_session().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_password_sign_in_and_out() {
        let auth = MockAuthProvider::new();
        let session = auth
            .sign_in_with_password("ann@example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(session.user.email, "ann@example.com");

        auth.sign_out().await.unwrap();
        assert_eq!(auth.get_current_session().await.unwrap(), None);
        // Signing out twice is fine
        auth.sign_out().await.unwrap();
    }

    #[tokio::test]
    async fn test_listeners_receive_events_until_unsubscribed() {
        let auth = MockAuthProvider::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let sink = events.clone();
        let sub = auth.on_session_change(Arc::new(
            move |event: SessionEvent, session: Option<&Session>| {
                sink.lock()
                    .push((event, session.map(|s| s.user.email.clone())));
            },
        ));

        auth.sign_up("new@example.com", "secret1").await.unwrap();
        auth.sign_out().await.unwrap();
        sub.unsubscribe();
        auth.sign_in_with_provider(OAuthProvider::Google)
            .await
            .unwrap();

        assert_eq!(
            *events.lock(),
            vec![
                (SessionEvent::SignedIn, Some("new@example.com".to_string())),
                (SessionEvent::SignedOut, None),
            ]
        );
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let auth: Arc<dyn AuthProvider> = Arc::new(MockAuthProvider::new());
        auth.sign_in_with_password("a@b.c", "secret1").await.unwrap();
        assert!(auth.get_current_session().await.unwrap().is_some());
    }
}
