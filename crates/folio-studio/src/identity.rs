//! Identity boundary and route guarding.
//!
//! Sign-in is delegated to an external identity service behind
//! [`IdentityProvider`]. The studio only ever reads two facts from it: is a
//! user present, and is the provider still resolving. [`guard`] turns those
//! into a routing decision for protected views.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("email is required")]
    EmptyEmail,

    #[error("password must be at least {} characters", MIN_PASSWORD_LEN)]
    WeakPassword,

    #[error("an account already exists for {0}")]
    AlreadyRegistered(String),

    #[error("invalid email or password")]
    InvalidCredentials,
}

/// External identity/session service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Option<User>;

    async fn login(&self, email: &str, password: &str) -> Result<User, IdentityError>;

    /// Create an account and sign it in.
    async fn register(&self, email: &str, password: &str) -> Result<User, IdentityError>;

    async fn logout(&self);
}

#[derive(Debug, Default)]
struct MemoryState {
    accounts: HashMap<String, String>,
    current: Option<User>,
}

/// In-process provider for the CLI and tests. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryIdentity {
    state: Mutex<MemoryState>,
}

impl MemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

fn normalize_email(email: &str) -> Result<String, IdentityError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(IdentityError::EmptyEmail);
    }
    Ok(email.to_ascii_lowercase())
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    async fn current_user(&self) -> Option<User> {
        self.state.lock().await.current.clone()
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, IdentityError> {
        let email = normalize_email(email)?;
        let mut state = self.state.lock().await;
        match state.accounts.get(&email) {
            Some(stored) if stored == password => {
                let user = User { email };
                state.current = Some(user.clone());
                info!(email = %user.email, "signed in");
                Ok(user)
            }
            _ => Err(IdentityError::InvalidCredentials),
        }
    }

    async fn register(&self, email: &str, password: &str) -> Result<User, IdentityError> {
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(IdentityError::WeakPassword);
        }
        let mut state = self.state.lock().await;
        if state.accounts.contains_key(&email) {
            return Err(IdentityError::AlreadyRegistered(email));
        }
        state.accounts.insert(email.clone(), password.to_string());
        let user = User { email };
        state.current = Some(user.clone());
        info!(email = %user.email, "registered");
        Ok(user)
    }

    async fn logout(&self) {
        let mut state = self.state.lock().await;
        if let Some(user) = state.current.take() {
            info!(email = %user.email, "signed out");
        }
    }
}

// ============================================================================
// Routing
// ============================================================================

/// What the route guard reads from the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub loading: bool,
    pub user: Option<User>,
}

impl AuthState {
    /// Provider has not answered yet.
    pub fn resolving() -> Self {
        Self {
            loading: true,
            user: None,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            loading: false,
            user: None,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            loading: false,
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Login,
    Register,
    Editor,
    MarketIntelligence,
    Subscription,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::Editor,
        Route::MarketIntelligence,
        Route::Subscription,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Editor => "/editor",
            Route::MarketIntelligence => "/market-intelligence",
            Route::Subscription => "/subscription",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Requires a signed-in user.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Editor | Route::MarketIntelligence | Route::Subscription
        )
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity still resolving; show a loading state.
    Loading,
    Render,
    Redirect(Route),
}

pub fn guard(route: Route, auth: &AuthState) -> GuardDecision {
    if !route.is_protected() {
        return GuardDecision::Render;
    }
    if auth.loading {
        return GuardDecision::Loading;
    }
    if auth.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_roundtrip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/admin"), None);
    }

    #[test]
    fn test_guard_decisions() {
        let amy = User {
            email: "amy@example.com".into(),
        };
        assert_eq!(guard(Route::Home, &AuthState::signed_out()), GuardDecision::Render);
        assert_eq!(guard(Route::Login, &AuthState::resolving()), GuardDecision::Render);
        assert_eq!(guard(Route::Editor, &AuthState::resolving()), GuardDecision::Loading);
        assert_eq!(
            guard(Route::Subscription, &AuthState::signed_out()),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(
            guard(Route::MarketIntelligence, &AuthState::signed_in(amy)),
            GuardDecision::Render
        );
    }

    #[tokio::test]
    async fn test_register_login_logout() {
        let id = MemoryIdentity::new();
        assert_eq!(id.current_user().await, None);

        let user = id.register(" Amy@Example.com ", "hunter22").await.unwrap();
        assert_eq!(user.email, "amy@example.com");
        assert_eq!(id.current_user().await, Some(user.clone()));

        id.logout().await;
        assert_eq!(id.current_user().await, None);

        assert_eq!(
            id.login("amy@example.com", "wrong").await.unwrap_err(),
            IdentityError::InvalidCredentials
        );
        assert_eq!(id.login("AMY@example.com", "hunter22").await.unwrap(), user);
    }

    #[tokio::test]
    async fn test_register_validation() {
        let id = MemoryIdentity::new();
        assert_eq!(id.register("  ", "hunter22").await.unwrap_err(), IdentityError::EmptyEmail);
        assert_eq!(id.register("a@b.c", "short").await.unwrap_err(), IdentityError::WeakPassword);
        id.register("a@b.c", "longenough").await.unwrap();
        assert_eq!(
            id.register("a@b.c", "longenough").await.unwrap_err(),
            IdentityError::AlreadyRegistered("a@b.c".into())
        );
    }
}
