//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user object and the stored token are the only shared mutable state in
//! the client core. Both are owned here: route guards and pages read the
//! reactive state and request changes through [`AuthSession`] operations,
//! never by touching storage directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::util::session;

/// Authentication state tracking the current account and bootstrap status.
///
/// `loading` starts `true` and flips to `false` exactly once, after the
/// startup session restore settles; guards must not decide anything before
/// that.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// A user object is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Present user carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Present user has confirmed their email address.
    pub fn is_verified(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_email_verified)
    }
}

/// Injectable handle to the process-wide auth session.
///
/// Created once at the composition root and provided via context; the
/// wrapped signal gives interested views a subscription mechanism without a
/// global singleton.
#[derive(Clone, Copy)]
pub struct AuthSession {
    state: RwSignal<AuthState>,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Reactive snapshot of the current state. Tracks when called inside a
    /// reactive scope.
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    /// Non-tracking snapshot for event handlers and spawned tasks.
    pub fn state_untracked(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// One-time startup restore.
    ///
    /// Consumes a one-time URL token first (OAuth callback), then attempts
    /// `GET /auth/me` only when a token is stored — no token means no
    /// network call at all. Any fetch failure drops the stored token; the
    /// loading gate always closes, exactly once.
    pub async fn bootstrap(self) {
        session::adopt_url_token();

        if session::token().is_none() {
            self.state.update(|s| {
                s.user = None;
                s.loading = false;
            });
            return;
        }

        let result = api::fetch_current_user().await;
        self.state.update(|s| {
            match result {
                Ok(user) => s.user = Some(user),
                Err(_err) => {
                    #[cfg(feature = "hydrate")]
                    log::warn!("session restore failed: {_err}");
                    session::clear_token();
                    s.user = None;
                }
            }
            s.loading = false;
        });
    }

    /// Authenticate with credentials.
    ///
    /// Persists any returned token and publishes the user; the caller
    /// branches on the returned user for post-login routing.
    ///
    /// # Errors
    ///
    /// On failure the user stays unset and the typed error propagates so
    /// forms can render status-specific messages.
    pub async fn login(self, email: &str, password: &str) -> Result<User, ApiError> {
        let data = api::login(email, password).await?;
        if let Some(token) = data.token.as_deref() {
            session::store_token(token);
        }
        let user = data.user;
        self.state.update(|s| s.user = Some(user.clone()));
        Ok(user)
    }

    /// Terminate the session.
    ///
    /// The server call is best-effort; the token and user are cleared
    /// regardless so the client never believes it is still signed in after
    /// a failed network call.
    pub async fn logout(self) {
        if let Err(_err) = api::logout().await {
            #[cfg(feature = "hydrate")]
            log::warn!("logout call failed: {_err}");
        }
        session::clear_token();
        self.state.update(|s| s.user = None);
    }

    /// Re-fetch the authoritative user without toggling the loading gate.
    ///
    /// Used after actions that change plan or verification state. Only an
    /// authorization failure clears the session; transient errors leave the
    /// last known user in place.
    pub async fn refresh_user(self) {
        match api::fetch_current_user().await {
            Ok(user) => self.state.update(|s| s.user = Some(user)),
            Err(err) if err.is_unauthorized() => {
                session::clear_token();
                self.state.update(|s| s.user = None);
            }
            Err(_err) => {
                #[cfg(feature = "hydrate")]
                log::warn!("user refresh failed: {_err}");
            }
        }
    }
}
