//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is created once by `App` and handed down through Leptos
//! context. It is the only writer of the cached user and the post-login
//! redirect target; pages and the route guard only read it.
//!
//! DESIGN
//! ======
//! All decisions live in [`SessionState`] and [`resolve_self_user`], which
//! know nothing about signals or the browser. [`SessionBackend`] is the seam
//! to credential storage and the self-user endpoint, so the logic runs
//! against an in-memory fake in tests.
//!
//! TRADE-OFFS
//! ==========
//! A failed self-fetch always clears the cached user. The stored credential
//! is only dropped when the backend answers 401; transport failures keep it,
//! so a flaky connection does not log the user out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;

use crate::config::{LEGACY_SIGNUP_PATH, LOGIN_PATH, REGISTER_PATH};
use crate::net::error::ApiError;
use crate::net::types::{TokenPair, User};

/// Credential storage plus the self-user endpoint.
pub trait SessionBackend {
    /// True iff a credential is stored locally. Never touches the network.
    fn has_credential(&self) -> bool;
    fn store_credential(&self, tokens: &TokenPair);
    fn clear_credential(&self);
    fn fetch_self_user(&self) -> impl Future<Output = Result<User, ApiError>>;
}

/// `localStorage` credentials and the real `user/self/` endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserBackend;

impl SessionBackend for BrowserBackend {
    fn has_credential(&self) -> bool {
        crate::util::credentials::has_access_token()
    }

    fn store_credential(&self, tokens: &TokenPair) {
        crate::util::credentials::store_tokens(tokens);
    }

    fn clear_credential(&self) {
        crate::util::credentials::clear();
    }

    fn fetch_self_user(&self) -> impl Future<Output = Result<User, ApiError>> {
        crate::net::user_api::get_self_user()
    }
}

/// Paths that must never become a post-login destination.
pub fn is_auth_path(path: &str) -> bool {
    let path = path.trim_end_matches('/');
    [LOGIN_PATH, REGISTER_PATH, LEGACY_SIGNUP_PATH].contains(&path)
}

/// Result of one self-user refresh.
#[derive(Clone, Debug, PartialEq)]
pub enum SelfUserOutcome {
    /// No credential stored; nothing was fetched.
    SignedOut,
    Fetched(User),
    Failed {
        error: ApiError,
        /// The backend rejected the credential and it was removed.
        credential_cleared: bool,
    },
}

/// Fetch the current user if a credential exists.
pub async fn resolve_self_user<B: SessionBackend>(backend: &B) -> SelfUserOutcome {
    if !backend.has_credential() {
        return SelfUserOutcome::SignedOut;
    }
    match backend.fetch_self_user().await {
        Ok(user) => SelfUserOutcome::Fetched(user),
        Err(error) => {
            let credential_cleared = error.is_unauthorized();
            if credential_cleared {
                backend.clear_credential();
            }
            log::warn!("self-user fetch failed: {error}");
            SelfUserOutcome::Failed { error, credential_cleared }
        }
    }
}

/// Plain session data; `Session` wraps it in a signal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub authenticated: bool,
    /// `None` until the first fetch resolves, and after logout or failure.
    pub user: Option<User>,
    pub redirect_path: Option<String>,
}

impl SessionState {
    pub fn new(authenticated: bool) -> Self {
        Self { authenticated, ..Self::default() }
    }

    /// Whether `set_redirect_path(path)` would change anything.
    pub fn accepts_redirect(&self, path: Option<&str>) -> bool {
        if path.is_some_and(is_auth_path) {
            return false;
        }
        self.redirect_path.as_deref() != path
    }

    /// Remember where to go after login. Auth pages are ignored.
    pub fn set_redirect_path(&mut self, path: Option<String>) {
        if self.accepts_redirect(path.as_deref()) {
            self.redirect_path = path;
        }
    }

    /// Consume the redirect target, defaulting to the front page.
    pub fn take_redirect_path(&mut self) -> String {
        self.redirect_path.take().unwrap_or_else(|| "/".to_owned())
    }

    /// Apply a refresh outcome. Any failure leaves `user` empty.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged when the refresh failed.
    pub fn settle_self_user(&mut self, outcome: SelfUserOutcome) -> Result<(), ApiError> {
        match outcome {
            SelfUserOutcome::SignedOut => {
                self.authenticated = false;
                self.user = None;
                Ok(())
            }
            SelfUserOutcome::Fetched(user) => {
                self.authenticated = true;
                self.user = Some(user);
                Ok(())
            }
            SelfUserOutcome::Failed { error, credential_cleared } => {
                if credential_cleared {
                    self.authenticated = false;
                }
                self.user = None;
                Err(error)
            }
        }
    }

    /// Forget everything, including any pending post-login destination.
    pub fn sign_out(&mut self) {
        self.authenticated = false;
        self.user = None;
        self.redirect_path = None;
    }
}

/// Reactive session handle shared through context.
///
/// Cheap to copy; every copy points at the same signal.
#[derive(Debug)]
pub struct Session<B = BrowserBackend> {
    state: RwSignal<SessionState>,
    backend: B,
}

impl<B: Copy> Clone for Session<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Copy> Copy for Session<B> {}

impl<B> Session<B>
where
    B: SessionBackend + Copy + Send + Sync + 'static,
{
    pub fn new(backend: B) -> Self {
        let state = RwSignal::new(SessionState::new(backend.has_credential()));
        Self { state, backend }
    }

    /// Kick off the one self-user fetch made on startup.
    pub fn init(self) {
        if !self.backend.has_credential() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let _ = self.update_self_user().await;
        });
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn redirect_path(&self) -> Option<String> {
        self.state.with(|s| s.redirect_path.clone())
    }

    /// Store the post-login destination unless it is an auth page.
    ///
    /// Unchanged values are not written, so calling this while rendering does
    /// not retrigger readers.
    pub fn set_redirect_path(&self, path: Option<String>) {
        if self.state.with_untracked(|s| s.accepts_redirect(path.as_deref())) {
            self.state.update(|s| s.set_redirect_path(path));
        }
    }

    pub fn take_redirect_path(&self) -> String {
        let mut target = String::new();
        self.state.update(|s| target = s.take_redirect_path());
        target
    }

    /// Refresh the cached user from the backend.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the cached user is cleared either way.
    pub async fn update_self_user(&self) -> Result<(), ApiError> {
        let outcome = resolve_self_user(&self.backend).await;
        let authenticated = self.backend.has_credential();
        let mut result = Ok(());
        self.state.update(|s| {
            result = s.settle_self_user(outcome);
            s.authenticated = authenticated;
        });
        result
    }

    /// Store freshly issued tokens and load the user they belong to.
    ///
    /// # Errors
    ///
    /// Returns the self-fetch error.
    pub async fn sign_in(&self, tokens: &TokenPair) -> Result<(), ApiError> {
        self.backend.store_credential(tokens);
        self.state.update(|s| s.authenticated = true);
        self.update_self_user().await
    }

    pub fn logout(&self) {
        self.backend.clear_credential();
        self.state.update(SessionState::sign_out);
    }
}

/// The session provided by `App`.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
