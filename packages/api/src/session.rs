//! # Session lifecycle
//!
//! [`Session`] owns the authentication state for the life of the app:
//!
//! ```text
//! Initializing ──restore()──▶ Authenticated     (stored token found)
//!      │
//!      └──────restore()──▶ Unauthenticated ──sign_in()──▶ Authenticated
//!                                ▲                              │
//!                                └──────────sign_out()──────────┘
//! ```
//!
//! The token lives in the shared [`ApiClient`] (so every request carries it)
//! and is mirrored to a [`TokenStore`] so it survives restarts. The session
//! is an ordinary value: tests build one over a `MemoryTokenStore` in any
//! state they like, and the UI injects it through context.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use store::TokenStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::AuthenticateRequest;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The stored token has not been read yet.
    Initializing,
    Unauthenticated,
    Authenticated,
}

/// Authentication state shared by the whole app. Clones share state.
#[derive(Clone, Debug)]
pub struct Session<S> {
    client: ApiClient,
    store: S,
    restored: Arc<AtomicBool>,
}

impl<S: TokenStore> Session<S> {
    pub fn new(client: ApiClient, store: S) -> Self {
        Self {
            client,
            store,
            restored: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The client every view should use; it carries the session token.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Load the persisted token, once. Makes no network call.
    pub fn restore(&self) -> SessionPhase {
        if self.restored.swap(true, Ordering::SeqCst) {
            return self.phase();
        }

        match self.store.load() {
            Some(token) => {
                self.client.set_token(Some(token));
                tracing::info!("restored stored session");
            }
            None => tracing::debug!("no stored session"),
        }
        self.phase()
    }

    /// Authenticate against `POST /sessions` and keep the returned token.
    ///
    /// On failure the session is left exactly as it was.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let request = AuthenticateRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = match self.client.authenticate(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("sign in failed: {}", e);
                return Err(e);
            }
        };

        if response.token.trim().is_empty() {
            return Err(ApiError::Decode("server returned an empty token".to_string()));
        }

        self.client.set_token(Some(response.token.clone()));
        self.store.save(&response.token);
        self.restored.store(true, Ordering::SeqCst);
        tracing::info!("signed in");
        Ok(())
    }

    /// Forget the token locally. The server is not contacted.
    pub fn sign_out(&self) {
        self.client.set_token(None);
        self.store.clear();
        tracing::info!("signed out");
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.restored.load(Ordering::SeqCst) {
            SessionPhase::Initializing
        } else if self.client.has_token() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.has_token()
    }

    /// True only until [`Session::restore`] has run.
    pub fn is_token_loading(&self) -> bool {
        self.phase() == SessionPhase::Initializing
    }
}
