//! Authentication context and hooks for the UI.

use api::SessionPhase;
use dioxus::prelude::*;
use store::DailyDietConfig;

use crate::notifications::Notifications;
use crate::platform::{make_session, AppSession};
use crate::queries::QueryCache;
use crate::Toaster;

/// Reactive mirror of the session phase.
///
/// The [`AppSession`] itself is not reactive; views update this signal after
/// every session transition so guards and badges re-render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthState {
    pub phase: SessionPhase,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Initializing,
        }
    }
}

impl AuthState {
    pub fn of(session: &AppSession) -> Self {
        Self {
            phase: session.phase(),
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the session that owns the bearer token and the API client.
pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

/// Provider component that manages authentication state.
/// The stored token is restored once, after the first render, so the
/// Initializing phase is observable by guards.
#[component]
pub fn AuthProvider(config: DailyDietConfig, children: Element) -> Element {
    let session = use_context_provider(|| make_session(&config));
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    use_effect(move || {
        let phase = session.restore();
        auth_state.set(AuthState { phase });
    });

    rsx! {
        {children}
    }
}

/// Everything the views expect in context: config, query cache,
/// notifications, and the session.
#[component]
pub fn AppProvider(config: DailyDietConfig, children: Element) -> Element {
    use_context_provider(|| config.clone());
    use_context_provider(|| Signal::new(QueryCache::default()));
    use_context_provider(|| Signal::new(Notifications::default()));

    rsx! {
        document::Stylesheet { href: crate::APP_CSS }

        AuthProvider {
            config: config.clone(),
            {children}
        }
        Toaster {}
    }
}

/// Button to sign the current user out. No server call is made.
#[component]
pub fn SignOutButton(
    #[props(default = "Sair".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        session.sign_out();
        auth_state.set(AuthState::of(&session));
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
