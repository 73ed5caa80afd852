//! Route guarding based on the session phase.
//!
//! [`decide`] is the whole policy; [`RouteGuard`] renders it. Platform
//! packages map [`Destination`] onto their own `Route` enum.

use api::SessionPhase;
use dioxus::prelude::*;

use crate::use_auth;
use crate::views::LoadingScreen;

/// Who may see a route subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Signed-in users only (home, statistics).
    Protected,
    /// Signed-out users only (sign-in, sign-up).
    GuestOnly,
}

/// Where a guard sends the user instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    SignIn,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still initializing: show a placeholder, do not navigate.
    Loading,
    Render,
    Redirect(Destination),
}

pub fn decide(access: Access, phase: SessionPhase) -> GuardDecision {
    match (access, phase) {
        (_, SessionPhase::Initializing) => GuardDecision::Loading,
        (Access::Protected, SessionPhase::Authenticated) => GuardDecision::Render,
        (Access::Protected, SessionPhase::Unauthenticated) => {
            GuardDecision::Redirect(Destination::SignIn)
        }
        (Access::GuestOnly, SessionPhase::Authenticated) => GuardDecision::Redirect(Destination::Home),
        (Access::GuestOnly, SessionPhase::Unauthenticated) => GuardDecision::Render,
    }
}

/// Render `children` only when the session allows it.
///
/// Redirects happen in an effect, so a guard never navigates while the
/// session is still being restored.
#[component]
pub fn RouteGuard(access: Access, on_redirect: EventHandler<Destination>, children: Element) -> Element {
    let auth = use_auth();

    use_effect(move || {
        if let GuardDecision::Redirect(destination) = decide(access, auth().phase) {
            tracing::debug!(?destination, "route guard redirect");
            on_redirect.call(destination);
        }
    });

    match decide(access, auth().phase) {
        GuardDecision::Loading => rsx! { LoadingScreen {} },
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Redirect(_) => rsx! {},
    }
}
