use dioxus::prelude::*;

use ui::{Access, Destination, RouteGuard};

use crate::Route;

fn to_route(destination: Destination) -> Route {
    match destination {
        Destination::SignIn => Route::SignIn {},
        Destination::Home => Route::Home {},
    }
}

/// Sign-in and sign-up: signed-in users are sent home.
#[component]
pub fn AuthLayout() -> Element {
    let nav = use_navigator();
    rsx! {
        RouteGuard {
            access: Access::GuestOnly,
            on_redirect: move |d| {
                nav.replace(to_route(d));
            },
            Outlet::<Route> {}
        }
    }
}

/// Home and statistics: guests are sent to sign-in.
#[component]
pub fn PrivateLayout() -> Element {
    let nav = use_navigator();
    rsx! {
        RouteGuard {
            access: Access::Protected,
            on_redirect: move |d| {
                nav.replace(to_route(d));
            },
            Outlet::<Route> {}
        }
    }
}
