//! Route wrappers around the shared views in `ui::views`.

use dioxus::prelude::*;

use ui::views::{HomeView, SignInView, SignUpView, StatisticsView};

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let nav = use_navigator();
    rsx! {
        SignInView {
            on_navigate_sign_up: move |_| {
                nav.push(Route::SignUp {});
            },
        }
    }
}

#[component]
pub fn SignUp() -> Element {
    let nav = use_navigator();
    rsx! {
        SignUpView {
            on_navigate_sign_in: move |_| {
                nav.push(Route::SignIn {});
            },
        }
    }
}

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        HomeView {
            on_navigate_statistics: move |_| {
                nav.push(Route::Statistics {});
            },
        }
    }
}

#[component]
pub fn Statistics() -> Element {
    let nav = use_navigator();
    rsx! {
        StatisticsView {
            on_navigate_home: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
