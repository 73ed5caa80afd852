use dioxus::prelude::*;

use crate::icons::FaUtensils;
use crate::Icon;

/// Brand panel and card shared by the sign-in and sign-up pages.
#[component]
pub fn AuthShell(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        main {
            class: "auth-shell",
            div {
                class: "auth-brand",
                Icon { icon: FaUtensils, width: 28, height: 28 }
                span { "Daily Diet" }
            }
            section {
                class: "auth-card",
                h1 { "{title}" }
                p { class: "auth-subtitle", "{subtitle}" }
                {children}
            }
        }
    }
}
