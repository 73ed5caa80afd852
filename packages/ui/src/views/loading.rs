use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

/// Shown while the stored session is being restored.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "loading-screen",
            Icon { icon: FaSpinner, width: 32, height: 32, class: "spin" }
        }
    }
}

/// Placeholder rows for the meal list.
#[component]
pub fn MealListSkeleton(#[props(default = 4)] rows: usize) -> Element {
    rsx! {
        div {
            class: "meal-list",
            div { class: "skeleton skeleton-heading" }
            for i in 0..rows {
                div { key: "{i}", class: "skeleton skeleton-row" }
            }
        }
    }
}
