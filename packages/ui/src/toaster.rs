use dioxus::prelude::*;

use crate::notifications::{use_notifications, NoticeLevel};

/// Stack of toasts in the corner of the screen. Click one to dismiss it.
#[component]
pub fn Toaster() -> Element {
    let mut notifications = use_notifications();
    let entries = notifications().entries.clone();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toaster",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: match notice.level {
                        NoticeLevel::Success => "toast success",
                        NoticeLevel::Error => "toast error",
                        NoticeLevel::Info => "toast info",
                    },
                    role: "status",
                    onclick: move |_| notifications.write().dismiss(notice.id),
                    "{notice.message}"
                }
            }
        }
    }
}
