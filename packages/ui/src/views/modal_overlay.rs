use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a dialog card.
/// Clicking the backdrop or pressing Escape triggers `on_close`.
///
/// The overlay takes focus when mounted so key presses reach it.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "overlay",
            role: "dialog",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!("overlay focus failed: {:?}", e);
                }
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: Event<KeyboardData>| {
                if closes_dialog(&evt.key()) {
                    on_close.call(());
                }
            },
            div {
                class: "overlay-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

fn closes_dialog(key: &Key) -> bool {
    *key == Key::Escape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_escape_closes() {
        assert!(closes_dialog(&Key::Escape));
        assert!(!closes_dialog(&Key::Enter));
        assert!(!closes_dialog(&Key::Character("q".to_string())));
    }
}
