use dioxus::prelude::*;

use crate::icons::{FaRobot, FaSpinner};
use crate::markdown::render_markdown;
use crate::use_session;
use crate::views::ModalOverlay;
use crate::Icon;

/// Trigger button plus the dialog that asks the API for a diet report.
///
/// The report is not cached: closing the dialog discards it.
#[component]
pub fn AiReportDialog() -> Element {
    let session = use_session();
    let mut open = use_signal(|| false);
    let mut report = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let generate = move |_| {
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);

        let client = session.client().clone();
        spawn(async move {
            match client.ai_report().await {
                Ok(r) => report.set(Some(render_markdown(&r.report))),
                Err(e) => {
                    tracing::error!("report generation failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let mut close = move || {
        open.set(false);
        report.set(None);
        error.set(None);
    };

    rsx! {
        button {
            class: "btn btn-primary",
            onclick: move |_| open.set(true),
            Icon { icon: FaRobot, width: 16, height: 16 }
            " Relatório com IA"
        }

        if open() {
            ModalOverlay {
                on_close: move |_| close(),
                div {
                    class: "dialog dialog-wide",
                    h2 { class: "dialog-title", "Relatório com IA" }

                    if let Some(html) = report() {
                        div { class: "markdown", dangerous_inner_html: "{html}" }
                    } else if loading() {
                        div {
                            class: "dialog-loading",
                            Icon { icon: FaSpinner, width: 20, height: 20, class: "spin" }
                            " Analisando suas refeições..."
                        }
                    } else {
                        p { "Receba uma análise da sua alimentação com base nas refeições registradas." }
                    }

                    if let Some(message) = error() {
                        p { class: "field-error", "{message}" }
                    }

                    div {
                        class: "dialog-actions",
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| close(),
                            "Fechar"
                        }
                        if report().is_none() {
                            button {
                                class: "btn btn-primary",
                                disabled: loading(),
                                onclick: generate,
                                "Gerar relatório"
                            }
                        }
                    }
                }
            }
        }
    }
}
