use api::Meal;
use dioxus::prelude::*;

use crate::forms::format_meal_date;
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::queries::{invalidate, use_query_cache, MEAL_DELETE};
use crate::use_session;
use crate::views::ModalOverlay;

/// Read-only view of one meal with edit and delete actions.
///
/// Editing hands the meal back through `on_edit`; the caller opens the form.
#[component]
pub fn MealDetailsDialog(meal: Meal, on_edit: EventHandler<Meal>, on_close: EventHandler<()>) -> Element {
    let session = use_session();
    let mut cache = use_query_cache();
    let mut notifications = use_notifications();
    let mut confirming = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let meal_id = meal.id.clone();
    let handle_delete = move |_| {
        if deleting() {
            return;
        }
        deleting.set(true);

        let client = session.client().clone();
        let meal_id = meal_id.clone();
        spawn(async move {
            let result = client.delete_meal(&meal_id).await;
            deleting.set(false);

            match result {
                Ok(()) => {
                    invalidate(&mut cache, MEAL_DELETE);
                    notify(&mut notifications, NoticeLevel::Success, "Refeição excluída com sucesso");
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("meal delete failed: {}", e);
                    notify(&mut notifications, NoticeLevel::Error, "Erro ao excluir refeição");
                }
            }
        });
    };

    let edit_meal = meal.clone();
    let date = format_meal_date(&meal.date);
    let diet_label = if meal.is_on_diet { "dentro da dieta" } else { "fora da dieta" };
    let diet_class = if meal.is_on_diet { "diet-tag on" } else { "diet-tag off" };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "dialog",
                h2 { class: "dialog-title", "{meal.name}" }
                if let Some(description) = meal.description.as_ref().filter(|d| !d.is_empty()) {
                    p { class: "meal-description", "{description}" }
                }
                p { class: "field-label", "Data e hora" }
                p { "{date} às {meal.time}" }
                span { class: "{diet_class}", "{diet_label}" }

                if confirming() {
                    p { class: "confirm-text", "Deseja realmente excluir o registro da refeição?" }
                    div {
                        class: "dialog-actions",
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| confirming.set(false),
                            "Cancelar"
                        }
                        button {
                            class: "btn btn-danger",
                            disabled: deleting(),
                            onclick: handle_delete,
                            if deleting() { "Excluindo..." } else { "Sim, excluir" }
                        }
                    }
                } else {
                    div {
                        class: "dialog-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_edit.call(edit_meal.clone()),
                            "Editar refeição"
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| confirming.set(true),
                            "Excluir refeição"
                        }
                    }
                }
            }
        }
    }
}
