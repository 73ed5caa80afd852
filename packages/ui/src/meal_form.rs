use api::Meal;
use dioxus::prelude::*;

use crate::forms::{FieldErrors, MealForm};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::queries::{invalidate, use_query_cache, MEAL_UPSERT};
use crate::use_session;
use crate::views::ModalOverlay;

/// Create a meal, or edit `meal` when given.
#[component]
pub fn MealFormDialog(meal: Option<Meal>, on_close: EventHandler<()>) -> Element {
    let session = use_session();
    let mut cache = use_query_cache();
    let mut notifications = use_notifications();

    let editing_id = meal.as_ref().map(|m| m.id.clone());
    let is_editing = editing_id.is_some();
    let mut form = use_signal(|| meal.as_ref().map(MealForm::from_meal).unwrap_or_default());
    let mut errors = use_signal(FieldErrors::default);
    let mut pending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }

        let input = match form.read().validate() {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        pending.set(true);

        let client = session.client().clone();
        let editing_id = editing_id.clone();
        spawn(async move {
            let result = match &editing_id {
                Some(id) => client.update_meal(id, &input).await,
                None => client.create_meal(&input).await,
            };
            pending.set(false);

            match result {
                Ok(()) => {
                    invalidate(&mut cache, MEAL_UPSERT);
                    let message = if editing_id.is_some() {
                        "Refeição atualizada com sucesso"
                    } else {
                        "Refeição cadastrada com sucesso"
                    };
                    notify(&mut notifications, NoticeLevel::Success, message);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("meal upsert failed: {}", e);
                    notify(&mut notifications, NoticeLevel::Error, "Erro ao cadastrar refeição");
                }
            }
        });
    };

    let err = errors();
    let current = form();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "dialog",
                onsubmit: handle_submit,
                h2 {
                    class: "dialog-title",
                    if is_editing { "Editar refeição" } else { "Nova refeição" }
                }

                label { r#for: "meal-name", "Nome" }
                input {
                    id: "meal-name",
                    class: "input",
                    value: "{current.name}",
                    oninput: move |e| form.write().name = e.value(),
                }
                if let Some(msg) = err.get("name") {
                    p { class: "field-error", "{msg}" }
                }

                label { r#for: "meal-description", "Descrição" }
                textarea {
                    id: "meal-description",
                    class: "input",
                    rows: 3,
                    value: "{current.description}",
                    oninput: move |e| form.write().description = e.value(),
                }
                if let Some(msg) = err.get("description") {
                    p { class: "field-error", "{msg}" }
                }

                div {
                    class: "field-row",
                    div {
                        label { r#for: "meal-date", "Data" }
                        input {
                            id: "meal-date",
                            class: "input",
                            r#type: "date",
                            value: "{current.date}",
                            oninput: move |e| form.write().date = e.value(),
                        }
                        if let Some(msg) = err.get("date") {
                            p { class: "field-error", "{msg}" }
                        }
                    }
                    div {
                        label { r#for: "meal-time", "Hora" }
                        input {
                            id: "meal-time",
                            class: "input",
                            r#type: "time",
                            value: "{current.time}",
                            oninput: move |e| form.write().time = e.value(),
                        }
                        if let Some(msg) = err.get("time") {
                            p { class: "field-error", "{msg}" }
                        }
                    }
                }

                p { class: "field-label", "Está dentro da dieta?" }
                div {
                    class: "field-row",
                    button {
                        r#type: "button",
                        class: if current.is_on_diet { "choice choice-yes selected" } else { "choice choice-yes" },
                        onclick: move |_| form.write().is_on_diet = true,
                        "Sim"
                    }
                    button {
                        r#type: "button",
                        class: if current.is_on_diet { "choice choice-no" } else { "choice choice-no selected" },
                        onclick: move |_| form.write().is_on_diet = false,
                        "Não"
                    }
                }

                div {
                    class: "dialog-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: pending(),
                        if pending() {
                            "Salvando..."
                        } else if is_editing {
                            "Salvar alterações"
                        } else {
                            "Cadastrar refeição"
                        }
                    }
                }
            }
        }
    }
}
