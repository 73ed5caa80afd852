use api::Recipe;
use dioxus::prelude::*;

use crate::icons::{FaSpinner, FaUtensils};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::queries::{invalidate, use_query_cache, RECIPE_GENERATION};
use crate::use_session;
use crate::views::ModalOverlay;
use crate::Icon;

#[component]
pub fn RecipeCard(recipe: Recipe) -> Element {
    rsx! {
        article {
            class: "recipe",
            h3 { class: "recipe-name", "{recipe.name}" }
            if !recipe.ingredients.is_empty() {
                h4 { "Ingredientes" }
                ul {
                    for ingredient in recipe.ingredients.iter() {
                        li {
                            strong { "{ingredient.amount}" }
                            " {ingredient.name}"
                        }
                    }
                }
            }
            if !recipe.steps.is_empty() {
                h4 { "Modo de preparo" }
                ol {
                    for step in recipe.steps.iter() {
                        li { "{step}" }
                    }
                }
            }
        }
    }
}

/// "Gerar receita" button and dialog. Each generation costs one credit, so
/// the gamification status is refetched afterwards.
#[component]
pub fn RecipeDialog() -> Element {
    let session = use_session();
    let mut cache = use_query_cache();
    let mut notifications = use_notifications();
    let mut open = use_signal(|| false);
    let mut recipe = use_signal(|| Option::<Recipe>::None);
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
            match client.generate_recipe().await {
                Ok(r) => {
                    recipe.set(Some(r));
                    invalidate(&mut cache, RECIPE_GENERATION);
                    notify(&mut notifications, NoticeLevel::Success, "Receita gerada com sucesso");
                }
                Err(e) => {
                    tracing::error!("recipe generation failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let mut close = move || {
        open.set(false);
        recipe.set(None);
        error.set(None);
    };

    rsx! {
        button {
            class: "btn btn-outline",
            onclick: move |_| open.set(true),
            Icon { icon: FaUtensils, width: 16, height: 16 }
            " Gerar receita"
        }

        if open() {
            ModalOverlay {
                on_close: move |_| close(),
                div {
                    class: "dialog dialog-wide",
                    h2 { class: "dialog-title", "Receita com IA" }

                    if let Some(r) = recipe() {
                        RecipeCard { recipe: r }
                    } else if loading() {
                        div {
                            class: "dialog-loading",
                            Icon { icon: FaSpinner, width: 20, height: 20, class: "spin" }
                            " Preparando sua receita..."
                        }
                    } else {
                        p { "Gere uma receita saudável personalizada. Cada receita consome 1 crédito." }
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
                        button {
                            class: "btn btn-primary",
                            disabled: loading(),
                            onclick: generate,
                            if recipe().is_some() { "Gerar outra" } else { "Gerar receita" }
                        }
                    }
                }
            }
        }
    }
}
