use dioxus::prelude::*;

use crate::queries::{use_api_query, QueryKey};
use crate::views::home::AppHeader;
use crate::{AiReportDialog, PercentageCard};

/// General statistics for the signed-in user.
#[component]
pub fn StatisticsView(on_navigate_home: EventHandler<()>) -> Element {
    let best = use_api_query(QueryKey::BestOnDietSequence, |client| async move {
        client.best_on_diet_sequence().await
    });
    let total = use_api_query(QueryKey::TotalMeals, |client| async move { client.total_meals().await });
    let within = use_api_query(QueryKey::MealsWithinDiet, |client| async move {
        client.total_meals_within_diet().await
    });
    let outside = use_api_query(QueryKey::MealsOutsideDiet, |client| async move {
        client.total_meals_outside_diet().await
    });

    rsx! {
        div {
            class: "page",
            AppHeader {}

            PercentageCard { back: true, on_navigate: move |_| on_navigate_home.call(()) }

            section {
                class: "stats",
                div {
                    class: "stats-toolbar",
                    h2 { "Estatísticas gerais" }
                    AiReportDialog {}
                }

                StatTile {
                    value: count_text(&best.read()),
                    label: "melhor sequência de pratos dentro da dieta",
                }
                StatTile {
                    value: count_text(&total.read()),
                    label: "refeições registradas",
                }
                div {
                    class: "stats-row",
                    StatTile {
                        value: count_text(&within.read()),
                        label: "refeições dentro da dieta",
                        tone: "healthy",
                    }
                    StatTile {
                        value: count_text(&outside.read()),
                        label: "refeições fora da dieta",
                        tone: "unhealthy",
                    }
                }
            }
        }
    }
}

/// Count as text; `…` while loading, `-` on error.
fn count_text(state: &Option<Result<u64, String>>) -> String {
    match state {
        Some(Ok(n)) => n.to_string(),
        Some(Err(_)) => "-".to_string(),
        None => "…".to_string(),
    }
}

#[component]
fn StatTile(
    value: String,
    label: String,
    #[props(default = "neutral".to_string())] tone: String,
) -> Element {
    rsx! {
        div {
            class: "stat-tile {tone}",
            strong { "{value}" }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text_states() {
        assert_eq!(count_text(&None), "…");
        assert_eq!(count_text(&Some(Ok(12))), "12");
        assert_eq!(count_text(&Some(Err("falhou".to_string()))), "-");
    }
}
