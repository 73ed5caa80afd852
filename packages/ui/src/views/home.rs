use api::{Meal, MealGroup};
use dioxus::prelude::*;

use crate::icons::{FaPlus, FaUtensils};
use crate::forms::format_meal_date;
use crate::queries::{use_api_query, QueryKey};
use crate::views::MealListSkeleton;
use crate::{GamificationBadge, Icon, MealDetailsDialog, MealFormDialog, PercentageCard, RecipeDialog};

/// Which meal dialog is open, if any.
#[derive(Clone, Debug, PartialEq)]
enum MealDialog {
    Closed,
    Create,
    Details(Meal),
    Edit(Meal),
}

/// Dashboard: diet percentage, meal list, and the meal and recipe dialogs.
#[component]
pub fn HomeView(on_navigate_statistics: EventHandler<()>) -> Element {
    let meals = use_api_query(QueryKey::Meals, |client| async move { client.list_meals().await });
    let mut dialog = use_signal(|| MealDialog::Closed);

    rsx! {
        div {
            class: "page",
            AppHeader {}

            PercentageCard { on_navigate: move |_| on_navigate_statistics.call(()) }

            section {
                class: "meals-section",
                div {
                    class: "meals-toolbar",
                    h2 { "Refeições" }
                    div {
                        class: "meals-actions",
                        RecipeDialog {}
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| dialog.set(MealDialog::Create),
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            " Nova refeição"
                        }
                    }
                }

                match &*meals.read() {
                    None => rsx! { MealListSkeleton {} },
                    Some(Err(message)) => rsx! {
                        p { class: "field-error", "{message}" }
                    },
                    Some(Ok(groups)) if groups.is_empty() => rsx! {
                        p { class: "empty-state", "Nenhuma refeição cadastrada. Comece adicionando sua primeira refeição!" }
                    },
                    Some(Ok(groups)) => rsx! {
                        MealList {
                            groups: groups.clone(),
                            on_select: move |meal| dialog.set(MealDialog::Details(meal)),
                        }
                    },
                }
            }
        }

        match dialog() {
            MealDialog::Closed => rsx! {},
            MealDialog::Create => rsx! {
                MealFormDialog { meal: None, on_close: move |_| dialog.set(MealDialog::Closed) }
            },
            MealDialog::Edit(meal) => rsx! {
                MealFormDialog { meal: Some(meal), on_close: move |_| dialog.set(MealDialog::Closed) }
            },
            MealDialog::Details(meal) => rsx! {
                MealDetailsDialog {
                    meal,
                    on_edit: move |meal| dialog.set(MealDialog::Edit(meal)),
                    on_close: move |_| dialog.set(MealDialog::Closed),
                }
            },
        }
    }
}

/// Brand and gamification badge, shared by home and statistics.
#[component]
pub(crate) fn AppHeader() -> Element {
    rsx! {
        header {
            class: "app-header",
            div {
                class: "brand",
                Icon { icon: FaUtensils, width: 22, height: 22 }
                span { "Daily Diet" }
            }
            GamificationBadge {}
        }
    }
}

#[component]
fn MealList(groups: Vec<MealGroup>, on_select: EventHandler<Meal>) -> Element {
    rsx! {
        div {
            class: "meal-list",
            for group in groups.iter() {
                div {
                    key: "{group.date}",
                    class: "meal-group",
                    h3 { class: "meal-group-date", {format_meal_date(&group.date)} }
                    for meal in group.meals.iter() {
                        MealRow { key: "{meal.id}", meal: meal.clone(), on_select }
                    }
                }
            }
        }
    }
}

#[component]
fn MealRow(meal: Meal, on_select: EventHandler<Meal>) -> Element {
    let selected = meal.clone();
    rsx! {
        button {
            class: "meal-row",
            onclick: move |_| on_select.call(selected.clone()),
            span { class: "meal-time", "{meal.time}" }
            span { class: "meal-divider" }
            span { class: "meal-name", "{meal.name}" }
            span {
                class: if meal.is_on_diet { "diet-dot on" } else { "diet-dot off" },
                title: if meal.is_on_diet { "Dentro da dieta" } else { "Fora da dieta" },
            }
        }
    }
}
