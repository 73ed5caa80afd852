use api::diet::{calculate_diet_percentage, diet_ratio, DietBand};
use dioxus::prelude::*;

use crate::icons::{FaArrowLeft, FaArrowRight};
use crate::queries::{use_api_query, QueryKey};
use crate::Icon;

/// Share of on-diet meals, coloured by band.
///
/// On home it links forward to statistics; with `back` set it becomes the
/// statistics header and links back home.
#[component]
pub fn PercentageCard(
    on_navigate: EventHandler<()>,
    #[props(default)] back: bool,
) -> Element {
    let total = use_api_query(QueryKey::TotalMeals, |client| async move { client.total_meals().await });
    let within = use_api_query(QueryKey::MealsWithinDiet, |client| async move {
        client.total_meals_within_diet().await
    });

    let (total, within) = match (&*total.read(), &*within.read()) {
        (Some(Ok(t)), Some(Ok(w))) => (Some(*t), Some(*w)),
        (Some(Err(_)), _) | (_, Some(Err(_))) => (None, None),
        _ => {
            return rsx! {
                div { class: "percentage-card skeleton" }
            };
        }
    };

    let band = DietBand::of(diet_ratio(total, within));
    let text = calculate_diet_percentage(total, within);
    // The non-empty case comes back without the percent sign
    let text = if text.ends_with('%') { text } else { format!("{text}%") };

    let class = match band {
        DietBand::Healthy => "percentage-card healthy",
        DietBand::Unhealthy => "percentage-card unhealthy",
        DietBand::Empty => "percentage-card empty",
    };
    let caption = if band == DietBand::Empty {
        "Nenhuma refeição adicionada ainda"
    } else {
        "das refeições dentro da dieta"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_navigate.call(()),
            if back {
                span { class: "percentage-card-icon left",
                    Icon { icon: FaArrowLeft, width: 16, height: 16 }
                }
            } else {
                span { class: "percentage-card-icon right",
                    Icon { icon: FaArrowRight, width: 16, height: 16 }
                }
            }
            strong { class: "percentage-value", "{text}" }
            span { class: "percentage-caption", "{caption}" }
        }
    }
}
