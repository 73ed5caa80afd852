use api::gamification::{
    detect_progress, experience_percentage, honorific_title, remaining_experience, Progress,
};
use api::GamificationStatus;
use dioxus::prelude::*;
use store::DailyDietConfig;

use crate::icons::{FaChevronDown, FaStar, FaTrophy, FaUser};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::queries::{use_api_query, QueryKey};
use crate::{sleep_secs, Icon, SignOutButton};

/// Level, credits and XP for the signed-in user, with a dropdown holding the
/// profile and the sign-out button. Celebrates level-ups.
#[component]
pub fn GamificationBadge() -> Element {
    let config = use_context::<DailyDietConfig>();
    let mut notifications = use_notifications();
    let status = use_api_query(QueryKey::GamificationStatus, |client| async move {
        client.gamification_status().await
    });
    let profile = use_api_query(QueryKey::Profile, |client| async move { client.get_profile().await });

    let mut previous = use_signal(|| Option::<GamificationStatus>::None);
    let mut celebration = use_signal(|| Option::<Progress>::None);
    let mut open = use_signal(|| false);

    let celebration_secs = config.gamification.celebration_secs;
    use_effect(move || {
        let current = match &*status.read() {
            Some(Ok(s)) => s.clone(),
            _ => return,
        };
        let progress = detect_progress(previous.peek().as_ref(), &current);
        previous.set(Some(current));

        if let Some(shown) = celebration_for(progress, celebration_secs) {
            tracing::info!("level up");
            celebration.set(Some(shown));
            spawn(async move {
                sleep_secs(celebration_secs).await;
                celebration.set(None);
            });
        } else if progress.earned_credit() {
            notify(&mut notifications, NoticeLevel::Info, "Você ganhou 1 crédito!");
        }
    });

    let current = match &*status.read() {
        Some(Ok(s)) => s.clone(),
        Some(Err(message)) => {
            return rsx! {
                div { class: "badge badge-error", title: "{message}", "--" }
            };
        }
        None => {
            return rsx! {
                div { class: "badge skeleton" }
            };
        }
    };

    let title = if current.title.trim().is_empty() {
        honorific_title(current.level).to_string()
    } else {
        current.title.clone()
    };
    let percent = experience_percentage(&current);
    let bar_style = format!("width: {percent:.0}%");
    let xp_caption = format!(
        "{:.0} / {:.0} XP · faltam {} XP",
        current.experience,
        current.total_experience_for_next_level,
        remaining_experience(&current)
    );
    let (name, email) = match &*profile.read() {
        Some(Ok(p)) => (p.display_name().to_string(), p.email.clone()),
        _ => (String::new(), String::new()),
    };

    rsx! {
        div {
            class: "badge-wrapper",
            button {
                class: "badge",
                onclick: move |_| open.toggle(),
                Icon { icon: FaTrophy, width: 14, height: 14 }
                span { "Nível {current.level}" }
                span { class: "badge-credits", "{current.credits_earned} créditos" }
                Icon { icon: FaChevronDown, width: 10, height: 10 }
            }

            if open() {
                div {
                    class: "badge-dropdown",
                    div {
                        class: "badge-profile",
                        Icon { icon: FaUser, width: 14, height: 14 }
                        div {
                            p { class: "badge-name", "{name}" }
                            p { class: "badge-email", "{email}" }
                        }
                    }
                    dl {
                        class: "badge-stats",
                        dt { "Nível" }
                        dd { "{current.level}" }
                        dt { "Créditos" }
                        dd { "{current.credits_earned}" }
                        dt { "Título" }
                        dd { "{title}" }
                    }
                    div {
                        class: "xp-bar",
                        div { class: "xp-bar-fill", style: "{bar_style}" }
                    }
                    p { class: "xp-caption", "{xp_caption}" }
                    SignOutButton { class: "btn btn-outline w-full" }
                }
            }
        }

        if let Some(progress) = celebration() {
            div {
                class: "celebration",
                onclick: move |_| celebration.set(None),
                div {
                    class: "celebration-card",
                    Icon { icon: FaStar, width: 48, height: 48 }
                    h2 { "Parabéns!" }
                    p { "Você alcançou o nível {current.level}: {title}" }
                    if progress.earned_credit() {
                        p { class: "celebration-credit", "Você ganhou 1 crédito!" }
                    }
                }
            }
        }
    }
}

/// The overlay to show for `progress`, if any. Zero seconds turns it off,
/// and a credit without a level-up falls through to a toast.
fn celebration_for(progress: Progress, secs: u32) -> Option<Progress> {
    (progress.leveled_up && secs > 0).then_some(progress)
}
