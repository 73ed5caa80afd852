//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{load_config, make_session, make_token_store, sleep_secs, AppSession, PlatformTokenStore};

pub mod views;

pub const APP_CSS: Asset = asset!("/assets/styling/dailydiet.css");

mod auth;
pub use auth::{use_auth, use_session, AppProvider, AuthProvider, AuthState, SignOutButton};

pub mod guard;
pub use guard::{decide, Access, Destination, GuardDecision, RouteGuard};

pub mod queries;
pub use queries::{invalidate, use_api_query, use_query_cache, QueryCache, QueryKey};

pub mod forms;
pub use forms::{FieldErrors, MealForm, SignInForm, SignUpForm};

pub mod notifications;
pub use notifications::{notify, use_notifications, NoticeLevel, Notifications};

mod toaster;
pub use toaster::Toaster;

pub mod markdown;

mod gamification_badge;
pub use gamification_badge::GamificationBadge;

mod percentage_card;
pub use percentage_card::PercentageCard;

mod meal_form;
pub use meal_form::MealFormDialog;

mod meal_details;
pub use meal_details::MealDetailsDialog;

mod ai_report_dialog;
pub use ai_report_dialog::AiReportDialog;

mod recipe_dialog;
pub use recipe_dialog::{RecipeCard, RecipeDialog};
