//! # API crate: typed client for the Daily Diet REST API
//!
//! Everything the frontends know about the remote service lives here: the
//! wire models, one client method per endpoint, the session object that owns
//! the bearer token, and the small pure helpers the views use to present
//! server numbers.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: shared `reqwest` client, base URL, bearer token, response decoding |
//! | [`endpoints`] | One method per remote endpoint (`/sessions`, `/users`, `/meals/*`, `/profile`, `/gamification/status`) |
//! | [`error`] | [`ApiError`], the single error type every call returns |
//! | [`models`] | Request and response bodies (camelCase on the wire) |
//! | [`session`] | [`Session`]: restore / sign in / sign out lifecycle over a [`store::TokenStore`] |
//! | [`diet`] | Diet percentage formatting |
//! | [`gamification`] | Honorific titles, XP progress, level-up and credit edge detection |
//!
//! No call retries, times out, or caches. Callers decide what to refetch.

pub mod client;
pub mod diet;
pub mod endpoints;
pub mod error;
pub mod gamification;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    AiReport, AuthenticateRequest, GamificationStatus, Ingredient, Meal, MealGroup, MealInput,
    Profile, Recipe, RegisterRequest,
};
pub use session::{Session, SessionPhase};
