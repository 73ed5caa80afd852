//! Wire models for the remote API.

mod gamification;
mod meal;
mod recipe;
mod user;

pub use gamification::GamificationStatus;
pub use meal::{Meal, MealGroup, MealInput};
pub(crate) use meal::{
    BestOnDietSequenceResponse, MealsListResponse, MealsOutsideDietResponse,
    MealsWithinDietResponse, TotalMealsResponse,
};
pub use recipe::{AiReport, Ingredient, Recipe};
pub(crate) use recipe::RecipeResponse;
pub use user::{AuthenticateRequest, AuthenticateResponse, Profile, RegisterRequest};
pub(crate) use user::ProfileResponse;
