use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A meal as listed by `GET /meals`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    pub time: String,
    pub is_on_diet: bool,
}

/// Meals sharing one calendar day, in the order the server returns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealGroup {
    pub date: String,
    pub meals: Vec<Meal>,
}

/// Body for `POST /meals` and `PUT /meals/{id}/update`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealInput {
    pub name: String,
    pub description: Option<String>,
    pub date_time: DateTime<Utc>,
    pub is_on_diet: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MealsListResponse {
    pub meals: Vec<MealGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TotalMealsResponse {
    pub meals_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MealsWithinDietResponse {
    pub meals_within_diet_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MealsOutsideDietResponse {
    pub meals_outside_diet_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BestOnDietSequenceResponse {
    pub best_on_diet_sequence: u64,
}
