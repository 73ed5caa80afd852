use serde::{Deserialize, Serialize};

/// AI-generated diet report. `report` is Markdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiReport {
    pub report: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

/// AI-generated recipe, paid for with one credit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipeResponse {
    pub recipe: Recipe,
}
