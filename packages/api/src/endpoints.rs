//! One method per remote endpoint.
//!
//! Each method performs exactly one HTTP call and unwraps the response
//! envelope. Errors are returned untouched for the caller to present.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    AiReport, AuthenticateRequest, AuthenticateResponse, BestOnDietSequenceResponse,
    GamificationStatus, MealGroup, MealInput, MealsListResponse, MealsOutsideDietResponse,
    MealsWithinDietResponse, Profile, ProfileResponse, Recipe, RecipeResponse, RegisterRequest,
    TotalMealsResponse,
};

impl ApiClient {
    /// `POST /sessions`. Does not touch the client's token; the session does.
    pub async fn authenticate(
        &self,
        request: &AuthenticateRequest,
    ) -> Result<AuthenticateResponse, ApiError> {
        self.send_json(self.request(Method::POST, "/sessions").json(request))
            .await
    }

    /// `POST /users`
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::POST, "/users").json(request))
            .await
    }

    /// `GET /profile`
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        let response: ProfileResponse = self.send_json(self.request(Method::GET, "/profile")).await?;
        Ok(response.user)
    }

    /// `GET /meals`, grouped by day.
    pub async fn list_meals(&self) -> Result<Vec<MealGroup>, ApiError> {
        let response: MealsListResponse = self.send_json(self.request(Method::GET, "/meals")).await?;
        Ok(response.meals)
    }

    /// `POST /meals`
    pub async fn create_meal(&self, meal: &MealInput) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::POST, "/meals").json(meal))
            .await
    }

    /// `PUT /meals/{id}/update`
    pub async fn update_meal(&self, meal_id: &str, meal: &MealInput) -> Result<(), ApiError> {
        let path = format!("/meals/{meal_id}/update");
        self.send_empty(self.request(Method::PUT, &path).json(meal))
            .await
    }

    /// `DELETE /meals/{id}`
    pub async fn delete_meal(&self, meal_id: &str) -> Result<(), ApiError> {
        let path = format!("/meals/{meal_id}");
        self.send_empty(self.request(Method::DELETE, &path)).await
    }

    /// `GET /meals/total`
    pub async fn total_meals(&self) -> Result<u64, ApiError> {
        let response: TotalMealsResponse =
            self.send_json(self.request(Method::GET, "/meals/total")).await?;
        Ok(response.meals_count)
    }

    /// `GET /meals/within-diet`
    pub async fn total_meals_within_diet(&self) -> Result<u64, ApiError> {
        let response: MealsWithinDietResponse = self
            .send_json(self.request(Method::GET, "/meals/within-diet"))
            .await?;
        Ok(response.meals_within_diet_count)
    }

    /// `GET /meals/outside-diet`
    pub async fn total_meals_outside_diet(&self) -> Result<u64, ApiError> {
        let response: MealsOutsideDietResponse = self
            .send_json(self.request(Method::GET, "/meals/outside-diet"))
            .await?;
        Ok(response.meals_outside_diet_count)
    }

    /// `GET /meals/best-diet-sequence`
    pub async fn best_on_diet_sequence(&self) -> Result<u64, ApiError> {
        let response: BestOnDietSequenceResponse = self
            .send_json(self.request(Method::GET, "/meals/best-diet-sequence"))
            .await?;
        Ok(response.best_on_diet_sequence)
    }

    /// `GET /meals/ai-report`
    pub async fn ai_report(&self) -> Result<AiReport, ApiError> {
        self.send_json(self.request(Method::GET, "/meals/ai-report"))
            .await
    }

    /// `GET /meals/generate-recipe`. Spends one credit server-side.
    pub async fn generate_recipe(&self) -> Result<Recipe, ApiError> {
        let response: RecipeResponse = self
            .send_json(self.request(Method::GET, "/meals/generate-recipe"))
            .await?;
        Ok(response.recipe)
    }

    /// `GET /gamification/status`
    pub async fn gamification_status(&self) -> Result<GamificationStatus, ApiError> {
        self.send_json(self.request(Method::GET, "/gamification/status"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mockito::Matcher;

    fn authed(server: &mockito::Server) -> ApiClient {
        let client = ApiClient::new(server.url());
        client.set_token(Some("tok-123".to_string()));
        client
    }

    fn sample_input() -> MealInput {
        MealInput {
            name: "Frango grelhado".to_string(),
            description: Some("200g com legumes".to_string()),
            date_time: Utc.with_ymd_and_hms(2024, 8, 12, 15, 30, 0).unwrap(),
            is_on_diet: true,
        }
    }

    #[tokio::test]
    async fn test_authenticate_posts_credentials_without_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/sessions")
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::Json(serde_json::json!({
                "email": "ana@example.com",
                "password": "secret1"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token":"jwt-abc"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let response = client
            .authenticate(&AuthenticateRequest {
                email: "ana@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.token, "jwt-abc");
        assert!(!client.has_token());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_register_posts_new_account() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/users")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "password": "secret1"
            })))
            .with_status(201)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        client
            .register(&RegisterRequest {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_meals_sends_bearer_and_unwraps_groups() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/meals")
            .match_header("authorization", "Bearer tok-123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals":[{"date":"12.08.24","meals":[{"id":"m1","time":"12:00","name":"Almoço","description":"Arroz","date":"2024-08-12T15:00:00.000Z","isOnDiet":true}]}]}"#,
            )
            .create_async()
            .await;

        let groups = authed(&server).list_meals().await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].meals[0].id, "m1");
        assert_eq!(groups[0].meals[0].description.as_deref(), Some("Arroz"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_update_delete_paths() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/meals")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "name": "Frango grelhado",
                "dateTime": "2024-08-12T15:30:00Z",
                "isOnDiet": true
            })))
            .with_status(201)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/meals/m1/update")
            .match_header("authorization", "Bearer tok-123")
            .with_status(204)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/meals/m1")
            .match_header("authorization", "Bearer tok-123")
            .with_status(204)
            .create_async()
            .await;

        let client = authed(&server);
        client.create_meal(&sample_input()).await.unwrap();
        client.update_meal("m1", &sample_input()).await.unwrap();
        client.delete_meal("m1").await.unwrap();

        create.assert_async().await;
        update.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_counters_unwrap_their_fields() {
        let mut server = mockito::Server::new_async().await;
        let _total = server
            .mock("GET", "/meals/total")
            .with_status(200)
            .with_body(r#"{"mealsCount":12}"#)
            .create_async()
            .await;
        let _within = server
            .mock("GET", "/meals/within-diet")
            .with_status(200)
            .with_body(r#"{"mealsWithinDietCount":9}"#)
            .create_async()
            .await;
        let _outside = server
            .mock("GET", "/meals/outside-diet")
            .with_status(200)
            .with_body(r#"{"mealsOutsideDietCount":3}"#)
            .create_async()
            .await;
        let _streak = server
            .mock("GET", "/meals/best-diet-sequence")
            .with_status(200)
            .with_body(r#"{"bestOnDietSequence":5}"#)
            .create_async()
            .await;

        let client = authed(&server);
        assert_eq!(client.total_meals().await.unwrap(), 12);
        assert_eq!(client.total_meals_within_diet().await.unwrap(), 9);
        assert_eq!(client.total_meals_outside_diet().await.unwrap(), 3);
        assert_eq!(client.best_on_diet_sequence().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_ai_endpoints() {
        let mut server = mockito::Server::new_async().await;
        let _report = server
            .mock("GET", "/meals/ai-report")
            .with_status(200)
            .with_body(r####"{"report":"### Resumo\nBoa semana."}"####)
            .create_async()
            .await;
        let _recipe = server
            .mock("GET", "/meals/generate-recipe")
            .with_status(200)
            .with_body(
                r#"{"recipe":{"name":"Omelete","ingredients":[{"name":"Ovo","amount":"2 unidades"}],"steps":["Bata os ovos","Cozinhe"]}}"#,
            )
            .create_async()
            .await;

        let client = authed(&server);
        let report = client.ai_report().await.unwrap();
        assert!(report.report.starts_with("### Resumo"));

        let recipe = client.generate_recipe().await.unwrap();
        assert_eq!(recipe.name, "Omelete");
        assert_eq!(recipe.ingredients[0].amount, "2 unidades");
        assert_eq!(recipe.steps.len(), 2);
    }

    #[tokio::test]
    async fn test_profile_and_status() {
        let mut server = mockito::Server::new_async().await;
        let _profile = server
            .mock("GET", "/profile")
            .with_status(200)
            .with_body(r#"{"user":{"name":"Ana","email":"ana@example.com","experience":40,"created_at":"2024-01-01"}}"#)
            .create_async()
            .await;
        let _status = server
            .mock("GET", "/gamification/status")
            .with_status(200)
            .with_body(r#"{"experience":40,"level":5,"totalExperienceForNextLevel":120,"title":"Explorador de Sabores","creditsEarned":1}"#)
            .create_async()
            .await;

        let client = authed(&server);
        assert_eq!(client.get_profile().await.unwrap().email, "ana@example.com");
        let status = client.gamification_status().await.unwrap();
        assert_eq!(status.level, 5);
        assert_eq!(status.title, "Explorador de Sabores");
    }
}
