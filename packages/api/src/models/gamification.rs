use serde::{Deserialize, Serialize};

/// Server-computed progress summary from `GET /gamification/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GamificationStatus {
    pub experience: f64,
    pub level: i64,
    pub total_experience_for_next_level: f64,
    pub title: String,
    pub credits_earned: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_decodes() {
        let body = r#"{"experience":42.7,"level":3,"totalExperienceForNextLevel":100,"title":"Iniciante Nutricional","creditsEarned":2}"#;
        let status: GamificationStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.level, 3);
        assert_eq!(status.total_experience_for_next_level, 100.0);
        assert_eq!(status.credits_earned, 2);
    }
}
