use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_ROLE_LEVEL: &str = "Mid-level";

/// A stored LinkedIn profile + pitch deck pair with its icebreaker analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LinkedInIcebreaker {
    pub id: i64,
    pub prospect_name: String,
    pub company_name: String,
    pub linkedin_bio: String,
    pub pitch_deck: String,
    pub role_level: String,
    pub icebreaker_analysis: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /linkedin-icebreakers.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIcebreakerRequest {
    pub prospect_name: String,
    pub company_name: String,
    pub linkedin_bio: String,
    pub pitch_deck: String,
    #[serde(default = "default_role_level")]
    pub role_level: String,
    pub custom_prompt: Option<String>,
}

fn default_role_level() -> String {
    DEFAULT_ROLE_LEVEL.to_string()
}

/// Insert payload. `icebreaker_analysis` must already be computed.
#[derive(Debug, Clone, Serialize)]
pub struct NewIcebreaker<'a> {
    pub prospect_name: &'a str,
    pub company_name: &'a str,
    pub linkedin_bio: &'a str,
    pub pitch_deck: &'a str,
    pub role_level: &'a str,
    pub icebreaker_analysis: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_level_defaults_when_omitted() {
        let req: CreateIcebreakerRequest = serde_json::from_value(json!({
            "prospect_name": "Dana Reyes",
            "company_name": "Northwind",
            "linkedin_bio": "VP of Operations at Northwind",
            "pitch_deck": "Our platform cuts onboarding time in half"
        }))
        .unwrap();
        assert_eq!(req.role_level, "Mid-level");
        assert!(req.custom_prompt.is_none());
    }

    #[test]
    fn test_explicit_role_level_kept() {
        let req: CreateIcebreakerRequest = serde_json::from_value(json!({
            "prospect_name": "Dana Reyes",
            "company_name": "Northwind",
            "linkedin_bio": "VP of Operations at Northwind",
            "pitch_deck": "Our platform cuts onboarding time in half",
            "role_level": "Executive"
        }))
        .unwrap();
        assert_eq!(req.role_level, "Executive");
    }
}
