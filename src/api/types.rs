use serde::{Deserialize, Serialize};

use crate::core::{ContentItem, SkillMatch, User, UserRecommendation};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub user: User,
    pub all_users: Vec<User>,

    /// 'users', 'skills' or 'events'; informational only
    pub recommendation_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ModerationRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SmartSearchRequest {
    pub query: String,
    pub content: Vec<ContentItem>,
}

/// Query string of `match-skills`
#[derive(Debug, Default, Deserialize)]
pub struct SkillMatchParams {
    pub skill_offered: Option<String>,
}

/// Body of `match-skills`: either the bare wanted list or a full object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SkillMatchBody {
    Wanted(Vec<String>),
    Full {
        #[serde(default)]
        skill_offered: Option<String>,
        skills_wanted: Vec<String>,
    },
}

impl SkillMatchBody {
    /// Offered skill from the body (preferred) or query string, and the wanted list
    pub fn resolve(self, params: SkillMatchParams) -> (Option<String>, Vec<String>) {
        match self {
            SkillMatchBody::Wanted(wanted) => (params.skill_offered, wanted),
            SkillMatchBody::Full {
                skill_offered,
                skills_wanted,
            } => (skill_offered.or(params.skill_offered), skills_wanted),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EventRecommendationRequest {
    pub user_interests: Vec<String>,
    pub available_events: Vec<ContentItem>,
}

#[derive(Debug, Serialize)]
pub struct UserRecommendationsResponse {
    pub recommendations: Vec<UserRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct SmartSearchResponse {
    pub results: Vec<ContentItem>,
}

#[derive(Debug, Serialize)]
pub struct SkillMatchResponse {
    pub matches: Vec<SkillMatch>,
}

#[derive(Debug, Serialize)]
pub struct EventRecommendationsResponse {
    pub recommendations: Vec<ContentItem>,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
