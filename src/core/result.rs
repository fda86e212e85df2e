use serde::{Deserialize, Serialize};

/// Ranked record with its similarity score
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult<K> {
    pub key: K,

    /// Cosine similarity (0.0 - 1.0)
    pub score: f64,

    /// floor(score * 100)
    pub percentage: u8,
}

impl<K> SimilarityResult<K> {
    pub fn new(key: K, score: f64) -> Self {
        Self {
            key,
            score,
            percentage: to_percentage(score),
        }
    }
}

/// Truncate a [0, 1] score to a whole percentage
pub fn to_percentage(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).floor() as u8
}

/// Entry of the user recommendation list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecommendation {
    pub user_id: i64,
    pub similarity_score: f64,
    pub match_percentage: u8,
}

impl From<SimilarityResult<i64>> for UserRecommendation {
    fn from(result: SimilarityResult<i64>) -> Self {
        Self {
            user_id: result.key,
            similarity_score: result.score,
            match_percentage: result.percentage,
        }
    }
}

/// Entry of the skill matching list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillMatch {
    pub skill: String,
    pub match_score: f64,
    pub compatibility: u8,
}

impl From<SimilarityResult<String>> for SkillMatch {
    fn from(result: SimilarityResult<String>) -> Self {
        Self {
            skill: result.key,
            match_score: result.score,
            compatibility: result.percentage,
        }
    }
}

/// What the web app should do with moderated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Review,
}

/// Verdict of the keyword moderator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModerationReport {
    pub is_safe: bool,

    /// Accumulated keyword weight, capped at 1.0
    pub toxicity_score: f64,

    /// Matched keywords, in word-list order
    pub flags: Vec<String>,

    pub action: ModerationAction,
}
