use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

use crate::core::{
    ContentItem, ModerationReport, SimilarityResult, SkillMatch, TextRecord, User,
    UserRecommendation,
};
use crate::error::Result;
use crate::moderation::KeywordModerator;
use crate::ranking::{RankOptions, Ranker, TfidfRanker, TokenPattern};

/// Thresholds and caps of every ranking endpoint.
///
/// With the default `TokenPattern::Whitespace`, terms are case-sensitive and
/// smart search lower-cases only the query, so capitalized content such as
/// "Rust Meetup" never matches "rust". Set `token_pattern: word` to lower-case
/// every document before matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub token_pattern: TokenPattern,
    pub users: RankOptions,
    pub search: RankOptions,
    pub skills: RankOptions,
    pub events: RankOptions,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            token_pattern: TokenPattern::Whitespace,
            users: RankOptions::new().with_threshold(0.1).with_limit(10),
            search: RankOptions::new().with_threshold(0.1).with_limit(20),
            skills: RankOptions::new(),
            events: RankOptions::new().with_limit(10),
        }
    }
}

/// Request-scoped recommendation, search and moderation operations
pub struct AiEngine {
    ranker: Arc<dyn Ranker>,
    moderator: KeywordModerator,
    options: EngineOptions,
}

impl AiEngine {
    /// Create engine with the TF-IDF ranker
    pub fn new(options: EngineOptions) -> Result<Self> {
        let ranker = Arc::new(TfidfRanker::new(options.token_pattern)?);
        Ok(Self::with_ranker(ranker, options))
    }

    /// Create engine around a custom ranker
    pub fn with_ranker(ranker: Arc<dyn Ranker>, options: EngineOptions) -> Self {
        Self {
            ranker,
            moderator: KeywordModerator::new(),
            options,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn ranker_name(&self) -> &str {
        self.ranker.name()
    }

    /// Rank records against a query, carrying each record's key through
    pub fn rank_records<K>(
        &self,
        query: &str,
        records: Vec<TextRecord<K>>,
        options: &RankOptions,
    ) -> Result<Vec<SimilarityResult<K>>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        let ranked = self.ranker.rank(query, &texts, options)?;

        let mut keys: Vec<Option<K>> = records.into_iter().map(|r| Some(r.key)).collect();
        let results: Vec<SimilarityResult<K>> = ranked
            .into_iter()
            .filter_map(|candidate| {
                keys.get_mut(candidate.index)
                    .and_then(Option::take)
                    .map(|key| SimilarityResult::new(key, candidate.score))
            })
            .collect();

        tracing::debug!(
            "Ranked {} candidates with {}: {} kept ({:.2}ms)",
            keys.len(),
            self.ranker.name(),
            results.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(results)
    }

    /// Users most similar to `user` by skills and interests
    pub fn recommend_users(
        &self,
        user: &User,
        all_users: &[User],
    ) -> Result<Vec<UserRecommendation>> {
        let others: Vec<TextRecord<i64>> = all_users
            .iter()
            .filter(|other| other.id != user.id)
            .map(|other| TextRecord::new(other.id, other.feature_text()))
            .collect();

        let ranked = self.rank_records(&user.feature_text(), others, &self.options.users)?;
        Ok(ranked.into_iter().map(UserRecommendation::from).collect())
    }

    /// Content items relevant to a free-text query, with scores merged in
    pub fn smart_search(&self, query: &str, content: Vec<ContentItem>) -> Result<Vec<ContentItem>> {
        let records = content.into_iter().map(TextRecord::from_content).collect();
        let ranked = self.rank_records(&query.to_lowercase(), records, &self.options.search)?;
        Ok(merge_scores(ranked, "relevance_score"))
    }

    /// Wanted skills ordered by similarity to the offered one
    pub fn match_skills(
        &self,
        skill_offered: &str,
        skills_wanted: Vec<String>,
    ) -> Result<Vec<SkillMatch>> {
        let records = skills_wanted
            .into_iter()
            .map(|skill| {
                let text = skill.clone();
                TextRecord::new(skill, text)
            })
            .collect();

        let ranked = self.rank_records(skill_offered, records, &self.options.skills)?;
        Ok(ranked.into_iter().map(SkillMatch::from).collect())
    }

    /// Events matching the user's interests, with scores merged in
    pub fn recommend_events(
        &self,
        user_interests: &[String],
        available_events: Vec<ContentItem>,
    ) -> Result<Vec<ContentItem>> {
        let profile = user_interests.join(" ");
        let records = available_events
            .into_iter()
            .map(TextRecord::from_content)
            .collect();

        let ranked = self.rank_records(&profile, records, &self.options.events)?;
        Ok(merge_scores(ranked, "recommendation_score"))
    }

    /// Keyword moderation verdict for a piece of text
    pub fn moderate(&self, text: &str) -> ModerationReport {
        self.moderator.moderate(text)
    }
}

/// Append `<score_field>` and `match_percentage` to each ranked item
fn merge_scores(ranked: Vec<SimilarityResult<ContentItem>>, score_field: &str) -> Vec<ContentItem> {
    ranked
        .into_iter()
        .map(|result| {
            let mut item = result.key;
            item.insert(score_field.to_string(), json!(result.score));
            item.insert("match_percentage".to_string(), json!(result.percentage));
            item
        })
        .collect()
}
