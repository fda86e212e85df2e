pub mod tfidf;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::Result;

pub use tfidf::TfidfRanker;
pub use tokenizer::{TokenPattern, Tokenizer};

/// Trait for text similarity implementations
pub trait Ranker: Send + Sync {
    /// Score every candidate against the query, in candidate order (0.0 - 1.0)
    fn score(&self, query: &str, candidates: &[&str]) -> Result<Vec<f64>>;

    /// Get ranker name for logging
    fn name(&self) -> &str;

    /// Score, filter and order candidates (highest first)
    fn rank(
        &self,
        query: &str,
        candidates: &[&str],
        options: &RankOptions,
    ) -> Result<Vec<RankedCandidate>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let scores = self.score(query, candidates)?;
        Ok(select(scores, options))
    }
}

/// Candidate position with similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    /// Index into the candidate slice
    pub index: usize,
    pub score: f64,
}

impl RankedCandidate {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}

/// Relevance cut-off and result cap for one ranking call
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RankOptions {
    /// Keep only scores strictly above this value
    pub threshold: Option<f64>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl RankOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn accepts(&self, score: f64) -> bool {
        self.threshold.map_or(true, |threshold| score > threshold)
    }
}

/// Apply threshold, order by score descending (ties by input order), then cap
pub fn select(scores: Vec<f64>, options: &RankOptions) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = scores
        .into_iter()
        .enumerate()
        .filter(|(_, score)| options.accepts(*score))
        .map(|(index, score)| RankedCandidate::new(index, score))
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.index.cmp(&b.index))
    });

    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }

    ranked
}
