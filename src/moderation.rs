//! Keyword-based content moderation.
//!
//! Words are matched as plain substrings of the lower-cased text, so
//! "inoffensiveness" is flagged for "offensive". Callers rely on that
//! behaviour; word-boundary matching would change existing verdicts.

use crate::core::{ModerationAction, ModerationReport};

/// Words that flag content, checked in this order
pub const FLAGGED_WORDS: [&str; 5] = ["spam", "scam", "hate", "offensive", "inappropriate"];

/// Score added per flagged word
pub const WORD_WEIGHT: f64 = 0.2;

/// Content scoring at or above this goes to review
pub const REVIEW_THRESHOLD: f64 = 0.3;

const MAX_TOXICITY: f64 = 1.0;

/// Fixed word-list moderator
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordModerator;

impl KeywordModerator {
    pub fn new() -> Self {
        Self
    }

    pub fn moderate(&self, text: &str) -> ModerationReport {
        let text = text.to_lowercase();

        let mut flags = Vec::new();
        let mut toxicity_score = 0.0;

        for word in FLAGGED_WORDS {
            if text.contains(word) {
                flags.push(word.to_string());
                toxicity_score += WORD_WEIGHT;
            }
        }

        let is_safe = toxicity_score < REVIEW_THRESHOLD;

        ModerationReport {
            is_safe,
            toxicity_score: f64::min(toxicity_score, MAX_TOXICITY),
            flags,
            action: if is_safe {
                ModerationAction::Approve
            } else {
                ModerationAction::Review
            },
        }
    }
}
