//! # Hive AI Engine
//!
//! Heuristic "AI" features for the Hive web app:
//! - TF-IDF cosine similarity ranking, rebuilt per request
//! - User, skill and event recommendations
//! - Smart search over arbitrary content records
//! - Keyword-based content moderation
//! - Interfaces: Rust library, HTTP API (`server` feature), CLI (`cli` feature)
//!
//! ## Example Usage
//!
//! ```rust
//! use hive_ai_engine::{AiEngine, EngineOptions};
//!
//! fn main() -> hive_ai_engine::Result<()> {
//!     let engine = AiEngine::new(EngineOptions::default())?;
//!
//!     let matches = engine.match_skills(
//!         "web design",
//!         vec!["graphic design".to_string(), "plumbing".to_string()],
//!     )?;
//!
//!     assert_eq!(matches[0].skill, "graphic design");
//!     println!("{} - {}%", matches[0].skill, matches[0].compatibility);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod moderation;
pub mod ranking;

#[cfg(feature = "server")]
pub mod api;

// Re-export primary types
pub use crate::core::{
    ContentItem, ModerationAction, ModerationReport, SimilarityResult, SkillMatch, TextRecord,
    User, UserRecommendation,
};
pub use config::ServiceConfig;
pub use engine::{AiEngine, EngineOptions};
pub use error::{HiveAiError, Result};
pub use moderation::KeywordModerator;
pub use ranking::{RankOptions, RankedCandidate, Ranker, TfidfRanker, TokenPattern};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
