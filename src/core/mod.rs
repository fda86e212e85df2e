pub mod record;
pub mod result;

pub use record::{content_text, ContentItem, TextRecord, User};
pub use result::{
    to_percentage, ModerationAction, ModerationReport, SimilarityResult, SkillMatch,
    UserRecommendation,
};
