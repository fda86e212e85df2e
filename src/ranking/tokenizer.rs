use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{HiveAiError, Result};

/// Word pattern used by `TokenPattern::Word`: runs of two or more word characters
const WORD_PATTERN: &str = r"(?u)\b\w\w+\b";

/// How documents are split into vocabulary terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPattern {
    /// Split on whitespace, keep case and punctuation
    #[default]
    Whitespace,
    /// Lower-case, then keep words of 2+ characters
    Word,
}

/// Splits documents into terms
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    word_re: Option<Regex>,
}

impl Tokenizer {
    pub fn new(pattern: TokenPattern) -> Result<Self> {
        let word_re = match pattern {
            TokenPattern::Whitespace => None,
            TokenPattern::Word => Some(
                Regex::new(WORD_PATTERN)
                    .map_err(|e| HiveAiError::Other(format!("Invalid token pattern: {}", e)))?,
            ),
        };

        Ok(Self { word_re })
    }

    pub fn pattern(&self) -> TokenPattern {
        if self.word_re.is_some() {
            TokenPattern::Word
        } else {
            TokenPattern::Whitespace
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match &self.word_re {
            None => text.split_whitespace().map(str::to_string).collect(),
            Some(re) => {
                let lower = text.to_lowercase();
                re.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
            }
        }
    }
}
