use thiserror::Error;

/// Main error type for the AI engine
#[derive(Error, Debug)]
pub enum HiveAiError {
    /// No token survived tokenization across the whole corpus
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,

    /// Request data the engine cannot work with
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file errors
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Filesystem errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for HiveAiError {
    fn from(s: String) -> Self {
        HiveAiError::Other(s)
    }
}

impl From<&str> for HiveAiError {
    fn from(s: &str) -> Self {
        HiveAiError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, HiveAiError>;
