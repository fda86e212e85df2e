use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form JSON object supplied by the web app (posts, listings, events)
pub type ContentItem = Map<String, Value>;

/// Fields concatenated to describe a content item or event
const CONTENT_TEXT_FIELDS: [&str; 3] = ["title", "description", "category"];

/// Platform user as sent by the web app
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub interests: Vec<String>,

    #[serde(default)]
    pub location: Option<String>,
}

impl User {
    /// Create a user with skills and interests
    pub fn new<S: Into<String>>(
        id: i64,
        skills: impl IntoIterator<Item = S>,
        interests: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id,
            skills: skills.into_iter().map(Into::into).collect(),
            interests: interests.into_iter().map(Into::into).collect(),
            location: None,
        }
    }

    /// Skills followed by interests, space-joined
    pub fn feature_text(&self) -> String {
        self.skills
            .iter()
            .chain(self.interests.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A key paired with the text the ranker sees for it
#[derive(Debug, Clone, PartialEq)]
pub struct TextRecord<K> {
    pub key: K,
    pub text: String,
}

impl<K> TextRecord<K> {
    pub fn new(key: K, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }
}

impl TextRecord<ContentItem> {
    /// Build a record from `title description category`
    pub fn from_content(item: ContentItem) -> Self {
        let text = content_text(&item);
        Self { key: item, text }
    }
}

/// `title description category` of an item, missing fields as empty strings
pub fn content_text(item: &ContentItem) -> String {
    CONTENT_TEXT_FIELDS
        .iter()
        .map(|field| item.get(*field).map(field_text).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one JSON value the way it should appear in the text blob
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
