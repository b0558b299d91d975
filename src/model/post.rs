use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Paragraph,
    Link,
}

/// One unit of post body. Link blocks carry no target, only their text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(rename = "content")]
    pub text: String,
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self { kind: ContentKind::Paragraph, text: text.into() }
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self { kind: ContentKind::Link, text: text.into() }
    }
}

/// Everything a caller hands to a post view. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub author: Author,
    pub published_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}
