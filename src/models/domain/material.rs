use serde::{Deserialize, Serialize};

use crate::models::dto::request::NewMaterial;

/// Assumed reading speed for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;
const PREVIEW_CHARS: usize = 150;

/// Static learning content with a topic tag.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Material {
    pub id: u32,
    pub title: String,
    pub content: String,
    /// Category tag, matched case-insensitively by topic queries.
    pub topic: String,
    /// Authoring teacher.
    pub author_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_url: Option<String>,
}

impl Material {
    pub fn new(id: u32, title: &str, content: &str, topic: &str, author_id: u32) -> Self {
        Material {
            id,
            title: title.to_string(),
            content: content.to_string(),
            topic: topic.to_string(),
            author_id,
            resource_url: None,
        }
    }

    pub fn from_request(id: u32, request: NewMaterial) -> Self {
        Material {
            id,
            title: request.title,
            content: request.content,
            topic: request.topic,
            author_id: request.author_id,
            resource_url: request.resource_url,
        }
    }

    /// Estimated reading time: `ceil(words / 200)`, never less than a minute.
    pub fn reading_time_minutes(&self) -> u32 {
        let words = self.content.split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
    }

    /// First 150 characters, with an ellipsis when truncated. Meant for list
    /// views.
    pub fn preview(&self) -> String {
        if self.content.chars().count() <= PREVIEW_CHARS {
            return self.content.clone();
        }
        let cut: String = self.content.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    }

    pub fn has_resource(&self) -> bool {
        self.resource_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
