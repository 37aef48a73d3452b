use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single entry of a parsed RSS or Atom document.
///
/// `description` and `summary` are aliases filled from the same element
/// (`<description>` in RSS, `<summary>` in Atom).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub media_thumbnails: Vec<String>,
    pub enclosures: Vec<Enclosure>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enclosure {
    pub mime_type: Option<String>,
    pub url: String,
}

/// Image picked to illustrate a blog summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub image_url: String,
    pub srcset: Option<String>,
    pub sizes: Option<String>,
}

/// Display-ready summary of the newest blog post.
///
/// `image_url` is absent only when no thumbnail could be found at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogSummary {
    pub title: String,
    pub link: String,
    pub date: DateTime<FixedOffset>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}
