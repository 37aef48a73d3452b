use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Marker opening a tag reference in page front-matter, e.g. `tag#climate`.
pub const TAG_PREFIX: &str = "tag#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Dataset,
    Reuse,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Dataset, ResourceKind::Reuse];

    /// Front-matter key listing references of this kind.
    pub fn front_matter_key(&self) -> &'static str {
        match self {
            ResourceKind::Dataset => "datasets",
            ResourceKind::Reuse => "reuses",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            ResourceKind::Dataset => "datasets",
            ResourceKind::Reuse => "reuses",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Dataset => f.write_str("dataset"),
            ResourceKind::Reuse => f.write_str("reuse"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Resource {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub tags: Vec<String>,
    #[serde(skip)]
    pub private: bool,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Resource {
    pub fn is_visible(&self) -> bool {
        !self.private && self.deleted_at.is_none()
    }
}

/// One entry of a front-matter reference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceReference {
    /// A slug or an id.
    Direct(String),
    /// A tag marker. Holds the marker only, the tag value after it is dropped.
    Tag(String),
}

impl ResourceReference {
    /// `None` for null or blank entries.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }
        if raw.starts_with(TAG_PREFIX) {
            // FIXME: resolve by `raw[TAG_PREFIX.len()..]` instead of the bare marker.
            return Some(Self::Tag(TAG_PREFIX.to_string()));
        }
        Some(Self::Direct(raw.to_string()))
    }
}
