use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of a page file in the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    Md,
    Html,
}

impl Extension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw and browsable URLs of a page, before the extension is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUrls {
    pub raw_url: String,
    pub gh_url: String,
}

/// Fully resolved location of a page file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub raw_url: String,
    pub gh_url: String,
    pub extension: Extension,
}

impl PageLocation {
    pub fn new(urls: &RepositoryUrls, extension: Extension) -> Self {
        Self {
            raw_url: format!("{}.{}", urls.raw_url, extension),
            gh_url: format!("{}.{}", urls.gh_url, extension),
            extension,
        }
    }
}

/// Outcome of fetching a page for a single locale, memoized in the fresh tier.
///
/// `content` is `None` when the repository answered "not found", or when the
/// fetch failed and the fallback tier had nothing for this key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFetch {
    pub content: Option<String>,
    pub gh_url: String,
    pub extension: Extension,
    /// The content was read from the fallback tier after a failed fetch.
    pub from_fallback: bool,
}

/// Content of a page that some fetch, remote or cached, produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    pub content: String,
    pub gh_url: String,
    pub extension: Extension,
}
