use super::error::FeedError;
use super::model::{BlogSummary, FeedEntry};
use super::sanitizer::strip_structural_tags;
use super::thumbnail::resolve_thumbnail;
use super::FeedSource;
use crate::domain::shared::{Diagnostic, Resolved};
use crate::infrastructure::cache::CacheStore;
use crate::infrastructure::feed::parse_feed;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use std::sync::Arc;

/// Placeholder substituted with the language code in the feed URL template
pub const LANGUAGE_PLACEHOLDER: &str = "{lang}";

#[derive(Debug, Clone, PartialEq)]
pub struct FeedSettings {
    /// Feed URL containing a `{lang}` placeholder. `None` disables the promo.
    pub url_template: Option<String>,
    pub default_language: String,
}

/// Extracts a summary of the most recent blog post from a syndication feed.
pub struct FeedSummaryService {
    feed_source: Arc<dyn FeedSource>,
    cache: Arc<dyn CacheStore<BlogSummary>>,
    settings: FeedSettings,
}

impl FeedSummaryService {
    /// `cache` should be a capacity-bounded store; summaries are stored there
    /// without expiry.
    pub fn new(
        feed_source: Arc<dyn FeedSource>,
        cache: Arc<dyn CacheStore<BlogSummary>>,
        settings: FeedSettings,
    ) -> Self {
        Self {
            feed_source,
            cache,
            settings,
        }
    }

    /// Summary of the newest post in `preferred_language`, falling back to the
    /// default language feed. Never fails: an absent value means there is
    /// nothing to show.
    pub async fn get_latest_summary(&self, preferred_language: &str) -> Resolved<Option<BlogSummary>> {
        let cache_key = format!("blog-summary-{preferred_language}");
        if let Some(summary) = self.cache.get(&cache_key).await {
            tracing::debug!(language = preferred_language, "Blog summary cache hit");
            return Resolved::new(Some(summary)).with(Diagnostic::SummaryFromCache {
                language: preferred_language.to_string(),
            });
        }

        let Some(template) = self.settings.url_template.as_deref() else {
            tracing::debug!("No feed URL configured, skipping blog summary");
            return Resolved::new(None).with(Diagnostic::NotConfigured {
                component: "feed".to_string(),
            });
        };

        let mut diagnostics = Vec::new();
        let mut languages = vec![preferred_language];
        if self.settings.default_language != preferred_language {
            languages.push(self.settings.default_language.as_str());
        }

        for language in languages {
            let url = feed_url(template, language);
            match self.fetch_summary(&url).await {
                Ok(summary) => {
                    if language != preferred_language {
                        diagnostics.push(Diagnostic::DefaultLanguageUsed {
                            requested: preferred_language.to_string(),
                            used: language.to_string(),
                        });
                    }
                    self.cache.set(&cache_key, summary.clone(), None).await;
                    return Resolved::with_diagnostics(Some(summary), diagnostics);
                }
                Err(FeedError::Empty) => {
                    tracing::warn!(url = %url, language, "Feed has no entries");
                    diagnostics.push(Diagnostic::FeedEmpty {
                        language: language.to_string(),
                        url,
                    });
                }
                Err(err) => {
                    tracing::error!(url = %url, language, error = %err, "Error while fetching feed");
                    diagnostics.push(Diagnostic::FeedUnavailable {
                        language: language.to_string(),
                        url,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Resolved::with_diagnostics(None, diagnostics)
    }

    async fn fetch_summary(&self, url: &str) -> Result<BlogSummary, FeedError> {
        let body = self.feed_source.fetch_feed(url).await?;
        let entries = parse_feed(&body)?;
        // Feeds are reverse-chronological, the first entry is the newest
        let entry = entries.into_iter().next().ok_or(FeedError::Empty)?;
        summarize(&entry)
    }
}

/// Build the summary of one entry.
///
/// The body used for the image search is `content`, else `description`.
/// The text shown prefers `summary` over that body.
pub fn summarize(entry: &FeedEntry) -> Result<BlogSummary, FeedError> {
    let published = entry
        .published
        .as_deref()
        .ok_or_else(|| FeedError::Parse("entry has no publication date".to_string()))?;
    let date = parse_date(published)
        .ok_or_else(|| FeedError::Parse(format!("invalid publication date: {published}")))?;

    let content = entry
        .content
        .as_deref()
        .filter(|content| !content.is_empty())
        .or(entry.description.as_deref())
        .unwrap_or_default();
    let summary_source = entry.summary.as_deref().unwrap_or(content);
    let thumbnail = resolve_thumbnail(entry, content);

    Ok(BlogSummary {
        title: entry.title.clone().unwrap_or_default(),
        link: entry.link.clone().unwrap_or_default(),
        date,
        summary: strip_structural_tags(summary_source).trim().to_string(),
        image_url: thumbnail.as_ref().map(|t| t.image_url.clone()),
        srcset: thumbnail.as_ref().and_then(|t| t.srcset.clone()),
        sizes: thumbnail.and_then(|t| t.sizes),
    })
}

pub fn feed_url(template: &str, language: &str) -> String {
    template.replace(LANGUAGE_PLACEHOLDER, &urlencoding::encode(language))
}

/// Parse feed timestamps: RFC 3339 (Atom), RFC 2822 (RSS), or a naive ISO
/// date-time taken as UTC.
pub fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
}
