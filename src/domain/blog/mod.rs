pub mod error;
pub mod model;
pub mod sanitizer;
pub mod service;
pub mod thumbnail;

use async_trait::async_trait;

pub use error::FeedError;
pub use model::{BlogSummary, Enclosure, FeedEntry, Thumbnail};
pub use service::{FeedSettings, FeedSummaryService};

/// Source of raw syndication documents, addressed by URL.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw feed body. Non-2xx answers are errors.
    async fn fetch_feed(&self, url: &str) -> Result<Vec<u8>, FeedError>;
}
