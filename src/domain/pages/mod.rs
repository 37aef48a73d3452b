pub mod cache;
pub mod error;
pub mod fetcher;
pub mod front_matter;
pub mod location;
pub mod model;
pub mod service;

use async_trait::async_trait;

pub use cache::TieredPageCache;
pub use error::RemoteError;
pub use fetcher::PageContentFetcher;
pub use front_matter::Page;
pub use location::{ContentLocationResolver, PagesSettings};
pub use model::{Extension, LocaleFetch, PageContent, PageLocation, RepositoryUrls};
pub use service::{PageService, PageView};

/// Remote repository serving raw page files.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Lightweight existence check (no body). Only a 200 answer means "exists".
    async fn exists(&self, url: &str) -> Result<bool, RemoteError>;

    /// Fetch a raw file. A 404 answer is [`RemoteError::NotFound`].
    async fn fetch(&self, url: &str) -> Result<String, RemoteError>;
}
