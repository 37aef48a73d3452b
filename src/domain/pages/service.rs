use super::fetcher::PageContentFetcher;
use super::front_matter::Page;
use super::model::Extension;
use crate::domain::resources::{Resource, ResourceKind, TaggedResourceResolver};
use crate::domain::shared::Diagnostic;
use serde::Serialize;
use serde_json::{Map, Value};

/// Everything the page template needs.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub metadata: Map<String, Value>,
    pub body: String,
    pub gh_url: String,
    pub extension: Extension,
    pub datasets: Vec<Resource>,
    pub reuses: Vec<Resource>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct PageService {
    fetcher: PageContentFetcher,
    resolver: TaggedResourceResolver,
}

impl PageService {
    pub fn new(fetcher: PageContentFetcher, resolver: TaggedResourceResolver) -> Self {
        Self { fetcher, resolver }
    }

    /// Page content with its referenced resources. `None` means not found.
    pub async fn show_page(&self, slug: &str, locale: &str) -> Option<PageView> {
        let (content, diagnostics) = self.fetcher.get_content(slug, locale).await.into_parts();
        let content = content?;
        let page = Page::parse(&content.content);

        let mut datasets = Vec::new();
        let mut reuses = Vec::new();
        for kind in ResourceKind::ALL {
            let resolved = self
                .resolver
                .resolve(kind, &page.references(kind.front_matter_key()))
                .await;
            match kind {
                ResourceKind::Dataset => datasets = resolved,
                ResourceKind::Reuse => reuses = resolved,
            }
        }

        Some(PageView {
            metadata: page.metadata,
            body: page.body,
            gh_url: content.gh_url,
            extension: content.extension,
            datasets,
            reuses,
            diagnostics,
        })
    }
}
