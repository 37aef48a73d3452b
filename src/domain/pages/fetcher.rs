use super::cache::TieredPageCache;
use super::location::ContentLocationResolver;
use super::model::{Extension, LocaleFetch, PageContent, PageLocation};
use super::ContentRepository;
use crate::domain::shared::{Diagnostic, Resolved};
use std::sync::Arc;

/// Fetches page content from the remote repository, surviving its outages.
pub struct PageContentFetcher {
    locator: ContentLocationResolver,
    remote: Arc<dyn ContentRepository>,
    cache: TieredPageCache,
}

impl PageContentFetcher {
    pub fn new(
        locator: ContentLocationResolver,
        remote: Arc<dyn ContentRepository>,
        cache: TieredPageCache,
    ) -> Self {
        Self {
            locator,
            remote,
            cache,
        }
    }

    /// Content of `slug`, trying `request_locale` then the unlocalized page.
    ///
    /// An absent value is the not-found outcome: no locale produced content,
    /// neither from the remote nor from the fallback tier.
    pub async fn get_content(&self, slug: &str, request_locale: &str) -> Resolved<Option<PageContent>> {
        let mut diagnostics = Vec::new();

        for locale in [Some(request_locale), None] {
            let (fetch, mut locale_diagnostics) =
                self.get_content_locale(slug, locale).await.into_parts();
            diagnostics.append(&mut locale_diagnostics);

            let Some(fetch) = fetch else {
                return Resolved::with_diagnostics(None, diagnostics);
            };

            if let Some(content) = fetch.content.filter(|content| !content.is_empty()) {
                if locale.is_none() {
                    diagnostics.push(Diagnostic::LocaleFallbackUsed {
                        slug: slug.to_string(),
                        requested: request_locale.to_string(),
                    });
                }
                return Resolved::with_diagnostics(
                    Some(PageContent {
                        content,
                        gh_url: fetch.gh_url,
                        extension: fetch.extension,
                    }),
                    diagnostics,
                );
            }
        }

        tracing::error!(slug, "No content found, including from cache, for page");
        Resolved::with_diagnostics(None, diagnostics)
    }

    /// Fetch outcome for one locale, memoized in the fresh tier.
    /// `None` only when no repository is configured.
    pub async fn get_content_locale(
        &self,
        slug: &str,
        locale: Option<&str>,
    ) -> Resolved<Option<LocaleFetch>> {
        if let Some(fetch) = self.cache.fresh(slug, locale).await {
            let stale = fetch.from_fallback;
            let resolved = Resolved::new(Some(fetch));
            return if stale {
                resolved.with(Diagnostic::StaleContentServed {
                    slug: slug.to_string(),
                    locale: locale.map(str::to_string),
                })
            } else {
                resolved
            };
        }

        let Some(urls) = self.locator.resolve(slug, locale) else {
            tracing::warn!(slug, "No page repository configured");
            return Resolved::new(None).with(Diagnostic::NotConfigured {
                component: "pages".to_string(),
            });
        };

        let (location, result) = match self.locator.detect_extension(&urls.raw_url).await {
            Ok(extension) => {
                let location = PageLocation::new(&urls, extension);
                let result = self.remote.fetch(&location.raw_url).await;
                (location, result)
            }
            Err(err) => {
                tracing::warn!(slug, raw_url = %urls.raw_url, error = %err, "Extension check failed, assuming html");
                (PageLocation::new(&urls, Extension::Html), Err(err))
            }
        };

        let mut diagnostics = Vec::new();
        let mut from_fallback = false;
        let content = match result {
            Ok(body) => {
                self.cache.store_fallback(slug, locale, body.clone()).await;
                Some(body)
            }
            Err(err) if err.is_not_found() => {
                tracing::info!(slug, locale, url = %location.raw_url, "Page not found in repository");
                diagnostics.push(Diagnostic::RemoteNotFound {
                    slug: slug.to_string(),
                    locale: locale.map(str::to_string),
                });
                None
            }
            Err(err) => {
                tracing::error!(slug, locale, error = %err, "Error while getting page from repository");
                diagnostics.push(Diagnostic::RemoteUnavailable {
                    slug: slug.to_string(),
                    locale: locale.map(str::to_string),
                    reason: err.to_string(),
                });
                let stale = self.cache.fallback(slug, locale).await;
                if stale.is_some() {
                    from_fallback = true;
                    diagnostics.push(Diagnostic::StaleContentServed {
                        slug: slug.to_string(),
                        locale: locale.map(str::to_string),
                    });
                }
                stale
            }
        };

        let fetch = LocaleFetch {
            content,
            gh_url: location.gh_url,
            extension: location.extension,
            from_fallback,
        };
        self.cache.remember(slug, locale, fetch.clone()).await;

        Resolved::with_diagnostics(Some(fetch), diagnostics)
    }
}
