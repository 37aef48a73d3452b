use super::error::RemoteError;
use super::model::{Extension, RepositoryUrls};
use super::ContentRepository;
use std::sync::Arc;

/// Path prefix of pages inside the repository
pub const PAGES_PREFIX: &str = "pages";

#[derive(Debug, Clone, PartialEq)]
pub struct PagesSettings {
    /// `owner/name` of the page repository. `None` disables pages entirely.
    pub repo_name: Option<String>,
    pub branch: String,
    pub raw_base_url: String,
    pub browse_base_url: String,
    /// Put the locale in raw URLs (`pages/{locale}/{slug}`). Off by default:
    /// every locale shares one path per slug.
    pub localized_raw_paths: bool,
}

/// Maps a page slug to its URLs in the remote repository.
pub struct ContentLocationResolver {
    settings: PagesSettings,
    remote: Arc<dyn ContentRepository>,
}

impl ContentLocationResolver {
    pub fn new(settings: PagesSettings, remote: Arc<dyn ContentRepository>) -> Self {
        Self { settings, remote }
    }

    /// Raw and browsable URLs for `slug`, without extension.
    /// `None` when no repository is configured.
    pub fn resolve(&self, slug: &str, locale: Option<&str>) -> Option<RepositoryUrls> {
        let repo = self.settings.repo_name.as_deref()?;
        let branch = &self.settings.branch;
        let raw_base = self.settings.raw_base_url.trim_end_matches('/');
        let browse_base = self.settings.browse_base_url.trim_end_matches('/');

        let raw_url = match locale {
            Some(locale) if self.settings.localized_raw_paths => {
                format!("{raw_base}/{repo}/{branch}/{PAGES_PREFIX}/{locale}/{slug}")
            }
            _ => format!("{raw_base}/{repo}/{branch}/{PAGES_PREFIX}/{slug}"),
        };
        let gh_url = format!("{browse_base}/{repo}/blob/{branch}/{PAGES_PREFIX}/{slug}");

        Some(RepositoryUrls { raw_url, gh_url })
    }

    /// `md` when the markdown variant of `raw_url` exists, `html` otherwise.
    /// An error means the check itself failed; no body is fetched either way.
    pub async fn detect_extension(&self, raw_url: &str) -> Result<Extension, RemoteError> {
        let exists = self.remote.exists(&format!("{raw_url}.md")).await?;
        Ok(if exists { Extension::Md } else { Extension::Html })
    }
}
