use serde::Serialize;

/// Something noteworthy that happened while resolving a value.
///
/// Remote failures never reach callers as errors. They are recorded here so
/// the rendering layer (and tests) can tell a fresh value from a degraded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A component is missing its configuration and was skipped.
    NotConfigured { component: String },
    /// Fetching or parsing the feed for one language failed.
    FeedUnavailable {
        language: String,
        url: String,
        reason: String,
    },
    /// The feed for one language parsed fine but had no entries.
    FeedEmpty { language: String, url: String },
    /// The summary comes from the default language feed.
    DefaultLanguageUsed { requested: String, used: String },
    /// The summary was served from the memo cache.
    SummaryFromCache { language: String },
    /// The page repository could not be reached for one locale.
    RemoteUnavailable {
        slug: String,
        locale: Option<String>,
        reason: String,
    },
    /// The page repository answered "not found" for one locale.
    RemoteNotFound { slug: String, locale: Option<String> },
    /// Content was served from the fallback tier after a failed fetch.
    StaleContentServed { slug: String, locale: Option<String> },
    /// Content came from the unlocalized path instead of the requested locale.
    LocaleFallbackUsed { slug: String, requested: String },
}

impl Diagnostic {
    /// Whether this diagnostic means a fallback path produced the value.
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            Self::DefaultLanguageUsed { .. }
                | Self::StaleContentServed { .. }
                | Self::LocaleFallbackUsed { .. }
        )
    }
}

/// A value together with the diagnostics collected while producing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Resolved<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    pub fn with(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn used_fallback(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_fallback)
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }
}
