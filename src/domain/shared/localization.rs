/// Languages the portal serves, and the one used when nothing else fits.
#[derive(Debug, Clone, PartialEq)]
pub struct Localization {
    pub default_language: String,
    pub languages: Vec<String>,
}

impl Localization {
    pub fn new(default_language: impl Into<String>, languages: Vec<String>) -> Self {
        let default_language = default_language.into();
        let mut languages = languages;
        if !languages.contains(&default_language) {
            languages.push(default_language.clone());
        }
        Self {
            default_language,
            languages,
        }
    }

    pub fn is_supported(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}
