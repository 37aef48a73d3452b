use crate::domain::blog::FeedSettings;
use crate::domain::pages::PagesSettings;
use crate::domain::shared::Localization;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Localization
    pub default_language: String,
    pub languages: Vec<String>,
    // Blog feed
    pub feed_url_template: Option<String>,
    pub feed_cache_capacity: u64,
    // Page repository
    pub pages_repo_name: Option<String>,
    pub pages_repo_branch: String,
    pub pages_raw_base_url: String,
    pub pages_browse_base_url: String,
    pub pages_localized_raw_paths: bool,
    pub page_cache_ttl_secs: u64,
    // Remote calls
    pub remote_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            default_language: env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "fr".to_string()),
            languages: parse_list(&env::var("LANGUAGES").unwrap_or_else(|_| "fr,en,de".to_string())),
            feed_url_template: optional_var("FEED_URL_TEMPLATE"),
            feed_cache_capacity: env::var("FEED_CACHE_CAPACITY")
                .unwrap_or_else(|_| "50".to_string())
                .parse()?,
            pages_repo_name: optional_var("PAGES_REPO_NAME"),
            pages_repo_branch: env::var("PAGES_REPO_BRANCH").unwrap_or_else(|_| "master".to_string()),
            pages_raw_base_url: env::var("PAGES_RAW_BASE_URL")
                .unwrap_or_else(|_| "https://raw.githubusercontent.com".to_string()),
            pages_browse_base_url: env::var("PAGES_BROWSE_BASE_URL")
                .unwrap_or_else(|_| "https://github.com".to_string()),
            pages_localized_raw_paths: env::var("PAGES_LOCALIZED_RAW_PATHS")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
            page_cache_ttl_secs: env::var("PAGE_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
            remote_timeout_secs: env::var("REMOTE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn localization(&self) -> Localization {
        Localization::new(self.default_language.clone(), self.languages.clone())
    }

    pub fn feed_settings(&self) -> FeedSettings {
        FeedSettings {
            url_template: self.feed_url_template.clone(),
            default_language: self.default_language.clone(),
        }
    }

    pub fn pages_settings(&self) -> PagesSettings {
        PagesSettings {
            repo_name: self.pages_repo_name.clone(),
            branch: self.pages_repo_branch.clone(),
            raw_base_url: self.pages_raw_base_url.clone(),
            browse_base_url: self.pages_browse_base_url.clone(),
            localized_raw_paths: self.pages_localized_raw_paths,
        }
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }

    pub fn page_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.page_cache_ttl_secs)
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
