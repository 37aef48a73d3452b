use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\x{feff}?---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)(.*)\z")
        .expect("valid front-matter regex")
});

/// A page split into its YAML front-matter and the remaining body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub metadata: Map<String, Value>,
    pub body: String,
}

impl Page {
    /// Split `text` on a leading `---` delimited YAML block.
    ///
    /// Text without front-matter, or with a block that is not a YAML
    /// mapping, is returned whole as the body with empty metadata.
    pub fn parse(text: &str) -> Self {
        let Some(captures) = FRONT_MATTER.captures(text) else {
            return Self::body_only(text);
        };
        let yaml = captures.get(1).map_or("", |m| m.as_str());
        let body = captures.get(2).map_or("", |m| m.as_str());

        if yaml.trim().is_empty() {
            return Self {
                metadata: Map::new(),
                body: body.to_string(),
            };
        }

        match serde_yaml::from_str::<Value>(yaml) {
            Ok(Value::Object(metadata)) => Self {
                metadata,
                body: body.to_string(),
            },
            Ok(Value::Null) => Self {
                metadata: Map::new(),
                body: body.to_string(),
            },
            Ok(_) => {
                tracing::warn!("Page front-matter is not a mapping, ignoring it");
                Self::body_only(text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid page front-matter, ignoring it");
                Self::body_only(text)
            }
        }
    }

    fn body_only(text: &str) -> Self {
        Self {
            metadata: Map::new(),
            body: text.to_string(),
        }
    }

    /// Raw reference list stored under `key`. `null` items are kept as `None`.
    pub fn references(&self, key: &str) -> Vec<Option<String>> {
        match self.metadata.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
