//! Lightweight HTML fragment handling for feed excerpts.
//!
//! These helpers work on fragments as text: they do not build a DOM and are
//! total over any input, HTML or not.

use regex::Regex;
use std::sync::LazyLock;

static STRUCTURAL_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:img|br|p|div|ul|li|ol)(?:\s[^<>]*)?/?>")
        .expect("structural tags pattern is valid")
});

/// An `<img>` tag up to its closing `>`. A `>` inside a quoted value does not
/// end the tag.
static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<img\b(?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("img tag pattern is valid")
});

/// One `name=value` attribute. Every attribute is consumed whole, so
/// `data-src` never reads as `src` and quoted text never reads as an attribute.
static IMG_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)([^\s"'=<>/]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'<>]+))"#)
        .expect("img attribute pattern is valid")
});

/// Attributes of the first usable `<img>` tag of a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub srcset: Option<String>,
    pub sizes: Option<String>,
}

/// Remove opening and closing `img`, `br`, `p`, `div`, `ul`, `li` and `ol`
/// tags. Everything else, markup or text, is kept as is.
pub fn strip_structural_tags(html: &str) -> String {
    STRUCTURAL_TAGS.replace_all(html, "").into_owned()
}

/// Find the first `<img>` carrying an absolute http(s) `src` and return it
/// along with its optional `srcset` and `sizes`.
///
/// Attribute order does not matter. `&amp;` is unescaped in `src` and `srcset`.
pub fn extract_first_image(html: &str) -> Option<ImageRef> {
    IMG_TAG
        .find_iter(html)
        .find_map(|tag| image_from_tag(tag.as_str()))
}

fn image_from_tag(tag: &str) -> Option<ImageRef> {
    let mut src = None;
    let mut srcset = None;
    let mut sizes = None;

    let attributes = tag.get("<img".len()..).unwrap_or_default();
    for caps in IMG_ATTRIBUTE.captures_iter(attributes) {
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
            .unwrap_or_default();
        match caps[1].to_ascii_lowercase().as_str() {
            "src" if src.is_none() => src = Some(value.to_string()),
            "srcset" if srcset.is_none() => srcset = Some(value.to_string()),
            "sizes" if sizes.is_none() => sizes = Some(value.to_string()),
            _ => {}
        }
    }

    let src = src.filter(|s| is_absolute_http(s))?;

    Some(ImageRef {
        src: unescape_amp(&src),
        srcset: srcset.filter(|s| !s.is_empty()).map(|s| unescape_amp(&s)),
        sizes: sizes.filter(|s| !s.is_empty()),
    })
}

fn is_absolute_http(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")) && url.len() > "http://".len()
}

fn unescape_amp(value: &str) -> String {
    value.replace("&amp;", "&")
}
