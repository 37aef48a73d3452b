//! RSS 2.0 and Atom parsing into [`FeedEntry`] values.
//!
//! Only what the blog summary needs is extracted: title, link, dates, the
//! description/summary and content bodies, media thumbnails and enclosures.

use crate::domain::blog::{Enclosure, FeedEntry, FeedError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Title,
    Link,
    Published,
    Updated,
    Summary,
    Content,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "link" => Some(Self::Link),
            "pubDate" | "published" | "dc:date" => Some(Self::Published),
            "updated" => Some(Self::Updated),
            "description" | "summary" => Some(Self::Summary),
            "content:encoded" | "content" => Some(Self::Content),
            _ => None,
        }
    }
}

/// Text element being collected, with the depth of nested markup inside it.
struct OpenField {
    field: Field,
    text: String,
    nested: usize,
}

/// Media RSS wrapper whose children count as direct children of the entry.
const MEDIA_GROUP: &str = "media:group";

#[derive(Default)]
struct EntryBuilder {
    entry: FeedEntry,
    updated: Option<String>,
    /// Depth inside a child element that is not an entry field, such as an
    /// Atom `<source>`. Only direct children of the entry are read.
    skipped: usize,
}

impl EntryBuilder {
    fn assign(&mut self, field: Field, text: String) {
        let value = text.trim().to_string();
        match field {
            Field::Title => self.entry.title = Some(value),
            Field::Link => {
                if self.entry.link.is_none() && !value.is_empty() {
                    self.entry.link = Some(value);
                }
            }
            Field::Published => self.entry.published = Some(value),
            Field::Updated => self.updated = Some(value),
            Field::Summary => {
                self.entry.description = Some(value.clone());
                self.entry.summary = Some(value);
            }
            Field::Content => {
                if self.entry.content.is_none() {
                    self.entry.content = Some(value);
                }
            }
        }
    }

    /// Attribute-only elements: `media:thumbnail`, `enclosure`, Atom `link`.
    /// Returns whether the element was fully handled by its attributes.
    fn attributes(&mut self, name: &str, element: &BytesStart<'_>) -> Result<bool, FeedError> {
        match name {
            "media:thumbnail" => {
                if let Some(url) = attribute(element, "url")? {
                    self.entry.media_thumbnails.push(url);
                }
                Ok(true)
            }
            "enclosure" => {
                if let Some(url) = attribute(element, "url")? {
                    self.entry.enclosures.push(Enclosure {
                        mime_type: attribute(element, "type")?,
                        url,
                    });
                }
                Ok(true)
            }
            "link" => {
                let Some(href) = attribute(element, "href")? else {
                    return Ok(false);
                };
                match attribute(element, "rel")?.as_deref() {
                    Some("enclosure") => self.entry.enclosures.push(Enclosure {
                        mime_type: attribute(element, "type")?,
                        url: href,
                    }),
                    None | Some("alternate") => {
                        if self.entry.link.is_none() {
                            self.entry.link = Some(href);
                        }
                    }
                    Some(_) => {}
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn build(self) -> FeedEntry {
        let mut entry = self.entry;
        if entry.published.is_none() {
            entry.published = self.updated;
        }
        entry
    }
}

/// Parse a syndication document, entries in document order.
///
/// A document whose root is neither `<rss>`, `<rdf:RDF>` nor `<feed>` is a
/// parse error; a valid feed without entries yields an empty list.
pub fn parse_feed(xml: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut entries = Vec::new();
    let mut is_feed = false;
    let mut current: Option<EntryBuilder> = None;
    let mut open: Option<OpenField> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = element_name(&e);
                if let Some(field) = open.as_mut() {
                    field.nested += 1;
                } else if let Some(builder) = current.as_mut() {
                    if builder.skipped > 0 {
                        builder.skipped += 1;
                    } else if name == MEDIA_GROUP {
                        // transparent
                    } else if builder.attributes(&name, &e)? {
                        builder.skipped += 1;
                    } else if let Some(field) = Field::from_name(&name) {
                        open = Some(OpenField {
                            field,
                            text: String::new(),
                            nested: 0,
                        });
                    } else {
                        builder.skipped += 1;
                    }
                } else {
                    match name.as_str() {
                        "rss" | "rdf:RDF" | "feed" => is_feed = true,
                        "item" | "entry" => current = Some(EntryBuilder::default()),
                        _ => {}
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if open.is_none() {
                    if let Some(builder) = current.as_mut().filter(|b| b.skipped == 0) {
                        builder.attributes(&element_name(&e), &e)?;
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(field) = open.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| FeedError::Parse(err.to_string()))?;
                    field.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(field) = open.as_mut() {
                    field.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let name = name.strip_prefix("atom:").unwrap_or(&name);
                match open.as_mut() {
                    Some(field) if field.nested > 0 => field.nested -= 1,
                    Some(_) => {
                        if let (Some(field), Some(builder)) = (open.take(), current.as_mut()) {
                            builder.assign(field.field, field.text);
                        }
                    }
                    None => {
                        let inside_child = current.as_ref().is_some_and(|b| b.skipped > 0);
                        if inside_child {
                            if let Some(builder) = current.as_mut() {
                                builder.skipped -= 1;
                            }
                        } else if name == "item" || name == "entry" {
                            if let Some(builder) = current.take() {
                                entries.push(builder.build());
                            }
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Parse(format!("XML parse error: {e}"))),
            _ => {}
        }
        buf.clear();
    }

    if !is_feed {
        return Err(FeedError::Parse("document is neither RSS nor Atom".to_string()));
    }

    Ok(entries)
}

fn element_name(element: &BytesStart<'_>) -> String {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    match name.strip_prefix("atom:") {
        Some(local) => local.to_string(),
        None => name,
    }
}

fn attribute(element: &BytesStart<'_>, key: &str) -> Result<Option<String>, FeedError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| FeedError::Parse(e.to_string()))?;
        if attr.key.as_ref() == key.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|e| FeedError::Parse(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
