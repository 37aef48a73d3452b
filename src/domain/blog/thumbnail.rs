use super::model::{FeedEntry, Thumbnail};
use super::sanitizer::extract_first_image;

/// Enclosure types accepted as thumbnails
pub const FEED_THUMBNAIL_MIMES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Pick a thumbnail for a feed entry.
///
/// First match wins, tiers are never merged:
/// 1. the first `media:thumbnail` (its size metadata is ignored)
/// 2. the first enclosure with an accepted image type
/// 3. the first image of `content`, with its `srcset`/`sizes` if any
pub fn resolve_thumbnail(entry: &FeedEntry, content: &str) -> Option<Thumbnail> {
    if let Some(url) = entry.media_thumbnails.first() {
        return Some(Thumbnail {
            image_url: url.clone(),
            srcset: None,
            sizes: None,
        });
    }

    if let Some(enclosure) = entry.enclosures.iter().find(|enclosure| {
        enclosure
            .mime_type
            .as_deref()
            .is_some_and(|mime| FEED_THUMBNAIL_MIMES.contains(&mime))
    }) {
        return Some(Thumbnail {
            image_url: enclosure.url.clone(),
            srcset: None,
            sizes: None,
        });
    }

    extract_first_image(content).map(|image| Thumbnail {
        image_url: image.src,
        srcset: image.srcset,
        sizes: image.sizes,
    })
}
