//! Product image extraction.
//!
//! Images come from three sources, in order: the main image, the sidebar
//! thumbnails, and (only when almost nothing was found) a fallback wrapper
//! locator. URLs are canonicalized before de-duplication so size variants of
//! the same picture count once.

use crate::dom::{DocumentTree, PageElement};
use crate::locators::{
    canonicalize_image_url, ABSOLUTE_URL_MARKER, FALLBACK_IMAGE_LOCATOR, IMAGE_SRC_ATTRIBUTE,
    MAIN_IMAGE_ATTRIBUTES, MAIN_IMAGE_LOCATOR, MAX_IMAGES, MIN_IMAGES_BEFORE_FALLBACK,
    THUMBNAIL_LOCATOR,
};

use super::cascade::element_attributes;
use super::unique::OrderedUnique;

/// Collects canonicalized image URLs, main image first, at most `MAX_IMAGES`.
pub fn extract_images<D: DocumentTree>(doc: &D) -> Vec<String> {
    let collected = OrderedUnique::new()
        .with_all(main_image(doc))
        .with_all(thumbnails(doc));

    let collected = if collected.len() < MIN_IMAGES_BEFORE_FALLBACK {
        tracing::debug!(found = collected.len(), "trying fallback image locator");
        collected.with_all(sources(doc, FALLBACK_IMAGE_LOCATOR))
    } else {
        collected
    };

    let mut urls = collected.into_vec();
    if urls.len() > MAX_IMAGES {
        tracing::debug!(found = urls.len(), kept = MAX_IMAGES, "truncating image list");
        urls.truncate(MAX_IMAGES);
    }
    urls
}

/// Main product image, preferring the high-resolution attribute.
fn main_image<D: DocumentTree>(doc: &D) -> Option<String> {
    let element = doc.query(MAIN_IMAGE_LOCATOR).into_iter().next()?;
    let src = MAIN_IMAGE_ATTRIBUTES
        .iter()
        .filter_map(|name| element.attribute(name))
        .find(|value| !value.trim().is_empty())?;

    let url = accept(&src);
    match &url {
        Some(url) => tracing::debug!(url = %url, "main image"),
        None => tracing::debug!(src = %src, "main image rejected"),
    }
    url
}

/// Sidebar thumbnails. The first thumbnail repeats the main image and is
/// skipped whether or not it carries a usable source.
fn thumbnails<D: DocumentTree>(doc: &D) -> Vec<String> {
    element_attributes(doc, THUMBNAIL_LOCATOR, IMAGE_SRC_ATTRIBUTE)
        .into_iter()
        .skip(1)
        .flatten()
        .filter_map(|src| accept(&src))
        .inspect(|url| tracing::debug!(url = %url, "thumbnail image"))
        .collect()
}

fn sources<D: DocumentTree>(doc: &D, locator: &str) -> Vec<String> {
    element_attributes(doc, locator, IMAGE_SRC_ATTRIBUTE)
        .into_iter()
        .flatten()
        .filter_map(|src| accept(&src))
        .collect()
}

fn accept(src: &str) -> Option<String> {
    let src = src.trim();
    src.contains(ABSOLUTE_URL_MARKER)
        .then(|| canonicalize_image_url(src))
}
