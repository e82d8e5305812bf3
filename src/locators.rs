//! Locator tables and compiled patterns for product-page extraction.
//!
//! Each field has an ordered list of CSS locators covering the regional
//! page templates. The extractor tries them in order and commits to the first
//! one that yields a usable result.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Extraction Limits
// =============================================================================

/// Maximum number of image URLs kept (main image included).
pub const MAX_IMAGES: usize = 8;

/// The fallback image locator only runs when fewer URLs than this were found.
pub const MIN_IMAGES_BEFORE_FALLBACK: usize = 2;

/// Image URLs must contain this to be accepted.
pub const ABSOLUTE_URL_MARKER: &str = "http";

/// Keyword on the page that marks the listing as having video.
pub const VIDEO_KEYWORD: &str = "video";

/// Bullets mentioning this are warranty boilerplate, not features.
pub const WARRANTY_KEYWORD: &str = "warranty";

// =============================================================================
// Title
// =============================================================================

pub const TITLE_LOCATORS: &[&str] = &[
    "#productTitle",
    ".product-title-word-break",
    ".a-size-large.product-title-word-break",
];

// =============================================================================
// Images
// =============================================================================

/// Main product image. Only the first match is used.
pub const MAIN_IMAGE_LOCATOR: &str = "#landingImage, #imgBlkFront, #main-image";

/// Attributes read from the main image, high resolution first.
pub const MAIN_IMAGE_ATTRIBUTES: &[&str] = &["data-old-hires", "src"];

/// Sidebar thumbnails, excluding video tiles. The first match mirrors the
/// main image.
pub const THUMBNAIL_LOCATOR: &str =
    "#altImages li:not(.videoThumbnail):not(.videoBlockIngress) img";

pub const FALLBACK_IMAGE_LOCATOR: &str = ".imgTagWrapper img";

pub const IMAGE_SRC_ATTRIBUTE: &str = "src";

// =============================================================================
// Bullet Points
// =============================================================================

pub const BULLET_LOCATORS: &[&str] = &[
    "#feature-bullets ul li",
    ".a-unordered-list .a-list-item",
    "#bulletPointsSection li",
];

// =============================================================================
// Enhanced (A+) Content
// =============================================================================

pub const ENHANCED_CONTENT_LOCATORS: &[&str] = &[
    "#aplus",
    "#dpx-aplus-product-description_feature_div",
    "#aplus3p_feature_div",
    ".aplus-v2",
    "#aplus-3p-content",
    ".a-plus-widget",
];

// =============================================================================
// Description
// =============================================================================

pub const DESCRIPTION_LOCATORS: &[&str] = &[
    // Standard product description
    "#productDescription",
    "#productDescription p",
    // Expander
    ".a-expander-content p",
    "#productDescription_feature_div",
    // A+ sections
    "#aplus p",
    "#aplus-3p-content p",
    ".aplus-v2 p",
    // Bullets as a last structured resort
    "#feature-bullets",
    ".a-section.a-spacing-medium p",
    ".product-description-text",
    "#detailBullets_feature_div",
    // Generic
    ".a-section.a-spacing-medium.a-spacing-top-small",
];

// =============================================================================
// Image URL Canonicalization
// =============================================================================

/// Matches the resolution token in image URLs, e.g. `._AC_SX679_.` in
/// `https://m.media-amazon.com/images/I/71abc._AC_SX679_.jpg`.
pub static RESOLUTION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\._[^.]*\.").expect("RESOLUTION_SUFFIX regex"));

/// Strips resolution tokens so size variants of one image compare equal.
#[must_use]
pub fn canonicalize_image_url(url: &str) -> String {
    RESOLUTION_SUFFIX.replace_all(url, ".").into_owned()
}
