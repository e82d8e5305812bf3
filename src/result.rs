//! Result types for audit output.
//!
//! `ProductContent` is what the extractor pulls out of a product page;
//! `AuditReport` is what the pipeline hands back to the caller.

use serde::{Deserialize, Serialize};

use crate::evaluator::EvaluationReport;

/// Marketable content extracted from a single product page.
///
/// All string fields are whitespace-trimmed. Any field whose locators did not
/// match keeps its empty/false/zero value, so a page from an unknown template
/// still produces a (poorly scoring) record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductContent {
    /// Product title.
    pub title: String,

    /// Number of thumbnail images, i.e. `image_urls` minus the main image.
    pub image_count: usize,

    /// Canonicalized image URLs. Index 0 is the main image. At most 8 entries,
    /// no two equal.
    pub image_urls: Vec<String>,

    /// Whether the page mentions video anywhere in its text.
    pub has_video: bool,

    /// `1` when `has_video`, otherwise `0`.
    pub video_count: u32,

    /// Feature bullets in document order, without duplicates or warranty lines.
    pub bullet_points: Vec<String>,

    /// Product description text.
    pub description: String,

    /// Whether an enhanced (A+) content block is present.
    pub has_enhanced_content: bool,

    /// Source URL, carried through unchanged.
    pub url: String,
}

impl ProductContent {
    /// Creates an empty record for `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Main image URL, if one was found.
    #[must_use]
    pub fn main_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Thumbnail URLs (everything after the main image).
    #[must_use]
    pub fn thumbnails(&self) -> &[String] {
        self.image_urls.get(1..).unwrap_or_default()
    }
}

/// Combined pipeline output: the extracted content, plus its evaluation when
/// one was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    #[serde(flatten)]
    pub content: ProductContent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationReport>,
}

impl AuditReport {
    #[must_use]
    pub fn new(content: ProductContent, evaluation: Option<EvaluationReport>) -> Self {
        Self {
            content,
            evaluation,
        }
    }

    /// Serializes the report as compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes the report as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
