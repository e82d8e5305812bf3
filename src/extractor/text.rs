//! Text-valued fields: title, bullet points, description, plus the
//! enhanced-content and video signals.

use crate::dom::DocumentTree;
use crate::locators::{
    BULLET_LOCATORS, DESCRIPTION_LOCATORS, ENHANCED_CONTENT_LOCATORS, TITLE_LOCATORS,
    VIDEO_KEYWORD, WARRANTY_KEYWORD,
};

use super::cascade::{any_match, first_match};
use super::unique::OrderedUnique;

/// Title from the first locator whose matched text is not blank.
pub fn extract_title<D: DocumentTree>(doc: &D) -> String {
    first_match(doc, "title", TITLE_LOCATORS, |texts| {
        let title = texts.concat().trim().to_string();
        (!title.is_empty()).then_some(title)
    })
    .unwrap_or_default()
}

/// Feature bullets from the first locator that yields any usable entry.
///
/// Entries are trimmed; blank, warranty and exact-duplicate entries are
/// dropped. Later locators are never consulted once one has produced bullets.
pub fn extract_bullet_points<D: DocumentTree>(doc: &D) -> Vec<String> {
    first_match(doc, "bullet_points", BULLET_LOCATORS, |texts| {
        let bullets: OrderedUnique = texts
            .iter()
            .map(|text| text.trim())
            .filter(|text| !text.is_empty() && !is_warranty(text))
            .map(str::to_string)
            .collect();
        (!bullets.is_empty()).then(|| bullets.into_vec())
    })
    .unwrap_or_default()
}

/// Description from the first locator whose matches join to non-blank text.
pub fn extract_description<D: DocumentTree>(doc: &D) -> String {
    first_match(doc, "description", DESCRIPTION_LOCATORS, |texts| {
        let joined = texts
            .iter()
            .map(|text| text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        let description = joined.trim();
        (!description.is_empty()).then(|| description.to_string())
    })
    .unwrap_or_default()
}

/// Whether any enhanced-content block is present.
pub fn has_enhanced_content<D: DocumentTree>(doc: &D) -> bool {
    any_match(doc, ENHANCED_CONTENT_LOCATORS)
}

/// Whether the word "video" appears anywhere in the page text.
///
/// This is a page-wide keyword test, not player detection: any mention of
/// the word counts, and videos referenced only in markup do not.
pub fn has_video<D: DocumentTree>(doc: &D) -> bool {
    doc.page_text().to_lowercase().contains(VIDEO_KEYWORD)
}

fn is_warranty(text: &str) -> bool {
    text.to_lowercase().contains(WARRANTY_KEYWORD)
}
