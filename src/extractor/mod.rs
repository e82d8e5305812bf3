//! Product content extraction.
//!
//! Turns a [`DocumentTree`] into a [`ProductContent`] record. Every field is
//! backed by an ordered locator cascade (see `locators`) evaluated by a single
//! first-match-wins routine; nothing here can fail, a page from an unknown
//! template simply yields empty fields.
//!
//! # Module Structure
//!
//! - `cascade`: The generic first-match-wins locator routine
//! - `unique`: Ordered, duplicate-free accumulation used for images and bullets
//! - `images`: Main image, thumbnails, fallback images
//! - `text`: Title, bullet points, description, enhanced content, video signal

pub mod cascade;
pub mod images;
pub mod text;
pub mod unique;

pub use unique::OrderedUnique;

use crate::dom::DocumentTree;
use crate::result::ProductContent;

/// Extracts the marketable content of a product page.
///
/// `url` is carried into the record unchanged.
pub fn extract<D: DocumentTree>(doc: &D, url: &str) -> ProductContent {
    let title = text::extract_title(doc);
    let image_urls = images::extract_images(doc);
    let image_count = image_urls.len().saturating_sub(1);
    let has_video = text::has_video(doc);
    let bullet_points = text::extract_bullet_points(doc);
    let has_enhanced_content = text::has_enhanced_content(doc);
    let description = text::extract_description(doc);

    tracing::info!(
        url,
        thumbnails = image_count,
        images = image_urls.len(),
        bullets = bullet_points.len(),
        has_video,
        has_enhanced_content,
        "extracted product content"
    );

    ProductContent {
        title,
        image_count,
        image_urls,
        has_video,
        video_count: u32::from(has_video),
        bullet_points,
        description,
        has_enhanced_content,
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PageElement;
    use std::collections::HashMap;

    /// Hand-built tree: each locator maps to a list of (text, attributes).
    #[derive(Default)]
    struct FixtureTree {
        matches: HashMap<&'static str, Vec<FixtureElement>>,
        body: String,
    }

    #[derive(Clone)]
    struct FixtureElement {
        text: String,
        attrs: HashMap<&'static str, String>,
    }

    impl FixtureElement {
        fn text(text: &str) -> Self {
            Self {
                text: text.to_string(),
                attrs: HashMap::new(),
            }
        }

        fn img(src: &str) -> Self {
            Self {
                text: String::new(),
                attrs: HashMap::from([("src", src.to_string())]),
            }
        }
    }

    impl PageElement for &FixtureElement {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.get(name).cloned()
        }
    }

    impl DocumentTree for FixtureTree {
        type Element<'a> = &'a FixtureElement;

        fn query(&self, locator: &str) -> Vec<&FixtureElement> {
            self.matches
                .get(locator)
                .map(|elements| elements.iter().collect())
                .unwrap_or_default()
        }

        fn page_text(&self) -> String {
            self.body.clone()
        }
    }

    #[test]
    fn test_extract_from_synthetic_tree() {
        let tree = FixtureTree {
            matches: HashMap::from([
                (".product-title-word-break", vec![FixtureElement::text(" Ceramic Mug ")]),
                (
                    "#landingImage, #imgBlkFront, #main-image",
                    vec![FixtureElement::img("https://x/I/mug._SX500_.jpg")],
                ),
                (
                    "#altImages li:not(.videoThumbnail):not(.videoBlockIngress) img",
                    vec![
                        FixtureElement::img("https://x/I/mug._US40_.jpg"),
                        FixtureElement::img("https://x/I/side._US40_.jpg"),
                    ],
                ),
                ("#bulletPointsSection li", vec![FixtureElement::text("Holds 350 ml")]),
                ("#aplus", vec![FixtureElement::text("")]),
                ("#productDescription", vec![FixtureElement::text("A sturdy mug.")]),
            ]),
            body: "Product video available".to_string(),
        };

        let content = extract(&tree, "https://www.amazon.de/dp/B01");

        assert_eq!(content.title, "Ceramic Mug");
        assert_eq!(content.image_urls, vec!["https://x/I/mug.jpg", "https://x/I/side.jpg"]);
        assert_eq!(content.image_count, 1);
        assert!(content.has_video);
        assert_eq!(content.video_count, 1);
        assert_eq!(content.bullet_points, vec!["Holds 350 ml"]);
        assert!(content.has_enhanced_content);
        assert_eq!(content.description, "A sturdy mug.");
        assert_eq!(content.url, "https://www.amazon.de/dp/B01");
    }

    #[test]
    fn test_extract_empty_tree_yields_defaults() {
        let content = extract(&FixtureTree::default(), "u");

        assert_eq!(content, ProductContent::new("u"));
    }
}
