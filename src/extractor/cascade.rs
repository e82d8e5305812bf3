//! Locator cascades.
//!
//! One routine implements the cascade policy for every field: try the
//! locators in order, hand the matched elements of the first locator that
//! matches anything to a field-specific selector, and stop at the first
//! selector that accepts. Results are never merged across locators.

use crate::dom::{DocumentTree, PageElement};

/// Runs `select` over the text of each locator's matches until it returns
/// `Some`.
///
/// Locators with no matches are skipped without calling `select`.
pub fn first_match<D, T>(
    doc: &D,
    field: &'static str,
    locators: &[&str],
    select: impl Fn(Vec<String>) -> Option<T>,
) -> Option<T>
where
    D: DocumentTree,
{
    let found = locators.iter().find_map(|&locator| {
        let texts = element_texts(doc, locator);
        if texts.is_empty() {
            return None;
        }
        let value = select(texts);
        if value.is_some() {
            tracing::debug!(field, locator, "locator matched");
        }
        value
    });

    if found.is_none() {
        tracing::debug!(field, "no locator matched");
    }
    found
}

/// True as soon as any locator has at least one match.
pub fn any_match<D: DocumentTree>(doc: &D, locators: &[&str]) -> bool {
    locators
        .iter()
        .find(|&&locator| !doc.query(locator).is_empty())
        .inspect(|locator| tracing::debug!(locator, "locator present"))
        .is_some()
}

/// Text of every element matching `locator`, in document order.
pub fn element_texts<D: DocumentTree>(doc: &D, locator: &str) -> Vec<String> {
    doc.query(locator).iter().map(PageElement::text).collect()
}

/// Value of attribute `name` for every element matching `locator`, in
/// document order. Elements without the attribute keep their slot as `None`.
pub fn element_attributes<D: DocumentTree>(doc: &D, locator: &str, name: &str) -> Vec<Option<String>> {
    doc.query(locator)
        .iter()
        .map(|element| element.attribute(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_first_match_commits_to_first_accepted_locator() {
        let doc = dom::parse(r#"<p class="a">first</p><p class="b">second</p>"#);
        let found = first_match(&doc, "test", &[".missing", ".a", ".b"], |texts| {
            Some(texts.join("|"))
        });

        assert_eq!(found.as_deref(), Some("first"));
    }

    #[test]
    fn test_first_match_falls_through_rejected_locators() {
        let doc = dom::parse(r#"<p class="a">   </p><p class="b">second</p>"#);
        let found = first_match(&doc, "test", &[".a", ".b"], |texts| {
            let joined = texts.concat().trim().to_string();
            (!joined.is_empty()).then_some(joined)
        });

        assert_eq!(found.as_deref(), Some("second"));
    }

    #[test]
    fn test_first_match_does_not_merge_results() {
        let doc = dom::parse(r#"<p class="a">one</p><p class="b">two</p>"#);
        let found = first_match(&doc, "test", &[".a", ".b"], Some);

        assert_eq!(found, Some(vec!["one".to_string()]));
    }

    #[test]
    fn test_first_match_none_when_nothing_matches() {
        let doc = dom::parse("<div></div>");
        let found = first_match(&doc, "test", &[".a", ".b"], Some);
        assert!(found.is_none());
    }

    #[test]
    fn test_any_match() {
        let doc = dom::parse(r#"<div class="aplus-v2"></div>"#);
        assert!(any_match(&doc, &["#aplus", ".aplus-v2"]));
        assert!(!any_match(&doc, &["#aplus"]));
    }

    #[test]
    fn test_element_attributes_keep_missing_slots() {
        let doc = dom::parse(r#"<img src="https://a"><img><img src="https://b">"#);
        let attrs = element_attributes(&doc, "img", "src");

        assert_eq!(
            attrs,
            vec![Some("https://a".to_string()), None, Some("https://b".to_string())]
        );
    }
}
