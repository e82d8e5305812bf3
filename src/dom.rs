//! Document tree abstraction.
//!
//! The extractor never touches raw markup. It walks anything implementing
//! [`DocumentTree`]: a query-by-locator capability over elements that expose
//! their text and attributes. The `dom_query` adapter below is what the
//! crate's HTML entry points use; tests and callers with their own parser can
//! plug in a different tree.

pub use dom_query::{Document, Selection};

/// A single element returned by a locator query.
pub trait PageElement {
    /// All text content of the element and its descendants.
    fn text(&self) -> String;

    /// Value of attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// A parsed document that can be queried with CSS-style locators.
pub trait DocumentTree {
    type Element<'a>: PageElement
    where
        Self: 'a;

    /// Elements matching `locator`, in document order.
    ///
    /// A locator the tree cannot interpret matches nothing.
    fn query(&self, locator: &str) -> Vec<Self::Element<'_>>;

    /// Visible text of the whole page.
    fn page_text(&self) -> String {
        self.query("body")
            .iter()
            .map(PageElement::text)
            .collect()
    }
}

impl PageElement for Selection<'_> {
    #[inline]
    fn text(&self) -> String {
        Selection::text(self).to_string()
    }

    #[inline]
    fn attribute(&self, name: &str) -> Option<String> {
        self.attr(name).map(|value| value.to_string())
    }
}

impl DocumentTree for Document {
    type Element<'a> = Selection<'a>;

    fn query(&self, locator: &str) -> Vec<Selection<'_>> {
        self.try_select(locator)
            .map(|sel| sel.nodes().iter().map(|node| Selection::from(*node)).collect())
            .unwrap_or_default()
    }
}

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
