//! Ordered, duplicate-free accumulation.
//!
//! Image URLs and bullet points are both collected as "first occurrence wins,
//! keep document order". `OrderedUnique` is the value those collections fold
//! into; it is built by consuming itself, so no extractor keeps mutable state
//! between calls.

use std::collections::HashSet;

/// Insertion-ordered set of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedUnique {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedUnique {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `self` with `item` appended unless it was already present.
    #[must_use]
    pub fn with(mut self, item: String) -> Self {
        if !self.seen.contains(&item) {
            self.seen.insert(item.clone());
            self.items.push(item);
        }
        self
    }

    /// Folds every item of `iter` into `self`.
    #[must_use]
    pub fn with_all<I>(self, iter: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        iter.into_iter().fold(self, Self::with)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl FromIterator<String> for OrderedUnique {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new().with_all(iter)
    }
}
