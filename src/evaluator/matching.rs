//! Text predicates shared by the category rules.
//!
//! Lengths are counted in UTF-16 code units, the unit storefront editors and
//! browser form limits use, so a character outside the Basic Multilingual
//! Plane counts twice. "Word" matching splits on anything that is not an
//! ASCII letter, ASCII digit or `_`: `Amazon's` and `Amazon限定` both contain
//! the word `amazon`, `Amazonian` does not, and `Señor` reads as `Se` + `or`.

/// Length of `text` in UTF-16 code units.
#[inline]
#[must_use]
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Whether the first character is an ASCII uppercase letter.
#[inline]
#[must_use]
pub fn starts_with_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Case-insensitive whole-word search for any of `terms`.
#[must_use]
pub fn contains_any_word(text: &str, terms: &[&str]) -> bool {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .any(|word| {
            let word = word.to_lowercase();
            terms.iter().any(|term| word == term.to_lowercase())
        })
}

/// Case-insensitive substring search for any of `terms`.
#[must_use]
pub fn contains_any_substring(text: &str, terms: &[&str]) -> bool {
    let text = text.to_lowercase();
    terms.iter().any(|term| text.contains(&term.to_lowercase()))
}

/// Whether `text` contains any of `symbols`.
#[inline]
#[must_use]
pub fn contains_any_char(text: &str, symbols: &[char]) -> bool {
    text.chars().any(|c| symbols.contains(&c))
}

/// Highest number of times any whitespace-separated word repeats,
/// ignoring case.
#[must_use]
pub fn max_word_repeats(text: &str) -> usize {
    use std::collections::HashMap;

    let counts = text
        .to_lowercase()
        .split_whitespace()
        .fold(HashMap::<String, usize>::new(), |mut counts, word| {
            *counts.entry(word.to_string()).or_default() += 1;
            counts
        });

    counts.into_values().max().unwrap_or(0)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
