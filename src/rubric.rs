//! Editorial rubric used by the quality evaluator.
//!
//! Every keyword list, length limit and score cut line the evaluator applies
//! lives here, so a new rubric version is a new `Rubric` value rather than a
//! change to the evaluation code.

/// Thresholds and keyword lists for content evaluation.
///
/// All fields are public for easy configuration. `Rubric::default()` is the
/// published marketplace rubric.
///
/// # Example
///
/// ```rust
/// use listing_audit::Rubric;
///
/// let rubric = Rubric {
///     title_max_len: 150,
///     ..Rubric::default()
/// };
/// assert_eq!(rubric.bullet_count, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rubric {
    // === Title ===
    /// Maximum title length (characters).
    ///
    /// Default: `200`
    pub title_max_len: usize,

    /// Promotional terms rejected in titles (whole word, case-insensitive).
    pub title_promotional_terms: &'static [&'static str],

    /// Symbols that may not appear in a title at all.
    ///
    /// A single occurrence fails the check.
    pub title_prohibited_symbols: &'static [char],

    /// Articles, prepositions and conjunctions that fail the capitalization
    /// check wherever they appear (whole word, case-insensitive).
    pub title_minor_words: &'static [&'static str],

    /// Maximum number of times a single word may appear in a title.
    ///
    /// Default: `2`
    pub title_max_word_repeats: usize,

    /// Minimum passed checks for the Title category.
    ///
    /// Default: `4`
    pub title_pass_score: u32,

    // === Bullet points ===
    /// Required number of bullet points.
    ///
    /// Default: `5`
    pub bullet_count: usize,

    /// Minimum bullet length (characters, inclusive).
    ///
    /// Default: `300`
    pub bullet_min_len: usize,

    /// Maximum bullet length (characters, inclusive).
    ///
    /// Default: `555`
    pub bullet_max_len: usize,

    /// Promotional terms rejected in bullets (substring, case-insensitive).
    pub bullet_promotional_terms: &'static [&'static str],

    /// Minimum passed checks for the Bullet Points category.
    ///
    /// Default: `4`
    pub bullet_pass_score: u32,

    // === Description ===
    /// Maximum description length (characters).
    ///
    /// Default: `700`
    pub description_max_len: usize,

    /// Special symbols rejected in descriptions.
    pub description_prohibited_symbols: &'static [char],

    /// Marketplace names that may not be referenced (whole word, case-insensitive).
    pub description_marketplace_terms: &'static [&'static str],

    /// Superlatives rejected in descriptions (substring, case-insensitive).
    pub description_superlatives: &'static [&'static str],

    /// Minimum passed checks for the Description category.
    ///
    /// Default: `4`
    pub description_pass_score: u32,

    // === Media ===
    /// Minimum number of thumbnail images.
    ///
    /// Default: `6`
    pub media_min_images: usize,

    /// Minimum number of videos.
    ///
    /// Default: `1`
    pub media_min_videos: u32,

    /// Minimum passed checks for the Media category.
    ///
    /// Default: `2`
    pub media_pass_score: u32,

    // === Overall status ===
    /// Percentage at or above which the listing is `Excellent`.
    ///
    /// Default: `90`
    pub excellent_percentage: u32,

    /// Percentage at or above which the listing is `Good`.
    ///
    /// Default: `75`
    pub good_percentage: u32,

    /// Percentage at or above which the listing is `Fair`.
    ///
    /// Default: `50`
    pub fair_percentage: u32,
}

pub const TITLE_PROMOTIONAL_TERMS: &[&str] = &[
    "best",
    "amazing",
    "top",
    "perfect",
    "incredible",
    "awesome",
    "excellent",
    "free",
    "discount",
    "sale",
    "offer",
    "limited",
    "new",
    "improved",
];

pub const TITLE_PROHIBITED_SYMBOLS: &[char] = &['!', '$', '?', '_', '{', '}', '^', '¬', '¦'];

pub const TITLE_MINOR_WORDS: &[&str] = &[
    "a", "an", "the", "in", "on", "at", "for", "with", "by", "to", "and", "or", "but",
];

pub const BULLET_PROMOTIONAL_TERMS: &[&str] = &[
    "best",
    "amazing",
    "incredible",
    "perfect",
    "unbeatable",
    "revolutionary",
    "groundbreaking",
];

pub const DESCRIPTION_PROHIBITED_SYMBOLS: &[char] = &['™', '®', '€', '†', '©'];

pub const DESCRIPTION_MARKETPLACE_TERMS: &[&str] = &["amazon"];

pub const DESCRIPTION_SUPERLATIVES: &[&str] = &[
    "best",
    "greatest",
    "perfect",
    "ultimate",
    "excellent",
    "unforgettable",
];

impl Default for Rubric {
    fn default() -> Self {
        Self {
            title_max_len: 200,
            title_promotional_terms: TITLE_PROMOTIONAL_TERMS,
            title_prohibited_symbols: TITLE_PROHIBITED_SYMBOLS,
            title_minor_words: TITLE_MINOR_WORDS,
            title_max_word_repeats: 2,
            title_pass_score: 4,
            bullet_count: 5,
            bullet_min_len: 300,
            bullet_max_len: 555,
            bullet_promotional_terms: BULLET_PROMOTIONAL_TERMS,
            bullet_pass_score: 4,
            description_max_len: 700,
            description_prohibited_symbols: DESCRIPTION_PROHIBITED_SYMBOLS,
            description_marketplace_terms: DESCRIPTION_MARKETPLACE_TERMS,
            description_superlatives: DESCRIPTION_SUPERLATIVES,
            description_pass_score: 4,
            media_min_images: 6,
            media_min_videos: 1,
            media_pass_score: 2,
            excellent_percentage: 90,
            good_percentage: 75,
            fair_percentage: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rubric_thresholds() {
        let rubric = Rubric::default();

        assert_eq!(rubric.title_max_len, 200);
        assert_eq!(rubric.title_max_word_repeats, 2);
        assert_eq!(rubric.title_pass_score, 4);
        assert_eq!(rubric.bullet_count, 5);
        assert_eq!(rubric.bullet_min_len, 300);
        assert_eq!(rubric.bullet_max_len, 555);
        assert_eq!(rubric.description_max_len, 700);
        assert_eq!(rubric.media_min_images, 6);
        assert_eq!(rubric.media_min_videos, 1);
        assert_eq!(rubric.media_pass_score, 2);
        assert_eq!(
            (rubric.excellent_percentage, rubric.good_percentage, rubric.fair_percentage),
            (90, 75, 50)
        );
    }

    #[test]
    fn test_default_keyword_lists() {
        let rubric = Rubric::default();

        assert_eq!(rubric.title_promotional_terms.len(), 14);
        assert_eq!(rubric.title_prohibited_symbols.len(), 9);
        assert_eq!(rubric.title_minor_words.len(), 13);
        assert_eq!(rubric.bullet_promotional_terms.len(), 7);
        assert_eq!(rubric.description_prohibited_symbols.len(), 5);
        assert_eq!(rubric.description_superlatives.len(), 6);
        assert!(rubric.description_marketplace_terms.contains(&"amazon"));
    }

    #[test]
    fn test_custom_rubric_keeps_remaining_defaults() {
        let rubric = Rubric {
            media_min_images: 4,
            ..Rubric::default()
        };

        assert_eq!(rubric.media_min_images, 4);
        assert_eq!(rubric.title_max_len, 200);
    }
}
