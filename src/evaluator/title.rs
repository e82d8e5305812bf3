//! Title rules.

use crate::rubric::Rubric;

use super::matching::{
    text_len, contains_any_char, contains_any_word, max_word_repeats, starts_with_uppercase,
};
use super::report::{Category, CategoryResult, CheckResult};

pub fn evaluate_title(title: &str, rubric: &Rubric) -> CategoryResult {
    let len = text_len(title);
    let length_ok = len > 0 && len <= rubric.title_max_len;

    let promotional = contains_any_word(title, rubric.title_promotional_terms);

    // A single symbol is enough to fail.
    let prohibited_symbol = contains_any_char(title, rubric.title_prohibited_symbols);

    // Any minor word anywhere fails, capitalized or not.
    let capitalized =
        starts_with_uppercase(title) && !contains_any_word(title, rubric.title_minor_words);

    let repetitive = max_word_repeats(title) > rubric.title_max_word_repeats;

    let checks = vec![
        CheckResult::new(
            format!("Title length is within {} characters", rubric.title_max_len),
            length_ok,
            || format!("Shorten title to {} characters or less", rubric.title_max_len),
        ),
        CheckResult::new("No promotional phrases", !promotional, || {
            "Remove promotional phrases like \"best\", \"amazing\", etc.".to_string()
        }),
        CheckResult::new(
            "No excessive punctuation or prohibited symbols",
            !prohibited_symbol,
            || "Remove excessive punctuation and prohibited symbols".to_string(),
        ),
        CheckResult::new("Proper capitalization of major words", capitalized, || {
            "Capitalize each major word (except small prepositions/articles/conjunctions)"
                .to_string()
        }),
        CheckResult::new("No excessive word repetition", !repetitive, || {
            format!(
                "Avoid repeating the same word more than {}",
                times(rubric.title_max_word_repeats)
            )
        }),
    ];

    CategoryResult::from_checks(Category::Title, checks, rubric.title_pass_score)
}

fn times(n: usize) -> String {
    match n {
        1 => "once".to_string(),
        2 => "twice".to_string(),
        n => format!("{n} times"),
    }
}
