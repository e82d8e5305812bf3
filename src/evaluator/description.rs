//! Description rules.

use crate::rubric::Rubric;

use super::matching::{text_len, contains_any_char, contains_any_substring, contains_any_word};
use super::report::{Category, CategoryResult, CheckResult};

pub fn evaluate_description(description: &str, rubric: &Rubric) -> CategoryResult {
    let len = text_len(description);
    let symbols = rubric
        .description_prohibited_symbols
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let checks = vec![
        CheckResult::new("Description is present", len > 0, || {
            "Add a product description".to_string()
        }),
        CheckResult::new(
            format!("Description is within {} characters", rubric.description_max_len),
            len <= rubric.description_max_len,
            || {
                format!(
                    "Current length: {len} characters. Shorten to {} or less.",
                    rubric.description_max_len
                )
            },
        ),
        CheckResult::new(
            format!("No special symbols ({symbols}, etc.)"),
            !contains_any_char(description, rubric.description_prohibited_symbols),
            || format!("Remove special symbols like {symbols}"),
        ),
        CheckResult::new(
            "No Amazon references",
            !contains_any_word(description, rubric.description_marketplace_terms),
            || "Remove references to Amazon".to_string(),
        ),
        CheckResult::new(
            "No superlatives or exaggerated claims",
            !contains_any_substring(description, rubric.description_superlatives),
            || "Remove superlatives like \"best,\" \"perfect,\" \"ultimate,\" etc.".to_string(),
        ),
    ];

    CategoryResult::from_checks(Category::Description, checks, rubric.description_pass_score)
}
