//! Bullet point rules.
//!
//! All length-conditioned checks need at least one bullet to pass; the
//! promotional-language check passes vacuously on an empty list.

use crate::rubric::Rubric;

use super::matching::{text_len, contains_any_substring, starts_with_uppercase};
use super::report::{Category, CategoryResult, CheckResult};

pub fn evaluate_bullet_points(bullets: &[String], rubric: &Rubric) -> CategoryResult {
    let total = bullets.len();
    let present = total > 0;

    let well_sized = bullets
        .iter()
        .filter(|b| (rubric.bullet_min_len..=rubric.bullet_max_len).contains(&text_len(b)))
        .count();
    let capitalized = bullets.iter().filter(|b| starts_with_uppercase(b)).count();
    let unpunctuated = bullets.iter().filter(|b| !b.trim().ends_with('.')).count();
    let promotional = bullets
        .iter()
        .filter(|b| contains_any_substring(b, rubric.bullet_promotional_terms))
        .count();

    let checks = vec![
        CheckResult::new(
            format!("Has {} bullet points", rubric.bullet_count),
            total == rubric.bullet_count,
            || {
                format!(
                    "Currently has {total} bullet points. Amazon recommends exactly {}.",
                    rubric.bullet_count
                )
            },
        ),
        CheckResult::new(
            format!(
                "Each bullet point is between {}-{} characters",
                rubric.bullet_min_len, rubric.bullet_max_len
            ),
            present && well_sized == total,
            || format!("{well_sized}/{total} bullet points have the correct length"),
        ),
        CheckResult::new(
            "Each bullet point starts with a capital letter",
            present && capitalized == total,
            || "Start each bullet point with a capital letter".to_string(),
        ),
        CheckResult::new(
            "No bullet points end with a period",
            present && unpunctuated == total,
            || "Remove ending periods from bullet points".to_string(),
        ),
        CheckResult::new(
            "No promotional language or subjective claims",
            promotional == 0,
            || "Remove promotional language and subjective claims".to_string(),
        ),
    ];

    CategoryResult::from_checks(Category::BulletPoints, checks, rubric.bullet_pass_score)
}
