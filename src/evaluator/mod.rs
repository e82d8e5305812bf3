//! Rule-based content quality evaluation.
//!
//! A pure function of [`ProductContent`]: four independent category
//! evaluators each run a fixed list of boolean checks, one point per passed
//! check, and the totals are aggregated into a percentage and status. All
//! thresholds and keyword lists come from a [`Rubric`].
//!
//! # Module Structure
//!
//! - `report`: Output types (`EvaluationReport`, `CategoryResult`, `CheckResult`)
//! - `matching`: Word, substring and length predicates
//! - `title`, `bullets`, `description`, `media`: One module per category

pub mod bullets;
pub mod description;
pub mod matching;
pub mod media;
pub mod report;
pub mod title;

pub use report::{Category, CategoryResult, CheckResult, EvaluationReport, Status};

use crate::result::ProductContent;
use crate::rubric::Rubric;

/// Evaluates `content` against the default rubric.
#[must_use]
pub fn evaluate(content: &ProductContent) -> EvaluationReport {
    evaluate_with_rubric(content, &Rubric::default())
}

/// Evaluates `content` against `rubric`.
#[must_use]
pub fn evaluate_with_rubric(content: &ProductContent, rubric: &Rubric) -> EvaluationReport {
    let categories = vec![
        title::evaluate_title(&content.title, rubric),
        bullets::evaluate_bullet_points(&content.bullet_points, rubric),
        description::evaluate_description(&content.description, rubric),
        media::evaluate_media(
            content.image_count,
            content.video_count,
            content.has_enhanced_content,
            rubric,
        ),
    ];

    let report = EvaluationReport::from_categories(categories, rubric);
    tracing::debug!(
        url = %content.url,
        total = report.total_score,
        max = report.max_score,
        percentage = report.percentage,
        status = %report.status,
        "evaluated product content"
    );
    report
}
