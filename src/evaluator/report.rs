//! Evaluation output types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rubric::Rubric;

/// The four fixed rubric groupings, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Title,
    BulletPoints,
    Description,
    Media,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 4] = [
        Category::Title,
        Category::BulletPoints,
        Category::Description,
        Category::Media,
    ];

    /// Human-readable category name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Title => "Title",
            Category::BulletPoints => "Bullet Points",
            Category::Description => "Description",
            Category::Media => "Media",
        }
    }

    fn index(self) -> usize {
        match self {
            Category::Title => 0,
            Category::BulletPoints => 1,
            Category::Description => 2,
            Category::Media => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall listing quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Status {
    /// Maps an overall percentage onto the rubric's cut lines.
    #[must_use]
    pub fn from_percentage(percentage: u32, rubric: &Rubric) -> Self {
        if percentage >= rubric.excellent_percentage {
            Status::Excellent
        } else if percentage >= rubric.good_percentage {
            Status::Good
        } else if percentage >= rubric.fair_percentage {
            Status::Fair
        } else {
            Status::Poor
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Poor => "Poor",
            Status::Fair => "Fair",
            Status::Good => "Good",
            Status::Excellent => "Excellent",
        };
        f.write_str(label)
    }
}

/// Outcome of a single rubric check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub description: String,
    pub passed: bool,
    /// Remediation hint; present only on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl CheckResult {
    /// Builds a check result. `recommendation` is only evaluated when the
    /// check failed.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        passed: bool,
        recommendation: impl FnOnce() -> String,
    ) -> Self {
        Self {
            description: description.into(),
            passed,
            recommendation: (!passed).then(recommendation),
        }
    }
}

/// Score and checks for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub passed: bool,
    pub checks: Vec<CheckResult>,
}

impl CategoryResult {
    /// Scores `checks` one point each; the category passes at `pass_score`.
    #[must_use]
    pub fn from_checks(category: Category, checks: Vec<CheckResult>, pass_score: u32) -> Self {
        let score = to_u32(checks.iter().filter(|check| check.passed).count());
        let max_score = to_u32(checks.len());

        Self {
            name: category.label().to_string(),
            score,
            max_score,
            passed: score >= pass_score,
            checks,
        }
    }

    /// Category score as a rounded percentage.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        rounded_percentage(self.score, self.max_score)
    }
}

/// Full evaluation of one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// Always Title, Bullet Points, Description, Media.
    pub categories: Vec<CategoryResult>,
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub status: Status,
}

impl EvaluationReport {
    /// Aggregates category results into the overall score and status.
    #[must_use]
    pub fn from_categories(categories: Vec<CategoryResult>, rubric: &Rubric) -> Self {
        let total_score = categories.iter().map(|c| c.score).sum();
        let max_score = categories.iter().map(|c| c.max_score).sum();
        let percentage = rounded_percentage(total_score, max_score);

        Self {
            categories,
            total_score,
            max_score,
            percentage,
            status: Status::from_percentage(percentage, rubric),
        }
    }

    /// Result for `category`.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.categories.get(category.index())
    }

    /// Every failed check's recommendation, in report order.
    #[must_use]
    pub fn recommendations(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| &c.checks)
            .filter_map(|check| check.recommendation.as_deref())
            .collect()
    }
}

/// `round(100 * score / max)`, rounding halves up. Zero when `max` is zero.
#[must_use]
pub fn rounded_percentage(score: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (score * 200 + max) / (2 * max)
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
