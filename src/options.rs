//! Configuration options for the audit pipeline.
//!
//! The `Options` struct controls which stages of `analyze` run and which
//! rubric the evaluator applies.

use crate::rubric::Rubric;

/// Configuration options for the audit pipeline.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use listing_audit::Options;
///
/// // Extraction only
/// let options = Options {
///     include_evaluation: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Evaluate the extracted content and attach the report.
    ///
    /// Default: `true`
    pub include_evaluation: bool,

    /// Reject URLs that do not belong to a recognized marketplace before
    /// extracting anything.
    ///
    /// Default: `true`
    pub validate_url: bool,

    /// Rubric used for evaluation.
    ///
    /// Default: `Rubric::default()`
    pub rubric: Rubric,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_evaluation: true,
            validate_url: true,
            rubric: Rubric::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.include_evaluation);
        assert!(opts.validate_url);
        assert_eq!(opts.rubric, Rubric::default());
    }

    #[test]
    fn test_boolean_options_can_be_toggled() {
        let opts = Options {
            include_evaluation: false,
            validate_url: false,
            ..Options::default()
        };

        assert!(!opts.include_evaluation);
        assert!(!opts.validate_url);
    }
}
