//! # listing-audit
//!
//! Extracts the marketable content of a marketplace product page and scores
//! it against an editorial rubric.
//!
//! The crate has two independent halves:
//!
//! - **Extraction** walks a parsed page with ordered locator cascades and
//!   produces a [`ProductContent`] record (title, images, bullets,
//!   description, enhanced-content and video signals). It never fails; a page
//!   from an unknown template yields empty fields.
//! - **Evaluation** is a pure function from [`ProductContent`] to an
//!   [`EvaluationReport`]: four categories of boolean checks, a score out of
//!   18, a percentage and a status, with a remediation hint for every failed
//!   check.
//!
//! ## Quick Start
//!
//! ```rust
//! use listing_audit::{analyze, Status};
//!
//! let html = r#"<html><body>
//!   <span id="productTitle">Insulated Steel Bottle 750ml</span>
//!   <div id="productDescription"><p>Keeps drinks cold for 24 hours.</p></div>
//! </body></html>"#;
//!
//! let report = analyze(html, "https://www.amazon.com/dp/B000000001")?;
//! assert_eq!(report.content.title, "Insulated Steel Bottle 750ml");
//!
//! let evaluation = report.evaluation.expect("evaluation enabled by default");
//! assert_eq!(evaluation.max_score, 18);
//! assert_eq!(evaluation.status, Status::Fair);
//! # Ok::<(), listing_audit::Error>(())
//! ```
//!
//! Evaluation works just as well on hand-built content:
//!
//! ```rust
//! use listing_audit::{evaluate, ProductContent};
//!
//! let content = ProductContent {
//!     title: "Best Wireless Headphones".to_string(),
//!     ..ProductContent::default()
//! };
//! let report = evaluate(&content);
//! assert_eq!(report.categories[0].score, 4);
//! ```

mod error;
mod options;
mod result;

/// Document tree abstraction and the `dom_query` adapter.
pub mod dom;

/// Locator tables and image URL canonicalization.
pub mod locators;

/// Product content extraction (locator cascades).
pub mod extractor;

/// Rule-based content quality evaluation.
pub mod evaluator;

/// Editorial rubric: thresholds and keyword lists.
pub mod rubric;

/// Marketplace recognition and language preferences.
pub mod marketplace;

/// Character set detection for raw page bytes.
pub mod encoding;

// Public API - re-exports
pub use dom::{DocumentTree, PageElement};
pub use error::{Error, ErrorReport, Result, INVALID_URL_MESSAGE};
pub use evaluator::{
    evaluate, evaluate_with_rubric, Category, CategoryResult, CheckResult, EvaluationReport, Status,
};
pub use extractor::extract;
pub use marketplace::Marketplace;
pub use options::Options;
pub use result::{AuditReport, ProductContent};
pub use rubric::Rubric;

/// Parses `html` and extracts its product content.
///
/// No URL validation happens here; `url` is only carried into the record.
#[must_use]
pub fn extract_html(html: &str, url: &str) -> ProductContent {
    let doc = dom::parse(html);
    extractor::extract(&doc, url)
}

/// Runs the full pipeline with default options.
///
/// # Example
///
/// ```rust
/// use listing_audit::{analyze, Error};
///
/// let err = analyze("<html></html>", "https://example.com/item/1").unwrap_err();
/// assert_eq!(err.status_code(), 400);
/// # Ok::<(), Error>(())
/// ```
pub fn analyze(html: &str, url: &str) -> Result<AuditReport> {
    analyze_with_options(html, url, &Options::default())
}

/// Runs the full pipeline: validate the URL, parse, extract and (optionally)
/// evaluate.
///
/// URL validation happens before any parsing, so a rejected URL never
/// reaches the extractor.
pub fn analyze_with_options(html: &str, url: &str, options: &Options) -> Result<AuditReport> {
    if options.validate_url {
        let marketplace = Marketplace::from_url(url).inspect_err(|err| {
            tracing::warn!(url, %err, "rejected source url");
        })?;
        tracing::info!(
            %marketplace,
            language = marketplace.language_preference(),
            url,
            "processing product page"
        );
    }

    let content = extract_html(html, url);
    let evaluation = options
        .include_evaluation
        .then(|| evaluate_with_rubric(&content, &options.rubric));

    Ok(AuditReport::new(content, evaluation))
}

/// Runs the full pipeline on raw page bytes with default options.
///
/// The page is decoded using its declared charset (see [`encoding`]).
pub fn analyze_bytes(html: &[u8], url: &str) -> Result<AuditReport> {
    analyze_bytes_with_options(html, url, &Options::default())
}

/// Runs the full pipeline on raw page bytes.
pub fn analyze_bytes_with_options(html: &[u8], url: &str, options: &Options) -> Result<AuditReport> {
    let html = encoding::decode_page(html);
    analyze_with_options(&html, url, options)
}
