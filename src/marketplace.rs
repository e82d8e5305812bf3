//! Marketplace recognition from product URLs.
//!
//! Validates that a source URL belongs to a known regional storefront and
//! exposes the per-storefront language preference used by retrieval layers.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// Storefront domain suffixes accepted after `amazon.`.
pub const MARKETPLACE_SUFFIXES: &[&str] = &[
    "com", "ca", "co.uk", "de", "fr", "es", "it", "co.jp", "com.au", "com.br", "nl", "in",
    "com.mx", "cn", "sg",
];

/// Language preference for storefronts without a dedicated entry.
pub const DEFAULT_LANGUAGE_PREFERENCE: &str = "en-US,en;q=0.9";

/// Storefront suffix to `Accept-Language` preference.
pub const LANGUAGE_PREFERENCES: &[(&str, &str)] = &[
    ("es", "es-ES,es;q=0.9"),
    ("de", "de-DE,de;q=0.9"),
    ("fr", "fr-FR,fr;q=0.9"),
    ("it", "it-IT,it;q=0.9"),
    ("co.jp", "ja-JP,ja;q=0.9"),
    ("com.br", "pt-BR,pt;q=0.9"),
    ("nl", "nl-NL,nl;q=0.9"),
    ("cn", "zh-CN,zh;q=0.9"),
    ("in", "hi-IN,hi;q=0.9,en-IN;q=0.8"),
    ("com.mx", "es-MX,es;q=0.9"),
];

const STOREFRONT_LABEL: &str = "amazon";

/// A recognized regional storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marketplace {
    suffix: &'static str,
}

impl Marketplace {
    /// Recognizes the storefront of a product URL.
    ///
    /// URLs without a scheme are read as `https`, including `host:port`
    /// forms that would otherwise parse with the host as the scheme.
    /// Anything that is not on a known storefront host is rejected with
    /// [`Error::InvalidUrl`].
    pub fn from_url(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::invalid_url());
        }

        host_of(url)
            .or_else(|| host_of(&format!("https://{url}")))
            .as_deref()
            .and_then(Self::from_host)
            .ok_or_else(Error::invalid_url)
    }

    /// Recognizes a storefront host such as `www.amazon.co.uk`.
    #[must_use]
    pub fn from_host(host: &str) -> Option<Self> {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        let labels: Vec<&str> = host.split('.').collect();
        let position = labels.iter().rposition(|label| *label == STOREFRONT_LABEL)?;
        let suffix = labels[position + 1..].join(".");

        MARKETPLACE_SUFFIXES
            .iter()
            .find(|known| **known == suffix)
            .map(|&known| Self { suffix: known })
    }

    /// Domain suffix after `amazon.`, e.g. `co.uk`.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Storefront domain, e.g. `amazon.co.uk`.
    #[must_use]
    pub fn domain(&self) -> String {
        format!("{STOREFRONT_LABEL}.{}", self.suffix)
    }

    /// `Accept-Language` preference for this storefront.
    #[must_use]
    pub fn language_preference(&self) -> &'static str {
        language_preference(self.suffix)
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{STOREFRONT_LABEL}.{}", self.suffix)
    }
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
}

/// Language preference for a storefront suffix, falling back to
/// [`DEFAULT_LANGUAGE_PREFERENCE`].
#[must_use]
pub fn language_preference(suffix: &str) -> &'static str {
    LANGUAGE_PREFERENCES
        .iter()
        .find(|(known, _)| *known == suffix)
        .map_or(DEFAULT_LANGUAGE_PREFERENCE, |&(_, preference)| preference)
}
