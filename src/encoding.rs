//! Character set detection for raw page bytes.
//!
//! Regional storefronts still serve pages in legacy encodings (Shift_JIS,
//! GBK, windows-1252). Bytes are decoded to UTF-8 before parsing, using the
//! charset the page declares about itself.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Only the head of the document is searched for a declaration.
const SNIFF_LEN: usize = 1024;

/// Matches both `<meta charset="...">` and the `http-equiv` form
/// `content="text/html; charset=..."`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?([A-Za-z0-9._:\-]+)"#)
        .expect("META_CHARSET regex")
});

/// Encoding declared in the document head, or UTF-8.
#[must_use]
pub fn declared_encoding(bytes: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);

    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes page bytes to UTF-8.
///
/// A byte-order mark overrides the declared charset. Malformed sequences
/// become U+FFFD instead of failing.
#[must_use]
pub fn decode_page(bytes: &[u8]) -> String {
    let encoding = declared_encoding(bytes);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(encoding = used.name(), "page contained malformed byte sequences");
    }
    text.into_owned()
}
