// SPDX-License-Identifier: MPL-2.0
//! Removal of user data from diagnostic messages.
//!
//! Free-form messages pass through [`sanitize_message`], which masks file
//! paths and URLs. User-typed URLs are only ever recorded as a
//! [`UrlSummary`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[A-Za-z][A-Za-z0-9+.\-]*://[^\s"'()\[\]]*"#).expect("url regex should compile")
});

static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"("#,
        r#"/home/[^\s"'()\[\]]+"#,
        r#"|/Users/[^\s"'()\[\]]+"#,
        r#"|/tmp/[^\s"'()\[\]]+"#,
        r#"|/var/[^\s"'()\[\]]+"#,
        r#"|~/[^\s"'()\[\]]+"#,
        r#"|[A-Za-z]:\\[^\s"'()\[\]]+"#,
        r#"|\\\\[^\s"'()\[\]]+"#,
        r#")"#,
    ))
    .expect("path regex should compile")
});

/// Replaces URLs with `<url>` and file paths with `<path>`.
///
/// ```
/// use iced_qr::diagnostics::sanitize_message;
///
/// assert_eq!(
///     sanitize_message("Failed to write /home/user/Downloads/qrcode-1.png"),
///     "Failed to write <path>"
/// );
/// assert_eq!(sanitize_message("encode https://a.example/x failed"), "encode <url> failed");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let without_urls = URL_PATTERN.replace_all(message, "<url>");
    PATH_PATTERN.replace_all(&without_urls, "<path>").into_owned()
}

/// Privacy-preserving shape of a URL candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSummary {
    /// Length of the candidate in bytes.
    pub length: usize,
    /// Scheme when the candidate parses, e.g. `https`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl UrlSummary {
    #[must_use]
    pub fn of(candidate: &str) -> Self {
        Self {
            length: candidate.len(),
            scheme: Url::parse(candidate.trim())
                .ok()
                .map(|url| url.scheme().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_unix_and_windows_paths() {
        assert_eq!(sanitize_message("open /tmp/a/b.png"), "open <path>");
        assert_eq!(sanitize_message(r"open C:\Users\me\a.png"), "open <path>");
    }

    #[test]
    fn masks_urls_before_paths() {
        assert_eq!(
            sanitize_message("file:///home/me/x and http://example.com/a?b=1"),
            "<url> and <url>"
        );
    }

    #[test]
    fn leaves_plain_messages_alone() {
        assert_eq!(sanitize_message("data too long"), "data too long");
    }

    #[test]
    fn url_summary_records_length_and_scheme_only() {
        let summary = UrlSummary::of("https://example.com");
        assert_eq!(summary.length, 19);
        assert_eq!(summary.scheme.as_deref(), Some("https"));
    }

    #[test]
    fn url_summary_of_invalid_input_has_no_scheme() {
        let summary = UrlSummary::of("example.com");
        assert_eq!(summary.length, 11);
        assert!(summary.scheme.is_none());
    }
}
