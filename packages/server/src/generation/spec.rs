//! Site specification normalization.

use serde::Deserialize;

/// Palette applied when the transport form carries no usable color
/// tokens: accent first, background second.
pub const FALLBACK_PALETTE: [&str; 2] = ["#0ea5a4", "#ffffff"];

/// Untrusted wire form of a site specification. Every field is optional;
/// normalization defaults rather than rejects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSpecInput {
    pub title: Option<String>,

    /// Category tag ("business", "portfolio", ...)
    #[serde(rename = "type")]
    pub site_type: Option<String>,

    /// Comma-separated color tokens
    pub colors: Option<String>,

    pub desc: Option<String>,
}

/// Canonical site specification. Immutable once normalized; lives only
/// for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSpec {
    pub title: String,
    pub site_type: String,
    pub colors: Vec<String>,
    pub desc: String,
}

impl SiteSpec {
    /// Shape untrusted input into a canonical spec.
    ///
    /// Missing text fields become empty strings. The colors list is split
    /// on commas and trimmed; when no non-empty tokens remain it defaults
    /// to the fallback palette. Tokens themselves are opaque; validating
    /// them as CSS colors is left to future stricter validation.
    pub fn normalize(input: SiteSpecInput) -> Self {
        let colors: Vec<String> = input
            .colors
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        let colors = if colors.is_empty() {
            FALLBACK_PALETTE.iter().map(|c| c.to_string()).collect()
        } else {
            colors
        };

        Self {
            title: input.title.unwrap_or_default(),
            site_type: input.site_type.unwrap_or_default(),
            colors,
            desc: input.desc.unwrap_or_default(),
        }
    }

    /// Accent color: the first token.
    pub fn accent(&self) -> &str {
        self.colors
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_PALETTE[0])
    }

    /// Background color: the second token.
    pub fn background(&self) -> &str {
        self.colors
            .get(1)
            .map(String::as_str)
            .unwrap_or(FALLBACK_PALETTE[1])
    }
}
