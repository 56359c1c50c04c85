//! Version token extraction from page text
//!
//! The supported Pokemon Go version appears on the page in one of several
//! shapes, tried in a fixed priority order. Every candidate must pass the
//! leading-zero acceptance check: Pokemon Go versions start with "0.", while
//! PGSharp's own version (also on the page) does not. That heuristic breaks
//! if PGSharp ever ships a 0.x release of its own; there is no stronger
//! signal in the page text to key on.

use regex::Regex;
use tracing::debug;

/// A single extraction rule: a matcher, a derivation rule for turning the
/// first capture group into a version string, and the shared acceptance
/// check applied to the derived candidate.
pub struct ExtractionPattern {
    name: &'static str,
    matcher: Regex,
    /// Literal prepended to the first capture group, for patterns that
    /// anchor on a fixed leading component instead of capturing it.
    prefix: Option<&'static str>,
}

impl ExtractionPattern {
    pub fn new(name: &'static str, pattern: &str, prefix: Option<&'static str>) -> Self {
        Self {
            name,
            matcher: Regex::new(pattern).expect("Failed to compile extraction pattern"),
            prefix,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Derive a candidate version from the first match in `text`, if any.
    /// Only the first match is considered; a rejected first match does not
    /// fall through to later matches of the same pattern.
    fn candidate(&self, text: &str) -> Option<String> {
        let captures = self.matcher.captures(text)?;
        let core = captures.get(1)?.as_str();
        Some(match self.prefix {
            Some(prefix) => format!("{prefix}{core}"),
            None => core.to_string(),
        })
    }
}

/// Acceptance check shared by all patterns: the first component of the
/// derived version must be exactly "0". Filters out PGSharp's own version,
/// phone numbers, dates, and other incidental numeric text.
fn accepts(version: &str) -> bool {
    version.split('.').next() == Some("0")
}

/// The default pattern set, in priority order.
pub fn default_patterns() -> Vec<ExtractionPattern> {
    vec![
        // "(0.385.2-G)" or "(0.385.2)"
        ExtractionPattern::new("parenthesized", r"\((\d+\.\d+\.\d+)[-\w]*\)", None),
        // "Pokemon Go: 0.385.2" or "PoGo 0.385.2"
        ExtractionPattern::new(
            "labeled",
            r"(?i)(?:Pokemon\s*Go|PoGo)[:\s]+(\d+\.\d+\.\d+)",
            None,
        ),
        // bare "0.385.2" anywhere in the text; broadest, so lowest priority
        ExtractionPattern::new("bare-leading-zero", r"0\.(\d+\.\d+)", Some("0.")),
    ]
}

/// Search `page_text` with each pattern in order and return the first
/// accepted candidate. Returns `None` when no pattern yields an accepted
/// match; the caller decides whether that is fatal.
pub fn extract_version(page_text: &str, patterns: &[ExtractionPattern]) -> Option<String> {
    for pattern in patterns {
        let Some(candidate) = pattern.candidate(page_text) else {
            continue;
        };
        if accepts(&candidate) {
            debug!("Pattern {} matched version {}", pattern.name(), candidate);
            return Some(candidate);
        }
        debug!(
            "Pattern {} matched {} but candidate was rejected",
            pattern.name(),
            candidate
        );
    }
    None
}
