//! Value syntax predicates

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// URL validation regex
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap()
});

// Compiled `pattern` attributes, keyed by source text. `None` marks a
// pattern that failed to compile, so the failure is only paid for once.
static PATTERN_CACHE: Lazy<Mutex<HashMap<String, Option<Regex>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate URL format
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// Full-match test of a value against a `pattern` attribute.
///
/// The pattern is anchored the way HTML pattern attributes are: the whole
/// value must match, not a substring. An uncompilable pattern matches
/// everything, mirroring how browsers ignore invalid pattern attributes;
/// use [`pattern_compiles`] to detect and report that case.
pub fn matches_pattern(value: &str, pattern: &str) -> bool {
    let mut cache = PATTERN_CACHE.lock().unwrap();
    let compiled = cache
        .entry(pattern.to_string())
        .or_insert_with(|| Regex::new(&format!("^(?:{})$", pattern)).ok());
    match compiled {
        Some(regex) => regex.is_match(value),
        None => true,
    }
}

/// Whether a `pattern` attribute compiles as an anchored regex.
pub fn pattern_compiles(pattern: &str) -> bool {
    let mut cache = PATTERN_CACHE.lock().unwrap();
    cache
        .entry(pattern.to_string())
        .or_insert_with(|| Regex::new(&format!("^(?:{})$", pattern)).ok())
        .is_some()
}
