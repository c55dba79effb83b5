//! Syntactic field predicates shared by the post and author validators.
//!
//! All predicates are total: they never fail, only answer.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("url pattern"));

/// Letters, digits and underscores only; never empty.
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `local@domain.tld` with a top-level label of at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// `http://` or `https://` followed by at least one character, no whitespace.
pub fn is_valid_url(url: &str) -> bool {
    URL.is_match(url)
}

/// Length in characters, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn len_between(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&char_len(s))
}

/// A patch value that asks for a change; `Some("")` counts as absent.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
