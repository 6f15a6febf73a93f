//! Social reference extraction for the order detail view.
//!
//! Customers type their social accounts into a single free-text field. This
//! module splits that field into entries and classifies each one into a
//! [`SocialReference`] that the renderers can turn into a link.

use crate::domain::model::{Platform, SocialReference};
use once_cell::sync::Lazy;
use regex::Regex;

static INSTAGRAM_HANDLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[a-zA-Z0-9._]+").expect("valid regex"));
static INSTAGRAM_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)instagram:").expect("valid regex"));
static FACEBOOK_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)facebook:").expect("valid regex"));
static LINKEDIN_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin:").expect("valid regex"));
static TWITTER_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)twitter:|x:").expect("valid regex"));

/// One row of the classification table: a predicate over the raw and
/// lower-cased line, and the builder run when it matches.
///
/// A builder returning `None` drops the line; later rows are not tried.
struct Classifier {
    matches: fn(raw: &str, lower: &str) -> bool,
    build: fn(line: &str) -> Option<SocialReference>,
}

/// Evaluated top to bottom, first match wins.
static CLASSIFIERS: [Classifier; 6] = [
    Classifier {
        matches: is_instagram,
        build: build_instagram,
    },
    Classifier {
        matches: is_facebook,
        build: build_facebook,
    },
    Classifier {
        matches: is_linkedin,
        build: build_linkedin,
    },
    Classifier {
        matches: is_twitter,
        build: build_twitter,
    },
    Classifier {
        matches: is_generic_link,
        build: build_generic_link,
    },
    Classifier {
        matches: is_anything,
        build: build_plain_text,
    },
];

/// Splits `text` on commas and newlines and classifies every non-empty entry.
///
/// Output order follows input order and duplicates are kept. Blank input gives
/// an empty vector; callers show their "no socials" placeholder in that case.
pub fn extract_social_references(text: &str) -> Vec<SocialReference> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(classify_line)
        .collect()
}

/// Classifies a single trimmed entry.
pub fn classify_line(line: &str) -> Option<SocialReference> {
    let lower = line.to_lowercase();
    CLASSIFIERS
        .iter()
        .find(|classifier| (classifier.matches)(line, &lower))
        .and_then(|classifier| (classifier.build)(line))
}

/// Removes the first case-insensitive `label` occurrence and trims the rest.
fn strip_label(label: &Regex, line: &str) -> String {
    label.replacen(line, 1, "").trim().to_string()
}

fn is_instagram(raw: &str, lower: &str) -> bool {
    lower.contains("instagram") || raw.contains('@')
}

fn is_facebook(_raw: &str, lower: &str) -> bool {
    lower.contains("facebook") || lower.contains("fb.com")
}

fn is_linkedin(_raw: &str, lower: &str) -> bool {
    lower.contains("linkedin")
}

fn is_twitter(_raw: &str, lower: &str) -> bool {
    lower.contains("twitter") || lower.contains("x.com")
}

fn is_generic_link(raw: &str, _lower: &str) -> bool {
    raw.contains("http")
}

fn is_anything(_raw: &str, _lower: &str) -> bool {
    true
}

fn build_instagram(line: &str) -> Option<SocialReference> {
    if let Some(handle) = INSTAGRAM_HANDLE.find(line) {
        let handle = handle.as_str();
        return Some(SocialReference::link(
            Platform::Instagram,
            handle,
            format!("https://instagram.com/{}", &handle[1..]),
        ));
    }

    let username = strip_label(&INSTAGRAM_LABEL, line);
    if username.is_empty() {
        return None;
    }
    let href = format!("https://instagram.com/{}", username.replacen('@', "", 1));
    Some(SocialReference::link(Platform::Instagram, username, href))
}

fn build_facebook(line: &str) -> Option<SocialReference> {
    let mut href = strip_label(&FACEBOOK_LABEL, line);
    if !href.starts_with("http") {
        href = format!("https://{}", href);
    }
    Some(SocialReference::link(Platform::Facebook, "Facebook", href))
}

fn build_linkedin(line: &str) -> Option<SocialReference> {
    let mut href = strip_label(&LINKEDIN_LABEL, line);
    if !href.starts_with("http") {
        href = format!("https://linkedin.com/in/{}", href);
    }
    Some(SocialReference::link(Platform::LinkedIn, "LinkedIn", href))
}

fn build_twitter(line: &str) -> Option<SocialReference> {
    let mut href = strip_label(&TWITTER_LABEL, line);
    if !href.starts_with("http") {
        href = format!("https://twitter.com/{}", href.replacen('@', "", 1));
    }
    Some(SocialReference::link(Platform::Twitter, "Twitter/X", href))
}

fn build_generic_link(line: &str) -> Option<SocialReference> {
    Some(SocialReference::link(Platform::GenericLink, line, line))
}

fn build_plain_text(line: &str) -> Option<SocialReference> {
    Some(SocialReference::plain_text(line))
}
