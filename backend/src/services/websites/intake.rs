//! # Request Intake
//!
//! Extracts a structured `WebsiteRequest` draft from a natural-language chat
//! message. This is the collaborator that sits in front of the generation
//! pipeline: a chat layer calls `POST /api/websites/draft` with the raw
//! message, shows the extracted request to the user, and submits it to the
//! generate endpoint once confirmed.
//!
//! Extraction is keyword and regex based, on purpose: it needs no model
//! round-trip and its misses are visible to the user before generation runs.

use common::model::website::{SiteStyle, WebsiteRequest};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::services::validation::BASIC_COLORS;

static NAMED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:called|named)\s+"?([A-Za-z][A-Za-z0-9_-]*)"?"#)
        .expect("invalid name regex")
});
static FEATURES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bfeatures?\s*:\s*([^.\n]+)").expect("invalid features regex"));
static PAGES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bpages?\s*:\s*([^.\n]+)").expect("invalid pages regex"));

/// Words that commonly start a request sentence and must not be mistaken for
/// a site name in the capitalized-token fallback.
const OPENERS: &[&str] = &[
    "create", "make", "build", "generate", "i", "please", "a", "an", "the", "my", "need", "want",
    "website", "site", "page",
];

/// Drafts a `WebsiteRequest` from a chat message.
///
/// The full message becomes the description; the site name comes from a
/// `called`/`named` phrase, falling back to the first capitalized token and
/// then to "My Website". The first two basic color words become the style
/// colors, and `features:`/`pages:` comma lists are captured when present.
pub fn draft_request(message: &str) -> WebsiteRequest {
    let message = message.trim();

    WebsiteRequest {
        description: message.to_string(),
        site_name: extract_site_name(message),
        style: extract_style(message),
        pages: extract_list(&PAGES_RE, message),
        features: extract_list(&FEATURES_RE, message),
    }
}

fn extract_site_name(message: &str) -> String {
    if let Some(caps) = NAMED_RE.captures(message) {
        return caps[1].to_string();
    }

    for (i, word) in message.split_whitespace().enumerate() {
        if i == 0 {
            continue;
        }
        let token = word.trim_matches(|c: char| !c.is_alphanumeric());
        let capitalized = token
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false);
        if token.len() > 1 && capitalized && !OPENERS.contains(&token.to_lowercase().as_str()) {
            return token.to_string();
        }
    }

    "My Website".to_string()
}

fn extract_style(message: &str) -> Option<SiteStyle> {
    let mut found = Vec::new();
    for word in message.to_lowercase().split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if BASIC_COLORS.contains(&word) && found.len() < 2 {
            found.push(word.to_string());
        }
    }
    if found.is_empty() {
        return None;
    }
    Some(SiteStyle {
        primary_color: found.first().cloned(),
        secondary_color: found.get(1).cloned(),
        theme: None,
    })
}

fn extract_list(regex: &Regex, message: &str) -> Option<Vec<String>> {
    let caps = regex.captures(message)?;
    let items: Vec<String> = caps[1]
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_site_name_from_called_phrase() {
        let req = draft_request(
            "Create a modern website for my tech startup called TechStart with blue and purple colors",
        );
        assert_eq!(req.site_name, "TechStart");
        assert!(req.description.starts_with("Create a modern website"));
    }

    #[test]
    fn extracts_first_two_color_words_as_style() {
        let req = draft_request("A site called Acme with blue and purple colors");
        let style = req.style.unwrap();
        assert_eq!(style.primary_color.as_deref(), Some("blue"));
        assert_eq!(style.secondary_color.as_deref(), Some("purple"));
    }

    #[test]
    fn no_color_words_means_no_style() {
        let req = draft_request("A site called Acme");
        assert!(req.style.is_none());
    }

    #[test]
    fn falls_back_to_a_capitalized_token() {
        let req = draft_request("Create a landing page for Orbit");
        assert_eq!(req.site_name, "Orbit");
    }

    #[test]
    fn falls_back_to_the_default_name() {
        let req = draft_request("create a landing page for my shop");
        assert_eq!(req.site_name, "My Website");
    }

    #[test]
    fn captures_feature_lists() {
        let req = draft_request("A business site called Acme. Features: Consulting, Design, Support");
        assert_eq!(
            req.features,
            Some(vec![
                "Consulting".to_string(),
                "Design".to_string(),
                "Support".to_string()
            ])
        );
    }

    #[test]
    fn captures_page_lists() {
        let req = draft_request("A site called Acme. Pages: Home, About, Contact");
        assert_eq!(
            req.pages,
            Some(vec![
                "Home".to_string(),
                "About".to_string(),
                "Contact".to_string()
            ])
        );
    }
}
