//! # Request Validator
//!
//! Checks a `WebsiteRequest` before the generation pipeline runs:
//!
//! 1. **Required fields**: `description` and `siteName` must be non-blank.
//!    Missing fields arrive as empty strings (serde defaults) and are reported
//!    as `syntax` errors naming the field.
//! 2. **Content safety**: both free-text fields are run through the security
//!    scanner; every finding surfaces as a `security` error.
//! 3. **Color formats**: `style.primaryColor` and `style.secondaryColor`,
//!    when present, must be a 3- or 6-digit hex literal, one of the 16 basic
//!    CSS color keywords, or an `rgb()`/`rgba()` call with integer channels in
//!    0..=255 and an optional alpha in 0..=1. Anything else is a `syntax`
//!    error.
//!
//! Expected failures are modeled as data: the function returns a
//! `ValidationResult` and never panics or errors. The `warnings` list exists
//! in the result type but no rule populates it.

use common::model::validation::{ValidationError, ValidationResult};
use common::model::website::WebsiteRequest;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::services::security;

/// The 16 basic CSS color keywords accepted as color literals. Also used by
/// the template processor and the intake service to spot color words in
/// free text.
pub const BASIC_COLORS: [&str; 16] = [
    "black", "silver", "gray", "white", "maroon", "red", "purple", "fuchsia", "green", "lime",
    "olive", "yellow", "navy", "blue", "teal", "aqua",
];

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("invalid hex color regex")
});

static RGB_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(rgb|rgba)\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(0(?:\.\d+)?|1(?:\.0+)?)\s*)?\)$",
    )
    .expect("invalid rgb color regex")
});

/// Whether `value` is an accepted color literal.
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    if HEX_COLOR_RE.is_match(value) {
        return true;
    }
    if BASIC_COLORS.contains(&value.to_lowercase().as_str()) {
        return true;
    }
    if let Some(caps) = RGB_COLOR_RE.captures(value) {
        let channels_ok = (2..=4).all(|i| {
            caps[i]
                .parse::<u32>()
                .map(|channel| channel <= 255)
                .unwrap_or(false)
        });
        // An alpha component is only accepted on the rgba() form.
        let alpha_ok = match (&caps[1], caps.get(5)) {
            ("rgb", None) => true,
            ("rgba", Some(_)) => true,
            _ => false,
        };
        return channels_ok && alpha_ok;
    }
    false
}

/// Validates a generation request.
///
/// Returns a `ValidationResult` with `valid == errors.is_empty()`. The
/// request itself is never modified; sanitization happens later, in the
/// template processor.
pub fn validate_request(request: &WebsiteRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.description.trim().is_empty() {
        errors.push(ValidationError::syntax(
            "description",
            "description is required",
        ));
    }
    if request.site_name.trim().is_empty() {
        errors.push(ValidationError::syntax("siteName", "siteName is required"));
    }

    for (field, text) in [
        ("description", request.description.as_str()),
        ("siteName", request.site_name.as_str()),
    ] {
        if text.trim().is_empty() {
            continue;
        }
        let check = security::scan(text, field);
        for issue in check.issues {
            errors.push(ValidationError::security(field, issue.message));
        }
    }

    if let Some(style) = &request.style {
        for (field, value) in [
            ("style.primaryColor", style.primary_color.as_deref()),
            ("style.secondaryColor", style.secondary_color.as_deref()),
        ] {
            if let Some(color) = value {
                if !is_valid_color(color) {
                    errors.push(ValidationError::syntax(
                        field,
                        format!("'{}' is not a recognized color format", color),
                    ));
                }
            }
        }
    }

    ValidationResult::from_errors(errors)
}
