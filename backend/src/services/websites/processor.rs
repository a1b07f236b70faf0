//! # Template Processor
//!
//! The pure text half of the generation pipeline: given a template file body
//! and a substitution context derived from the request, it produces the final
//! file content. No I/O, no shared state.
//!
//! Two placeholder forms are supported:
//!
//! - **Scalar**: every occurrence of `{{name}}` is textually replaced with
//!   the context value of that name. Unknown `{{...}}` sequences (for example
//!   JSX `style={{...}}` braces) are left untouched because replacement only
//!   searches for the exact markers of known names.
//! - **Repeated block**: `{{#name}}...{{/name}}` is located by the first
//!   occurrence of the start marker and the first occurrence of the end
//!   marker after it. The inner text is emitted once per item, substituting
//!   that item's own named properties, and the concatenated output replaces
//!   the whole span. Blocks are flat by design: a block must not contain
//!   another block of the same name, and the first end marker always
//!   terminates the block. If nesting is ever needed this module has to move
//!   to a parsed tree instead of string search.
//!
//! Blocks are expanded before scalars so that scalar placeholders inside the
//! repeated text (e.g. a color) are resolved by the ordinary scalar pass.
//!
//! ## Sanitization asymmetry
//!
//! Values derived from request free text (site name, hero title and
//! description, feature and service texts) are scrubbed with
//! `security::sanitize_fragment` before substitution. Color and contact
//! values are substituted as-is: they are either fixed defaults or already
//! constrained by validation and intake, and scrubbing them would mangle
//! legitimate values. This asymmetry is intentional; do not "fix" it.

use std::collections::HashMap;

use common::model::website::WebsiteRequest;

use crate::services::security;
use crate::services::validation::BASIC_COLORS;

const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";
const DEFAULT_SECONDARY_COLOR: &str = "#8b5cf6";
const MAX_FEATURES: usize = 6;

/// The substitution context built once per request and applied to every
/// template file.
pub struct TemplateContext {
    /// Scalar placeholder values, keyed by placeholder name.
    pub scalars: Vec<(String, String)>,
    /// Repeated-block items, keyed by block name. Each item maps the
    /// per-iteration placeholder names to their values.
    pub blocks: HashMap<String, Vec<HashMap<String, String>>>,
}

/// Derives the full substitution context from a request.
///
/// Heuristic content derivation: the hero title is the first five words of
/// the description and the hero description is the description truncated to
/// 100 characters. This trades fidelity for zero extra round-trips to the
/// caller.
pub fn build_context(request: &WebsiteRequest) -> TemplateContext {
    let site_name = security::sanitize_fragment(&request.site_name);
    let description = security::sanitize_fragment(&request.description);

    let hero_title: String = description
        .split_whitespace()
        .take(5)
        .collect::<Vec<_>>()
        .join(" ");
    let hero_description: String = description.chars().take(100).collect();

    let (primary_color, secondary_color) = derive_colors(request);

    let slug = slugify(&site_name);
    let scalars = vec![
        ("siteName".to_string(), site_name),
        ("heroTitle".to_string(), hero_title),
        ("heroDescription".to_string(), hero_description),
        ("primaryColor".to_string(), primary_color),
        ("secondaryColor".to_string(), secondary_color),
        ("email".to_string(), format!("hello@{}.com", slug)),
        ("phone".to_string(), "+1 (555) 123-4567".to_string()),
        ("location".to_string(), "San Francisco, CA".to_string()),
    ];

    let mut blocks = HashMap::new();
    let (features, services) = derive_feature_lists(request);
    blocks.insert("features".to_string(), features);
    blocks.insert("services".to_string(), services);

    TemplateContext { scalars, blocks }
}

/// Applies block and scalar substitution to one template body.
pub fn process_template(content: &str, ctx: &TemplateContext) -> String {
    let mut output = content.to_string();
    for (name, items) in &ctx.blocks {
        output = expand_block(&output, name, items);
    }
    for (name, value) in &ctx.scalars {
        let marker = format!("{{{{{}}}}}", name);
        output = output.replace(&marker, value);
    }
    output
}

/// Expands one `{{#name}}...{{/name}}` span, if present.
fn expand_block(content: &str, name: &str, items: &[HashMap<String, String>]) -> String {
    let start_marker = format!("{{{{#{}}}}}", name);
    let end_marker = format!("{{{{/{}}}}}", name);

    let Some(start) = content.find(&start_marker) else {
        return content.to_string();
    };
    let inner_start = start + start_marker.len();
    let Some(end_offset) = content[inner_start..].find(&end_marker) else {
        return content.to_string();
    };
    let inner = &content[inner_start..inner_start + end_offset];

    let mut rendered = String::new();
    for item in items {
        let mut repetition = inner.to_string();
        for (key, value) in item {
            let marker = format!("{{{{{}}}}}", key);
            repetition = repetition.replace(&marker, value);
        }
        rendered.push_str(&repetition);
    }

    let span_end = inner_start + end_offset + end_marker.len();
    let mut output = String::with_capacity(content.len());
    output.push_str(&content[..start]);
    output.push_str(&rendered);
    output.push_str(&content[span_end..]);
    output
}

/// Resolves the two accent colors: explicit style values win, then the first
/// two basic color words found in the description, then fixed defaults.
fn derive_colors(request: &WebsiteRequest) -> (String, String) {
    let style_primary = request
        .style
        .as_ref()
        .and_then(|s| s.primary_color.clone());
    let style_secondary = request
        .style
        .as_ref()
        .and_then(|s| s.secondary_color.clone());

    let mut found = Vec::new();
    for word in request.description.to_lowercase().split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if BASIC_COLORS.contains(&word) && found.len() < 2 {
            found.push(word.to_string());
        }
    }

    let primary = style_primary
        .or_else(|| found.first().cloned())
        .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string());
    let secondary = style_secondary
        .or_else(|| found.get(1).cloned())
        .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string());
    (primary, secondary)
}

type BlockItems = Vec<HashMap<String, String>>;

/// Builds the feature and service block item lists.
///
/// When the request names features, up to six are mapped 1:1 into both the
/// feature and service shapes with boilerplate descriptions. Otherwise three
/// canned entries fill each list.
fn derive_feature_lists(request: &WebsiteRequest) -> (BlockItems, BlockItems) {
    let named: Vec<String> = request
        .features
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|f| security::sanitize_fragment(f))
        .filter(|f| !f.is_empty())
        .take(MAX_FEATURES)
        .collect();

    if named.is_empty() {
        let canned_features = [
            ("Fast Performance", "Optimized pages that load in a blink."),
            ("Modern Design", "A clean, responsive look on every device."),
            ("Reliable Support", "Help is there whenever you need it."),
        ];
        let canned_services = [
            ("Consulting", "Expert guidance for your next step."),
            ("Implementation", "From plan to launch without the friction."),
            ("Support", "Ongoing care that keeps things running."),
        ];
        let features = canned_features
            .iter()
            .map(|(title, desc)| block_item("feature", title, desc))
            .collect();
        let services = canned_services
            .iter()
            .map(|(title, desc)| block_item("service", title, desc))
            .collect();
        return (features, services);
    }

    let features = named
        .iter()
        .map(|title| {
            let desc = format!("Professional {} tailored to your needs.", title);
            block_item("feature", title, &desc)
        })
        .collect();
    let services = named
        .iter()
        .map(|title| {
            let desc = format!("{} delivered by a team that cares.", title);
            block_item("service", title, &desc)
        })
        .collect();
    (features, services)
}

fn block_item(prefix: &str, title: &str, description: &str) -> HashMap<String, String> {
    HashMap::from([
        (format!("{}Title", prefix), title.to_string()),
        (format!("{}Description", prefix), description.to_string()),
    ])
}

fn slugify(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if slug.is_empty() {
        "example".to_string()
    } else {
        slug
    }
}
