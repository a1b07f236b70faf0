//! # Security Scanner
//!
//! Scans arbitrary text content against three fixed families of dangerous
//! code patterns and produces a `SecurityCheck` verdict. It is used twice in
//! the generation pipeline:
//!
//! 1. By the request validator, over the free-text request fields, before any
//!    template processing happens.
//! 2. By the generator, over every produced file after placeholder
//!    substitution, to set the per-file `safe` flag.
//!
//! ## Pattern families
//!
//! - **XSS** (high severity, -30 per matched pattern): HTML injection sinks,
//!   dynamic code evaluation, `javascript:` URLs, quoted HTML event handlers.
//! - **Injection** (high severity, -25): template-literal interpolation,
//!   environment access, dynamic module loading, child-process execution.
//! - **Malicious browser API use** (medium severity, -20): cookies, location
//!   assignment, web storage, network primitives, beacons.
//!
//! Each pattern entry that matches contributes exactly one issue and one
//! penalty, regardless of how many times it matches inside the content. The
//! score starts at 100 and is floored at 0; `passed` is true when no pattern
//! matched at all.
//!
//! This is regex matching over source text, not parsing: obfuscated dangerous
//! code can slip through, and legitimate uses of flagged APIs are reported
//! anyway. Callers decide policy; this module only reports findings.
//!
//! The module also owns `sanitize_fragment`, the scrubber applied to
//! free-text substitution values before they are inserted into templates.

use common::model::security::{IssueCategory, IssueSeverity, SecurityCheck, SecurityIssue};
use once_cell::sync::Lazy;
use regex::Regex;

/// One scannable pattern: the regex source and the message reported on match.
struct PatternSpec {
    pattern: &'static str,
    message: &'static str,
}

const XSS_PATTERNS: &[PatternSpec] = &[
    PatternSpec {
        pattern: r"(?i)<\s*script\b",
        message: "inline <script> element",
    },
    PatternSpec {
        pattern: r"dangerouslySetInnerHTML",
        message: "dangerouslySetInnerHTML usage",
    },
    PatternSpec {
        pattern: r"\.innerHTML\s*=",
        message: "direct innerHTML assignment",
    },
    PatternSpec {
        pattern: r"\.outerHTML\s*=",
        message: "direct outerHTML assignment",
    },
    PatternSpec {
        pattern: r"(?i)document\.write\s*\(",
        message: "document.write call",
    },
    PatternSpec {
        pattern: r"insertAdjacentHTML\s*\(",
        message: "insertAdjacentHTML call",
    },
    PatternSpec {
        pattern: r"\beval\s*\(",
        message: "dynamic code evaluation via eval",
    },
    PatternSpec {
        pattern: r"new\s+Function\s*\(",
        message: "dynamic code evaluation via Function constructor",
    },
    PatternSpec {
        pattern: r"(?i)javascript\s*:",
        message: "javascript: URL scheme",
    },
    PatternSpec {
        pattern: r#"(?i)\bon[a-z]+\s*=\s*["']"#,
        message: "quoted HTML event handler attribute",
    },
];

const INJECTION_PATTERNS: &[PatternSpec] = &[
    PatternSpec {
        pattern: r"\$\{[^}]*\}",
        message: "template literal interpolation",
    },
    PatternSpec {
        pattern: r"process\.env",
        message: "environment variable access",
    },
    PatternSpec {
        pattern: r"\brequire\s*\(",
        message: "dynamic module loading via require",
    },
    PatternSpec {
        pattern: r"\bimport\s*\(",
        message: "dynamic import call",
    },
    PatternSpec {
        pattern: r"child_process",
        message: "child_process reference",
    },
    PatternSpec {
        pattern: r"\bexec\s*\(",
        message: "process execution call",
    },
];

const MALICIOUS_PATTERNS: &[PatternSpec] = &[
    PatternSpec {
        pattern: r"document\.cookie",
        message: "cookie access",
    },
    PatternSpec {
        pattern: r"window\.location\s*=",
        message: "window.location assignment",
    },
    PatternSpec {
        pattern: r"location\.href\s*=",
        message: "location.href assignment",
    },
    PatternSpec {
        pattern: r"localStorage",
        message: "localStorage access",
    },
    PatternSpec {
        pattern: r"sessionStorage",
        message: "sessionStorage access",
    },
    PatternSpec {
        pattern: r"\bfetch\s*\(",
        message: "network request via fetch",
    },
    PatternSpec {
        pattern: r"XMLHttpRequest",
        message: "network request via XMLHttpRequest",
    },
    PatternSpec {
        pattern: r"new\s+WebSocket\s*\(",
        message: "WebSocket connection",
    },
    PatternSpec {
        pattern: r"navigator\.sendBeacon",
        message: "navigator.sendBeacon call",
    },
];

/// A pattern family compiled for scanning, with its fixed verdict metadata.
struct CompiledFamily {
    category: IssueCategory,
    severity: IssueSeverity,
    penalty: u32,
    entries: Vec<(Regex, &'static str)>,
}

fn compile(specs: &[PatternSpec]) -> Vec<(Regex, &'static str)> {
    specs
        .iter()
        .map(|spec| {
            let regex = Regex::new(spec.pattern).expect("security pattern: invalid regex");
            (regex, spec.message)
        })
        .collect()
}

static FAMILIES: Lazy<Vec<CompiledFamily>> = Lazy::new(|| {
    vec![
        CompiledFamily {
            category: IssueCategory::Xss,
            severity: IssueSeverity::High,
            penalty: 30,
            entries: compile(XSS_PATTERNS),
        },
        CompiledFamily {
            category: IssueCategory::Injection,
            severity: IssueSeverity::High,
            penalty: 25,
            entries: compile(INJECTION_PATTERNS),
        },
        CompiledFamily {
            category: IssueCategory::MaliciousCode,
            severity: IssueSeverity::Medium,
            penalty: 20,
            entries: compile(MALICIOUS_PATTERNS),
        },
    ]
});

/// Scans `content` against all pattern families.
///
/// Pure function: the verdict depends only on the arguments. `filename` is
/// carried into each reported issue so callers can attribute findings; it can
/// be a logical field name ("description") as well as a file path.
pub fn scan(content: &str, filename: &str) -> SecurityCheck {
    let mut issues = Vec::new();
    let mut score: u32 = 100;

    for family in FAMILIES.iter() {
        for (regex, message) in &family.entries {
            if regex.is_match(content) {
                issues.push(SecurityIssue {
                    severity: family.severity,
                    category: family.category,
                    message: (*message).to_string(),
                    file: filename.to_string(),
                });
                score = score.saturating_sub(family.penalty);
            }
        }
    }

    SecurityCheck {
        passed: issues.is_empty(),
        issues,
        score,
    }
}

static SCRIPT_ELEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<\s*script\b[^>]*>.*?<\s*/\s*script\s*>").expect("invalid script regex")
});
static SCRIPT_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<\s*/?\s*script\b[^>]*>").expect("invalid script tag regex"));
static EVENT_HANDLER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s*\bon[a-z]+\s*=\s*("[^"]*"|'[^']*')"#).expect("invalid handler regex")
});
static JS_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript\s*:").expect("invalid scheme regex"));

/// Scrubs a free-text value before it is substituted into a template.
///
/// Removes `<script>` elements (and stray script tags), quoted HTML event
/// handler attributes, and `javascript:` schemes. Everything else passes
/// through untouched; this is a targeted scrub, not an HTML parser.
pub fn sanitize_fragment(value: &str) -> String {
    let cleaned = SCRIPT_ELEMENT_RE.replace_all(value, "");
    let cleaned = SCRIPT_TAG_RE.replace_all(&cleaned, "");
    let cleaned = EVENT_HANDLER_RE.replace_all(&cleaned, "");
    let cleaned = JS_SCHEME_RE.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_content_passes_with_full_score() {
        let check = scan("export function Hello() { return null; }", "app/page.tsx");
        assert!(check.passed);
        assert!(check.issues.is_empty());
        assert_eq!(check.score, 100);
    }

    #[test]
    fn script_tag_is_flagged_as_high_severity_xss() {
        let check = scan("<script>alert(1)</script>", "description");
        assert!(!check.passed);
        let issue = check
            .issues
            .iter()
            .find(|i| i.category == IssueCategory::Xss)
            .expect("expected an xss issue");
        assert_eq!(issue.severity, IssueSeverity::High);
        assert_eq!(issue.file, "description");
    }

    #[test]
    fn eval_is_flagged_and_penalized_once_per_pattern() {
        // Two eval occurrences, one pattern entry: one issue, one penalty.
        let check = scan("eval(a); eval(b);", "x.js");
        assert!(!check.passed);
        assert_eq!(check.issues.len(), 1);
        assert_eq!(check.score, 70);
    }

    #[test]
    fn score_is_floored_at_zero() {
        let content = "<script>eval(x)</script> document.write(y) \
                       ${inject} process.env require('fs') \
                       document.cookie localStorage fetch(url)";
        let check = scan(content, "x.js");
        assert!(!check.passed);
        assert_eq!(check.score, 0);
    }

    #[test]
    fn browser_api_family_is_medium_severity() {
        let check = scan("localStorage.setItem('k', 'v')", "x.ts");
        assert_eq!(check.issues.len(), 1);
        assert_eq!(check.issues[0].category, IssueCategory::MaliciousCode);
        assert_eq!(check.issues[0].severity, IssueSeverity::Medium);
        assert_eq!(check.score, 80);
    }

    #[test]
    fn sanitize_strips_script_elements() {
        let out = sanitize_fragment("Hello <script>alert(1)</script>world");
        assert_eq!(out, "Hello world");
    }

    #[test]
    fn sanitize_strips_event_handlers_and_js_schemes() {
        let out = sanitize_fragment(r#"<a href="javascript:run()" onclick="steal()">go</a>"#);
        assert!(!out.contains("onclick"));
        assert!(!out.to_lowercase().contains("javascript:"));
        assert!(out.contains("go"));
    }

    #[test]
    fn sanitize_leaves_plain_text_untouched() {
        assert_eq!(
            sanitize_fragment("A modern site for my startup"),
            "A modern site for my startup"
        );
    }
}
