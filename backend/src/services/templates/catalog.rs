//! # Template Catalog
//!
//! The read-only registry of website templates. Template sources live under
//! `backend/assets/templates/` and are embedded into the binary with
//! `include_dir!`; the catalog is built once, on first access, and never
//! mutated afterwards, so it needs no synchronization.
//!
//! Each template directory carries a `manifest.json` describing the template
//! metadata and its files; every file entry names a `source` that is resolved
//! against the template's own directory, or against `templates/shared/` for
//! the component templates both templates reuse. A malformed manifest or a
//! missing source is a build defect, not a runtime condition, so catalog
//! initialization panics on it.

use common::model::template::{
    TemplateCategory, TemplateFile, TemplateVariable, WebsiteTemplate,
};
use common::model::{generated::GeneratedFileKind, template::SafetyLevel};
use include_dir::{include_dir, Dir};
use once_cell::sync::Lazy;
use serde::Deserialize;

static TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets/templates");

/// The template directories shipped with the binary, in catalog order.
const TEMPLATE_DIRS: [&str; 2] = ["modern-landing", "business-portfolio"];

/// On-disk shape of a template `manifest.json`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    id: String,
    name: String,
    description: String,
    category: TemplateCategory,
    safety_level: SafetyLevel,
    required_packages: Vec<String>,
    files: Vec<ManifestFile>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestFile {
    path: String,
    kind: GeneratedFileKind,
    source: String,
    #[serde(default)]
    variables: Vec<TemplateVariable>,
}

static CATALOG: Lazy<Vec<WebsiteTemplate>> = Lazy::new(|| {
    TEMPLATE_DIRS.iter().map(|dir| load_template(dir)).collect()
});

fn load_template(dir: &str) -> WebsiteTemplate {
    let manifest_path = format!("{}/manifest.json", dir);
    let manifest_file = TEMPLATES
        .get_file(&manifest_path)
        .unwrap_or_else(|| panic!("template catalog: missing {}", manifest_path));
    let manifest: Manifest = serde_json::from_slice(manifest_file.contents())
        .unwrap_or_else(|e| panic!("template catalog: invalid {}: {}", manifest_path, e));

    let files = manifest
        .files
        .into_iter()
        .map(|file| {
            // Shared component sources live next to the template directories.
            let source_path = if file.source.starts_with("shared/") {
                file.source.clone()
            } else {
                format!("{}/{}", dir, file.source)
            };
            let source = TEMPLATES
                .get_file(&source_path)
                .unwrap_or_else(|| panic!("template catalog: missing {}", source_path));
            TemplateFile {
                path: file.path,
                content: String::from_utf8_lossy(source.contents()).into_owned(),
                kind: file.kind,
                variables: file.variables,
            }
        })
        .collect();

    WebsiteTemplate {
        id: manifest.id,
        name: manifest.name,
        description: manifest.description,
        category: manifest.category,
        files,
        required_packages: manifest.required_packages,
        safety_level: manifest.safety_level,
    }
}

/// Returns the template with the given id, if the catalog ships it.
pub fn get(id: &str) -> Option<&'static WebsiteTemplate> {
    CATALOG.iter().find(|t| t.id == id)
}

/// All templates, in catalog order.
pub fn all() -> &'static [WebsiteTemplate] {
    &CATALOG
}

/// All templates of a given category.
pub fn by_category(category: TemplateCategory) -> Vec<&'static WebsiteTemplate> {
    CATALOG.iter().filter(|t| t.category == category).collect()
}

/// Picks the template for a request description.
///
/// First-match keyword heuristic over the lowercased description: business
/// words select the portfolio template, landing words select the landing
/// template, and everything else falls back to the landing template. No
/// scoring and no blending; `None` only happens when the catalog itself is
/// missing the fallback template.
pub fn select_template(description: &str) -> Option<&'static WebsiteTemplate> {
    let description = description.to_lowercase();
    let id = if ["business", "company", "professional"]
        .iter()
        .any(|word| description.contains(word))
    {
        "business-portfolio"
    } else {
        // The landing keywords (landing, product, service) and the fallback
        // coincide, so no separate branch is needed.
        "modern-landing"
    };
    get(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ships_exactly_two_templates() {
        let ids: Vec<&str> = all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["modern-landing", "business-portfolio"]);
    }

    #[test]
    fn every_template_has_page_and_shared_components() {
        for template in all() {
            assert_eq!(template.files.len(), 3, "template {}", template.id);
            assert!(template.files.iter().any(|f| f.path == "app/page.tsx"));
            assert!(template
                .files
                .iter()
                .any(|f| f.path == "components/ui/button.tsx"));
            assert!(template
                .files
                .iter()
                .any(|f| f.path == "components/ui/card.tsx"));
            for file in &template.files {
                assert!(!file.content.is_empty(), "empty source for {}", file.path);
                assert!(!file.variables.is_empty(), "no variables for {}", file.path);
            }
        }
    }

    #[test]
    fn category_lookup_matches_manifests() {
        assert_eq!(by_category(TemplateCategory::Landing).len(), 1);
        assert_eq!(by_category(TemplateCategory::Business).len(), 1);
        assert!(by_category(TemplateCategory::Blog).is_empty());
    }

    #[test]
    fn business_keywords_select_the_portfolio_template() {
        let template = select_template("business consulting company").unwrap();
        assert_eq!(template.id, "business-portfolio");
    }

    #[test]
    fn landing_keywords_and_the_default_select_the_landing_template() {
        for description in [
            "a landing page for my product",
            "something completely different",
        ] {
            let template = select_template(description).unwrap();
            assert_eq!(template.id, "modern-landing");
        }
    }

    #[test]
    fn unknown_id_returns_none() {
        assert!(get("no-such-template").is_none());
    }
}
