//! # Project Scaffold
//!
//! Builds the five static configuration files appended to every generated
//! website: the package manifest, the framework config, the CSS framework
//! config, a utility module and a README. Apart from the project name and
//! description (both already sanitized by the pipeline), none of them echo
//! request input, so they are marked `safe = true, validated = true` without
//! a re-scan.

use common::model::generated::{GeneratedFile, GeneratedFileKind};
use include_dir::{include_dir, Dir};

static SCAFFOLD: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets/scaffold");

/// Produces the scaffold files for one generated project.
///
/// `project_name` and `description` must already be sanitized.
/// `required_packages` comes from the selected template and is folded into
/// the package manifest's dependency table.
pub fn scaffold_files(
    project_name: &str,
    description: &str,
    required_packages: &[String],
) -> Result<Vec<GeneratedFile>, String> {
    let mut files = vec![package_manifest(project_name, description, required_packages)?];

    for (asset, path, kind) in [
        ("next.config.js", "next.config.js", GeneratedFileKind::Config),
        (
            "tailwind.config.js",
            "tailwind.config.js",
            GeneratedFileKind::Config,
        ),
        ("utils.ts", "lib/utils.ts", GeneratedFileKind::Config),
        ("README.md", "README.md", GeneratedFileKind::Config),
    ] {
        let source = SCAFFOLD
            .get_file(asset)
            .ok_or_else(|| format!("missing scaffold asset: {}", asset))?;
        let content = String::from_utf8_lossy(source.contents())
            .replace("{{projectName}}", project_name)
            .replace("{{description}}", description);
        files.push(GeneratedFile {
            path: path.to_string(),
            content,
            kind,
            safe: true,
            validated: true,
        });
    }

    Ok(files)
}

fn package_manifest(
    project_name: &str,
    description: &str,
    required_packages: &[String],
) -> Result<GeneratedFile, String> {
    let mut dependencies = serde_json::Map::new();
    dependencies.insert("next".to_string(), "14.2.0".into());
    dependencies.insert("react".to_string(), "18.3.0".into());
    dependencies.insert("react-dom".to_string(), "18.3.0".into());
    for package in required_packages {
        dependencies.insert(package.clone(), "latest".into());
    }

    let manifest = serde_json::json!({
        "name": package_name(project_name),
        "version": "0.1.0",
        "private": true,
        "description": description,
        "scripts": {
            "dev": "next dev",
            "build": "next build",
            "start": "next start"
        },
        "dependencies": dependencies,
        "devDependencies": {
            "tailwindcss": "3.4.0",
            "typescript": "5.4.0"
        }
    });

    let content =
        serde_json::to_string_pretty(&manifest).map_err(|e| e.to_string())?;
    Ok(GeneratedFile {
        path: "package.json".to_string(),
        content,
        kind: GeneratedFileKind::Config,
        safe: true,
        validated: true,
    })
}

/// npm package names: lowercase, spaces to hyphens, nothing exotic.
fn package_name(project_name: &str) -> String {
    let name: String = project_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let name = name.trim_matches('-').to_string();
    if name.is_empty() {
        "generated-site".to_string()
    } else {
        name
    }
}
