//! Navigation tree traversal.
//!
//! A `docs.json` navigation tree nests tabs, anchors and groups freely. Every
//! object carrying a `group` name and a `pages` array is a group; its first
//! string page is the section's landing page.

use serde_json::Value as Json;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("failed to read navigation file {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("failed to parse JSON in {0}: {1}")]
    Parse(String, #[source] serde_json::Error),

    #[error("key '{key}' not found in {path}")]
    MissingKey { path: String, key: String },
}

/// A group found in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    pub group: String,
    /// First string entry of `pages`, if any.
    pub page: Option<String>,
}

/// Groups of a navigation file, in depth-first document order.
#[derive(Debug, Clone, Default)]
pub struct NavigationPlan {
    pub targets: Vec<PageTarget>,
}

impl NavigationPlan {
    /// Read `path` and collect the groups under `key`.
    pub fn load(path: &Path, key: &str) -> Result<Self, NavigationError> {
        let text = fs::read_to_string(path)
            .map_err(|e| NavigationError::Read(path.display().to_string(), e))?;
        let data: Json = serde_json::from_str(&text)
            .map_err(|e| NavigationError::Parse(path.display().to_string(), e))?;
        let nav = data.get(key).ok_or_else(|| NavigationError::MissingKey {
            path: path.display().to_string(),
            key: key.to_string(),
        })?;
        Ok(Self::from_tree(nav))
    }

    pub fn from_tree(nav: &Json) -> Self {
        let targets = group_objects(nav)
            .into_iter()
            .map(|obj| {
                let group = obj.get("group").and_then(Json::as_str).unwrap_or_default();
                let pages = obj.get("pages").and_then(Json::as_array).map(Vec::as_slice);
                PageTarget {
                    group: group.to_string(),
                    page: pages.and_then(first_string_page).map(str::to_string),
                }
            })
            .collect();
        Self { targets }
    }
}

/// Every object with `group` and an array `pages`, anywhere in the tree.
///
/// Groups nested inside a group's `pages` are yielded after their parent.
pub fn group_objects(node: &Json) -> Vec<&serde_json::Map<String, Json>> {
    let mut out = Vec::new();
    collect_groups(node, &mut out);
    out
}

fn collect_groups<'a>(node: &'a Json, out: &mut Vec<&'a serde_json::Map<String, Json>>) {
    match node {
        Json::Object(obj) => {
            if obj.contains_key("group") && obj.get("pages").is_some_and(Json::is_array) {
                out.push(obj);
            }
            for v in obj.values() {
                collect_groups(v, out);
            }
        }
        Json::Array(items) => {
            for item in items {
                collect_groups(item, out);
            }
        }
        _ => {}
    }
}

/// First plain string in `pages`; nested group objects are passed over.
pub fn first_string_page(pages: &[Json]) -> Option<&str> {
    pages.iter().find_map(Json::as_str)
}

/// Strip a leading `/` and an optional leading `docs/`.
pub fn normalize_nav_path(page: &str) -> &str {
    let page = page.trim_start_matches('/');
    page.strip_prefix("docs/").unwrap_or(page)
}

/// Resolve a navigation page to an existing file under `root`.
///
/// Patterns are tried in order with `{path}` replaced by the normalized page.
pub fn resolve_page(root: &Path, page: &str, patterns: &[String]) -> Option<PathBuf> {
    let normalized = normalize_nav_path(page);
    patterns.iter().find_map(|pattern| {
        let candidate = root.join(pattern.replace("{path}", normalized));
        if candidate.is_file() {
            Some(candidate)
        } else {
            debug!(candidate = %candidate.display(), "no file for pattern");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_resolution_patterns;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn finds_nested_groups_in_order() {
        let nav = json!({
            "tabs": [
                {
                    "tab": "Guides",
                    "groups": [
                        { "group": "Get Started", "pages": ["docs/get-started/index", "docs/get-started/install"] },
                        {
                            "group": "Payments",
                            "pages": [
                                { "group": "Cards", "pages": ["/docs/payments/cards"] },
                                "docs/payments/overview"
                            ]
                        }
                    ]
                }
            ]
        });

        let plan = NavigationPlan::from_tree(&nav);
        let groups: Vec<_> = plan.targets.iter().map(|t| t.group.as_str()).collect();
        assert_eq!(groups, vec!["Get Started", "Payments", "Cards"]);
        assert_eq!(plan.targets[1].page.as_deref(), Some("docs/payments/overview"));
        assert_eq!(plan.targets[2].page.as_deref(), Some("/docs/payments/cards"));
    }

    #[test]
    fn group_without_string_pages() {
        let nav = json!([{ "group": "Empty", "pages": [] }, { "group": "NoPages" }]);
        let plan = NavigationPlan::from_tree(&nav);
        assert_eq!(plan.targets, vec![PageTarget { group: "Empty".to_string(), page: None }]);
    }

    #[test]
    fn normalizes_paths() {
        assert_eq!(normalize_nav_path("/docs/get-started/onboarding"), "get-started/onboarding");
        assert_eq!(normalize_nav_path("api/intro"), "api/intro");
        assert_eq!(normalize_nav_path("//docs/a"), "a");
    }

    #[test]
    fn resolves_first_matching_pattern() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("docs/payments")).unwrap();
        fs::create_dir_all(root.join("guides")).unwrap();
        fs::write(root.join("docs/payments/index.mdx"), "").unwrap();
        fs::write(root.join("guides/intro.md"), "").unwrap();

        let patterns = default_resolution_patterns();
        assert_eq!(
            resolve_page(root, "/docs/payments", &patterns),
            Some(root.join("docs/payments/index.mdx"))
        );
        assert_eq!(resolve_page(root, "guides/intro", &patterns), Some(root.join("guides/intro.md")));
        assert_eq!(resolve_page(root, "missing/page", &patterns), None);
    }

    #[test]
    fn load_reports_missing_key() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("docs.json");
        fs::write(&path, r#"{ "name": "docs" }"#).unwrap();
        let err = NavigationPlan::load(&path, "navigation").unwrap_err();
        assert!(matches!(err, NavigationError::MissingKey { ref key, .. } if key == "navigation"));
    }

    #[test]
    fn load_reports_bad_json() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("docs.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(NavigationPlan::load(&path, "navigation"), Err(NavigationError::Parse(..))));
    }
}
