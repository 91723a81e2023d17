use docfront_core::config::loader::ConfigLoader;
use docfront_core::retitle::OverviewMode;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
docs_root = "/tmp/docs"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.docs_root.display().to_string(), "/tmp/docs");
    assert_eq!(rc.docs_json, PathBuf::from("/tmp/docs/docs.json"));
    assert_eq!(rc.navigation_key, "navigation");
    assert_eq!(rc.extensions, vec!["mdx".to_string(), "md".to_string()]);
    assert_eq!(rc.resolution_patterns.len(), 8);
    assert_eq!(rc.overview.mode, OverviewMode::AddSidebarTitle);
    assert_eq!(rc.overview.text, "Overview");
    assert!(rc.overview.skip_if_sidebar_exists);
    assert_eq!(rc.encoding.indent, 2);
    assert_eq!(rc.logging.level, "info");
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("docfront/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
docs_root = "/tmp/def"

[profiles.work]
docs_root = "/tmp/work"
docs_json = "{{docs_root}}/site/mint.json"
navigation_key = "nav"
extensions = ["mdx"]
resolution_patterns = ["pages/{path}.mdx"]
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_profile, "work");
    assert_eq!(rc.docs_root.display().to_string(), "/tmp/work");
    assert_eq!(rc.docs_json, PathBuf::from("/tmp/work/site/mint.json"));
    assert_eq!(rc.navigation_key, "nav");
    assert_eq!(rc.extensions, vec!["mdx".to_string()]);
    assert_eq!(rc.resolution_patterns, vec!["pages/{path}.mdx".to_string()]);
}

#[test]
fn overview_encoding_and_logging_sections() {
    let toml = r#"
version = 1

[profiles.default]
docs_root = "/tmp/docs"

[overview]
mode = "retitle_title"
text = "Introduction"
skip_if_sidebar_exists = false

[encoding]
indent = 4
quote = "'"

[logging]
level = "debug"
file = "{{docs_root}}/docfront.log"
"#;

    let rc = ConfigLoader::from_toml(toml, "inline", None).expect("should load");
    assert_eq!(rc.overview.mode, OverviewMode::RetitleTitle);
    let rule = rc.overview.rule();
    assert_eq!(rule.text, "Introduction");
    assert!(!rule.skip_if_sidebar_exists);

    let opts = rc.encoding.options();
    assert_eq!(opts.indent, 4);
    assert_eq!(opts.quote, '\'');

    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/docs/docfront.log")));
}
