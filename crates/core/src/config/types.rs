use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::frontmatter::EncodeOptions;
use crate::retitle::{OverviewMode, OverviewRule};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub overview: OverviewConfig,
    #[serde(default)]
    pub encoding: EncodingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub docs_root: String,
    /// Navigation file; defaults to `{{docs_root}}/docs.json`.
    pub docs_json: Option<String>,
    /// Key inside the navigation file holding the tree.
    #[serde(default = "default_navigation_key")]
    pub navigation_key: String,
    /// Document extensions picked up by discovery.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Patterns tried in order when resolving a navigation page to a file.
    /// `{path}` is replaced by the normalized page path.
    #[serde(default = "default_resolution_patterns")]
    pub resolution_patterns: Vec<String>,
}

fn default_navigation_key() -> String {
    "navigation".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["mdx".to_string(), "md".to_string()]
}

pub fn default_resolution_patterns() -> Vec<String> {
    [
        "{path}.mdx",
        "{path}.md",
        "docs/{path}.mdx",
        "docs/{path}.md",
        "{path}/index.mdx",
        "{path}/index.md",
        "docs/{path}/index.mdx",
        "docs/{path}/index.md",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Settings for the navigation-driven retitle run.
#[derive(Debug, Deserialize, Clone)]
pub struct OverviewConfig {
    #[serde(default)]
    pub mode: OverviewMode,
    #[serde(default = "default_overview_text")]
    pub text: String,
    #[serde(default = "default_skip_if_sidebar_exists")]
    pub skip_if_sidebar_exists: bool,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            mode: OverviewMode::default(),
            text: default_overview_text(),
            skip_if_sidebar_exists: default_skip_if_sidebar_exists(),
        }
    }
}

impl OverviewConfig {
    pub fn rule(&self) -> OverviewRule {
        OverviewRule {
            mode: self.mode,
            text: self.text.clone(),
            skip_if_sidebar_exists: self.skip_if_sidebar_exists,
        }
    }
}

fn default_overview_text() -> String {
    "Overview".to_string()
}

fn default_skip_if_sidebar_exists() -> bool {
    true
}

/// Output formatting for re-encoded frontmatter.
#[derive(Debug, Deserialize, Clone)]
pub struct EncodingConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default = "default_quote")]
    pub quote: char,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self { indent: default_indent(), quote: default_quote() }
    }
}

impl EncodingConfig {
    pub fn options(&self) -> EncodeOptions {
        EncodeOptions::default().with_indent(self.indent).with_quote(self.quote)
    }
}

fn default_indent() -> usize {
    2
}

fn default_quote() -> char {
    '"'
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub docs_root: PathBuf,
    pub docs_json: PathBuf,
    pub navigation_key: String,
    pub extensions: Vec<String>,
    pub resolution_patterns: Vec<String>,
    pub overview: OverviewConfig,
    pub encoding: EncodingConfig,
    pub logging: LoggingConfig,
}
