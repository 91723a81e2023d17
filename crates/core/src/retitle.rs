//! Group-driven retitling of section landing pages.
//!
//! A navigation group's first page usually repeats the group name as its
//! title. In the sidebar that reads as "Payments > Payments", so the page is
//! relabelled (by default to "Overview") when its title or sidebar title
//! matches the group.

use crate::frontmatter::{Mapping, Value};
use serde::Deserialize;
use std::fmt;

pub const TITLE: &str = "title";
pub const SIDEBAR_TITLE: &str = "sidebarTitle";

/// Which field the rule rewrites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverviewMode {
    /// Set `sidebarTitle`, leaving `title` alone.
    #[default]
    AddSidebarTitle,
    /// Replace `title` itself.
    RetitleTitle,
}

impl std::str::FromStr for OverviewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add_sidebar_title" => Ok(Self::AddSidebarTitle),
            "retitle_title" => Ok(Self::RetitleTitle),
            other => Err(format!(
                "unknown mode '{other}' (expected add_sidebar_title or retitle_title)"
            )),
        }
    }
}

impl fmt::Display for OverviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddSidebarTitle => f.write_str("add_sidebar_title"),
            Self::RetitleTitle => f.write_str("retitle_title"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRule {
    pub mode: OverviewMode,
    pub text: String,
    pub skip_if_sidebar_exists: bool,
}

impl Default for OverviewRule {
    fn default() -> Self {
        Self {
            mode: OverviewMode::default(),
            text: "Overview".to_string(),
            skip_if_sidebar_exists: true,
        }
    }
}

/// What [`OverviewRule::apply`] did to a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetitleOutcome {
    Changed,
    /// Neither `title` nor `sidebarTitle` equals the group name.
    NoMatch { title: String, sidebar_title: String, group: String },
    AlreadyHasSidebarTitle,
    /// The matching field already holds the target text.
    Unchanged,
}

impl RetitleOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed)
    }
}

impl fmt::Display for RetitleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed => f.write_str("changed"),
            Self::NoMatch { title, sidebar_title, group } => write!(
                f,
                "neither title nor sidebarTitle match group [title='{title}' | sidebarTitle='{sidebar_title}' | group='{group}']"
            ),
            Self::AlreadyHasSidebarTitle => f.write_str("already has sidebarTitle"),
            Self::Unchanged => f.write_str("no changes needed"),
        }
    }
}

impl OverviewRule {
    /// Apply the rule to a decoded frontmatter mapping for the page that leads `group`.
    pub fn apply(&self, fm: &mut Mapping, group: &str) -> RetitleOutcome {
        let title = field_text(fm, TITLE);
        let sidebar = field_text(fm, SIDEBAR_TITLE);
        let group = clean_text(group);

        let sidebar_matches = sidebar == group;
        let title_matches = title == group;

        if !title_matches && !sidebar_matches {
            return RetitleOutcome::NoMatch { title, sidebar_title: sidebar, group };
        }

        let target = match self.mode {
            OverviewMode::AddSidebarTitle if sidebar_matches => SIDEBAR_TITLE,
            OverviewMode::AddSidebarTitle => {
                if self.skip_if_sidebar_exists && fm.contains_key(SIDEBAR_TITLE) {
                    return RetitleOutcome::AlreadyHasSidebarTitle;
                }
                SIDEBAR_TITLE
            }
            OverviewMode::RetitleTitle if title_matches => TITLE,
            OverviewMode::RetitleTitle => return RetitleOutcome::Unchanged,
        };

        if fm.get(target).and_then(Value::as_str) == Some(self.text.as_str()) {
            return RetitleOutcome::Unchanged;
        }
        fm.insert(target, self.text.as_str());
        RetitleOutcome::Changed
    }
}

fn field_text(fm: &Mapping, key: &str) -> String {
    match fm.get(key) {
        Some(Value::String(s)) => clean_text(s),
        Some(v) if v.is_scalar() => clean_text(&scalar_text(v)),
        _ => String::new(),
    }
}

fn scalar_text(v: &Value) -> String {
    match v {
        Value::Bool(b) => b.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

/// Trim, then strip surrounding double and single quotes.
pub fn clean_text(s: &str) -> String {
    s.trim().trim_matches('"').trim_matches('\'').to_string()
}
