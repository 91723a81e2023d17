//! Per-document rewrite runs.
//!
//! Every document is read, decoded, mutated, re-encoded and written on its
//! own. A failure is recorded as that document's outcome and the run moves on
//! to the next one.

use crate::frontmatter::{
    EncodeError, EncodeOptions, FrontmatterModifyError, FrontmatterOps, Mapping, apply_ops,
    decode, locate, splice_with,
};
use crate::navigation::{NavigationPlan, resolve_page};
use crate::retitle::{OverviewRule, RetitleOutcome};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("failed to write {0}: {1}")]
    Write(String, #[source] std::io::Error),

    #[error("cannot encode frontmatter of {0}: {1}")]
    Encode(String, #[source] EncodeError),

    #[error("cannot modify frontmatter of {0}: {1}")]
    Modify(String, #[source] FrontmatterModifyError),
}

/// What a mutation decided for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Re-encode and write if the text changed.
    Keep,
    /// Leave the file untouched.
    Skip(RetitleOutcome),
}

/// Result of processing one document.
#[derive(Debug)]
pub enum FileOutcome {
    Updated,
    WouldChange,
    /// Re-encoding produced the exact original text.
    Unchanged,
    NoFrontmatter,
    Skipped(RetitleOutcome),
    /// The navigation group has no string page.
    NoStringPage,
    /// No resolution pattern matched the page.
    Unresolved(String),
    Failed(BatchError),
}

impl FileOutcome {
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Updated | Self::WouldChange)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Short upper-case label for tables and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Updated => "UPDATED",
            Self::WouldChange => "WOULD CHANGE",
            Self::Unchanged => "UNCHANGED",
            Self::NoFrontmatter => "NO FRONTMATTER",
            Self::Skipped(_) => "SKIP",
            Self::NoStringPage => "NO PAGE",
            Self::Unresolved(_) => "UNRESOLVED",
            Self::Failed(_) => "ERROR",
        }
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped(why) => write!(f, "SKIP ({why})"),
            Self::Unresolved(page) => write!(f, "UNRESOLVED (could not resolve page '{page}')"),
            Self::Failed(e) => write!(f, "ERROR ({e})"),
            other => f.write_str(other.label()),
        }
    }
}

/// Read `path`, let `mutate` edit its frontmatter, and write the result back.
///
/// With `dry_run` nothing is written and a change is reported as
/// [`FileOutcome::WouldChange`].
pub fn rewrite_file<F>(path: &Path, opts: &EncodeOptions, dry_run: bool, mutate: F) -> FileOutcome
where
    F: FnOnce(&mut Mapping) -> Result<Decision, BatchError>,
{
    let shown = path.display().to_string();
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => return failed(BatchError::Read(shown, e)),
    };

    let located = locate(&text);
    let Some(raw) = located.raw_block else {
        debug!(path = %shown, "no frontmatter");
        return FileOutcome::NoFrontmatter;
    };

    let mut fm = decode(raw);
    match mutate(&mut fm) {
        Ok(Decision::Keep) => {}
        Ok(Decision::Skip(why)) => {
            debug!(path = %shown, reason = %why, "skipped");
            return FileOutcome::Skipped(why);
        }
        Err(e) => return failed(e),
    }

    let new_text = match splice_with(&fm, located.body, opts) {
        Ok(t) => t,
        Err(e) => return failed(BatchError::Encode(shown, e)),
    };

    if new_text == text {
        return FileOutcome::Unchanged;
    }
    if dry_run {
        info!(path = %shown, "would change");
        return FileOutcome::WouldChange;
    }
    if let Err(e) = fs::write(path, new_text) {
        return failed(BatchError::Write(shown, e));
    }
    info!(path = %shown, "updated");
    FileOutcome::Updated
}

fn failed(e: BatchError) -> FileOutcome {
    warn!(error = %e, "document failed");
    FileOutcome::Failed(e)
}

/// Apply the retitle rule to the page leading `group`.
pub fn process_file(
    path: &Path,
    group: &str,
    rule: &OverviewRule,
    opts: &EncodeOptions,
    dry_run: bool,
) -> FileOutcome {
    rewrite_file(path, opts, dry_run, |fm| {
        Ok(match rule.apply(fm, group) {
            RetitleOutcome::Changed => Decision::Keep,
            other => Decision::Skip(other),
        })
    })
}

/// Re-encode a document's frontmatter in canonical form.
pub fn normalize_file(path: &Path, opts: &EncodeOptions, check: bool) -> FileOutcome {
    rewrite_file(path, opts, check, |_| Ok(Decision::Keep))
}

/// Apply field operations to a document's frontmatter.
pub fn modify_file(
    path: &Path,
    ops: &FrontmatterOps,
    render_ctx: &HashMap<String, String>,
    opts: &EncodeOptions,
    dry_run: bool,
) -> FileOutcome {
    rewrite_file(path, opts, dry_run, |fm| {
        apply_ops(fm, ops, render_ctx)
            .map(|()| Decision::Keep)
            .map_err(|e| BatchError::Modify(path.display().to_string(), e))
    })
}

/// One group of a navigation-driven run.
#[derive(Debug)]
pub struct GroupResult {
    pub group: String,
    pub file: Option<PathBuf>,
    pub outcome: FileOutcome,
}

/// Run the retitle rule over every group of a navigation plan.
pub fn run_overview(
    plan: &NavigationPlan,
    root: &Path,
    patterns: &[String],
    rule: &OverviewRule,
    opts: &EncodeOptions,
    dry_run: bool,
) -> Vec<GroupResult> {
    plan.targets
        .iter()
        .map(|target| {
            let group = target.group.clone();
            let Some(page) = target.page.as_deref() else {
                debug!(group = %group, "no string first page found");
                return GroupResult { group, file: None, outcome: FileOutcome::NoStringPage };
            };
            let Some(file) = resolve_page(root, page, patterns) else {
                debug!(group = %group, page, "could not resolve page to a file");
                return GroupResult {
                    group,
                    file: None,
                    outcome: FileOutcome::Unresolved(page.to_string()),
                };
            };
            let outcome = process_file(&file, &group, rule, opts, dry_run);
            GroupResult { group, file: Some(file), outcome }
        })
        .collect()
}

/// Aggregate counts over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub changed: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.processed += 1;
        if outcome.is_change() {
            self.changed += 1;
        }
        if outcome.is_failure() {
            self.failed += 1;
        }
    }
}

impl<'a> FromIterator<&'a FileOutcome> for BatchReport {
    fn from_iter<I: IntoIterator<Item = &'a FileOutcome>>(iter: I) -> Self {
        let mut report = BatchReport::default();
        for outcome in iter {
            report.record(outcome);
        }
        report
    }
}
