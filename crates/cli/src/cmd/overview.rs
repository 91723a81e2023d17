//! Overview command implementation.

use docfront_core::batch::{BatchReport, run_overview};
use docfront_core::navigation::NavigationPlan;
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};
use tracing::info;

use crate::OverviewArgs;

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Result")]
    result: String,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &OverviewArgs) {
    let rc = super::load_config(config, profile);

    let plan = match NavigationPlan::load(&rc.docs_json, &rc.navigation_key) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!(groups = plan.targets.len(), docs_json = %rc.docs_json.display(), "navigation loaded");

    let mut rule = rc.overview.rule();
    if let Some(mode) = args.mode {
        rule.mode = mode;
    }
    if let Some(ref text) = args.text {
        rule.text = text.clone();
    }

    let results = run_overview(
        &plan,
        &rc.docs_root,
        &rc.resolution_patterns,
        &rule,
        &rc.encoding.options(),
        args.dry_run,
    );

    if results.is_empty() {
        println!("No navigation groups found in {}", rc.docs_json.display());
        return;
    }

    let rows: Vec<GroupRow> = results
        .iter()
        .map(|r| GroupRow {
            group: r.group.clone(),
            file: r
                .file
                .as_deref()
                .map(|f| f.strip_prefix(&rc.docs_root).unwrap_or(f).display().to_string())
                .unwrap_or_else(|| "-".to_string()),
            result: r.outcome.to_string(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");

    let report: BatchReport = results.iter().map(|r| &r.outcome).collect();
    let verb = if args.dry_run { "would change" } else { "changed" };
    println!("{} group(s), {} {}, {} failed", report.processed, report.changed, verb, report.failed);

    if report.failed > 0 {
        std::process::exit(1);
    }
}
