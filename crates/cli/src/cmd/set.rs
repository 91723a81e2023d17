//! Set command implementation.

use chrono::Local;
use docfront_core::batch::{FileOutcome, modify_file};
use docfront_core::frontmatter::{FrontmatterOps, infer_scalar};
use std::collections::HashMap;
use std::path::Path;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    file: &Path,
    assignments: &[(String, String)],
    dry_run: bool,
) {
    let rc = super::load_config(config, profile);

    let ops = FrontmatterOps::Simple(
        assignments.iter().map(|(key, raw)| (key.clone(), infer_scalar(raw))).collect(),
    );

    let mut ctx = HashMap::new();
    ctx.insert("date".to_string(), Local::now().format("%Y-%m-%d").to_string());
    if let Some(stem) = file.file_stem() {
        ctx.insert("stem".to_string(), stem.to_string_lossy().into_owned());
    }

    match modify_file(file, &ops, &ctx, &rc.encoding.options(), dry_run) {
        FileOutcome::Updated => println!("Updated {}", file.display()),
        FileOutcome::WouldChange => println!("Would update {}", file.display()),
        FileOutcome::Unchanged => println!("No changes to {}", file.display()),
        FileOutcome::NoFrontmatter => {
            eprintln!("No frontmatter in {}", file.display());
            std::process::exit(1);
        }
        other => {
            eprintln!("Error: {}", other);
            std::process::exit(1);
        }
    }
}
