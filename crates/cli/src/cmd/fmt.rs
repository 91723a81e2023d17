//! Fmt command implementation.

use docfront_core::batch::{BatchReport, FileOutcome, normalize_file};
use docfront_core::discovery::DocsWalker;
use std::path::{Path, PathBuf};

pub fn run(config: Option<&Path>, profile: Option<&str>, paths: &[PathBuf], check: bool) {
    let rc = super::load_config(config, profile);
    let opts = rc.encoding.options();

    let roots = if paths.is_empty() { vec![rc.docs_root.clone()] } else { paths.to_vec() };

    let mut report = BatchReport::default();
    for root in &roots {
        let files = match DocsWalker::new(root, &rc.extensions).and_then(|w| w.walk()) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        for file in files {
            let outcome = normalize_file(&file.absolute_path, &opts, check);
            match &outcome {
                FileOutcome::Updated | FileOutcome::WouldChange => {
                    println!("{:<14} {}", outcome.label(), file.absolute_path.display());
                }
                FileOutcome::Failed(e) => eprintln!("ERROR          {}", e),
                _ => {}
            }
            report.record(&outcome);
        }
    }

    let verb = if check { "would change" } else { "changed" };
    println!(
        "{} file(s) checked, {} {}, {} failed",
        report.processed, report.changed, verb, report.failed
    );

    if report.failed > 0 || (check && report.changed > 0) {
        std::process::exit(1);
    }
}
