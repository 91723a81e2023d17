//! Show command implementation.

use docfront_core::frontmatter::{decode, encode_with, locate};
use std::fs;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>, file: &Path, json: bool) {
    let rc = super::load_config(config, profile);

    let text = match fs::read_to_string(file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", file.display(), e);
            std::process::exit(1);
        }
    };

    let Some(raw) = locate(&text).raw_block else {
        eprintln!("No frontmatter in {}", file.display());
        std::process::exit(1);
    };
    let fm = decode(raw);

    let rendered = if json {
        serde_json::to_string_pretty(&fm).map_err(|e| e.to_string())
    } else {
        encode_with(&fm, &rc.encoding.options()).map_err(|e| e.to_string())
    };

    match rendered {
        Ok(out) if out.is_empty() => {}
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Error rendering frontmatter of {}: {}", file.display(), e);
            std::process::exit(1);
        }
    }
}
