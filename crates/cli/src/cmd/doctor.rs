use docfront_core::config::{ConfigLoader, default_config_path};
use std::path::Path;
use tracing::debug;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc);
            debug!(profile = %rc.active_profile, "config loaded");

            println!("OK   docfront doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("docs_root: {}{}", rc.docs_root.display(), missing(&rc.docs_root));
            println!("docs_json: {}{}", rc.docs_json.display(), missing(&rc.docs_json));
            println!("navigation_key: {}", rc.navigation_key);
            println!("extensions: {}", rc.extensions.join(", "));
            println!("overview.mode: {}", rc.overview.mode);
            println!("overview.text: {}", rc.overview.text);
            println!("encoding.indent: {}", rc.encoding.indent);
            println!("encoding.quote:  {}", rc.encoding.quote);
        }
        Err(e) => {
            println!("FAIL docfront doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

fn missing(path: &Path) -> &'static str {
    if path.exists() { "" } else { " (missing)" }
}
