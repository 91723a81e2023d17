pub mod doctor;
pub mod fmt;
pub mod overview;
pub mod set;
pub mod show;

use docfront_core::config::{ConfigLoader, ResolvedConfig};
use std::path::Path;

/// Load configuration and start logging, or exit with the load error.
pub fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc);
            rc
        }
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    }
}
