//! Frontmatter tooling for Markdown and MDX documentation sites.
//!
//! The heart of the crate is [`frontmatter`]: locating the `---` fenced block
//! at the top of a page, decoding it into an ordered value tree, and encoding
//! it back. The remaining modules drive that codec over a docs tree.

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod batch;
pub mod config;
pub mod discovery;
pub mod frontmatter;
pub mod navigation;
pub mod retitle;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
