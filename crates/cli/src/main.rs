mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use docfront_core::retitle::OverviewMode;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "docfront",
    version,
    about = "Inspect and rewrite frontmatter in Markdown/MDX documentation"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Print the decoded frontmatter of a document
    Show(ShowArgs),

    /// Re-encode frontmatter in canonical form
    Fmt(FmtArgs),

    /// Set frontmatter fields on a document
    Set(SetArgs),

    /// Relabel each navigation group's landing page
    Overview(OverviewArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Document to read
    pub file: PathBuf,

    /// Print as JSON instead of a frontmatter block
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FmtArgs {
    /// Files or directories to format (defaults to docs_root)
    pub paths: Vec<PathBuf>,

    /// Report files that would change without writing; exits 1 if any would
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Document to modify
    pub file: PathBuf,

    /// Assignments as key=value; values are typed like frontmatter scalars
    #[arg(required = true, value_parser = parse_assignment)]
    pub assignments: Vec<(String, String)>,

    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct OverviewArgs {
    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Override [overview].mode (add_sidebar_title or retitle_title)
    #[arg(long)]
    pub mode: Option<OverviewMode>,

    /// Override [overview].text
    #[arg(long)]
    pub text: Option<String>,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Show(args) => cmd::show::run(config, profile, &args.file, args.json),
        Commands::Fmt(args) => cmd::fmt::run(config, profile, &args.paths, args.check),
        Commands::Set(args) => {
            cmd::set::run(config, profile, &args.file, &args.assignments, args.dry_run)
        }
        Commands::Overview(args) => cmd::overview::run(config, profile, &args),
    }
}
