use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tldr-docset")]
#[command(version)]
#[command(about = "Generate an offline Dash-style docset from the tldr-pages command reference", long_about = None)]
pub struct Cli {
    /// Fetch the pages archive from the remote source
    #[arg(short, long)]
    pub url: bool,

    /// Build from a local pages checkout instead of fetching
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Directory the docset and archive are written to (defaults to the
    /// working directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print per-page progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
