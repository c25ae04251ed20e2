use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tldr_docset::config::DocsetConfig;
use tldr_docset::error::{DocsetError, Result};
use tldr_docset::generate::{self, GenerateOptions, Report, SourceMode};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let source = match (cli.url, cli.dir) {
        (true, Some(_)) => {
            return Err(DocsetError::Usage(
                "--url and --dir are mutually exclusive".to_string(),
            ))
        }
        (true, None) => SourceMode::Remote,
        (false, Some(dir)) => SourceMode::LocalDir(dir),
        (false, None) => {
            return Err(DocsetError::Usage(
                "please specify either --url or --dir".to_string(),
            ))
        }
    };

    let config = DocsetConfig::load(".")?;
    let options = GenerateOptions {
        source,
        out_dir: cli.output.unwrap_or_else(|| PathBuf::from(".")),
    };

    let verbose = cli.verbose;
    let report = generate::run(&config, &options, |line| {
        if verbose {
            eprintln!("{}", line.dimmed());
        }
    })?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &Report) {
    println!(
        "{}",
        format!(
            "Compiled {} pages, indexed {} commands",
            report.pages, report.indexed
        )
        .green()
    );
    println!("Docset:  {}", report.docset_dir.display());
    println!("Archive: {}", report.archive.display());
}
