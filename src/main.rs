//! Resume Parser - Entry point
//!
//! Prints the extracted fields of each PDF resume as JSON.

use clap::Parser;
use resume_parser::{ParserConfig, ResumeParser};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "resume-parser", version, about = "Extract contact details and skills from PDF resumes")]
struct Cli {
    /// PDF resumes to parse
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Extra directory to search for the PDFium library (repeatable)
    #[arg(long = "pdfium-dir")]
    pdfium_dirs: Vec<PathBuf>,

    /// Print each result on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_parser=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli
        .pdfium_dirs
        .iter()
        .fold(ParserConfig::default(), |config, dir| {
            config.with_pdfium_dir(dir)
        });

    let mut failures = 0usize;
    for path in &cli.paths {
        match parse_one(path, &config, cli.compact) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                failures += 1;
                tracing::warn!(path = %path.display(), error = %e, "failed to parse resume");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} resumes failed to parse", failures, cli.paths.len());
    }
    Ok(())
}

fn parse_one(path: &Path, config: &ParserConfig, compact: bool) -> resume_parser::Result<String> {
    let parser = ResumeParser::open_with_config(path, config)?;
    let result = parser.get_extracted_data()?;
    tracing::info!(
        path = %path.display(),
        strategy = ?parser.strategy(),
        pages = result.no_of_pages,
        skills = result.skills.len(),
        "parsed resume"
    );

    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    Ok(json)
}
