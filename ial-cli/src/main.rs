use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ial_converters_html::{RenderOptions, write_ials};
use ial_parser::{Error as ParserError, Options, ParseContext};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// The scanned records, as JSON
    Json,
    /// The merged attribute fragment
    Fragment,
}

/// Scans every line starting with `{` for an inline attribute list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file (reads `stdin` when omitted)
    file: Option<PathBuf>,

    /// output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// fail on tokens that are not `#id`, `.class` or `key=value`
    #[arg(long)]
    strict: bool,

    /// do not warn when a later id replaces an earlier one
    #[arg(long)]
    no_overwrite_warning: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let input = read_input(args.file.as_ref())?;
    let context = scan_lines(&input, &args)?;

    let mut stdout = io::stdout().lock();
    match args.format {
        Format::Json => serde_json::to_writer_pretty(&mut stdout, context.ials())?,
        Format::Fragment => {
            let mut options = RenderOptions::default();
            if args.no_overwrite_warning {
                options = options.without_anchor_overwrite_warning();
            }
            let mut fragment = String::new();
            write_ials(&mut fragment, context.ials(), &options)?;
            write!(stdout, "{fragment}")?;
        }
    }
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

#[tracing::instrument(skip(input))]
fn scan_lines(input: &str, args: &Args) -> Result<ParseContext> {
    let options = if args.strict {
        Options::builder().with_strict().build()
    } else {
        Options::default()
    };
    let mut context = ParseContext::new();
    for (number, line) in input.lines().enumerate() {
        let candidate = line.trim_start();
        if !candidate.starts_with('{') {
            continue;
        }
        let line_number = number + 1;
        match context.scan_with(candidate.as_bytes(), &options) {
            Ok(consumed) => {
                tracing::debug!(line = line_number, consumed, "scanned inline attribute list");
            }
            Err(ParserError::StructureMarker(marker)) => {
                tracing::info!(line = line_number, %marker, "structure marker");
            }
            Err(error @ ParserError::UnrecognizedToken(_)) => {
                let advice = error.advice().unwrap_or_default();
                return Err(error).with_context(|| format!("line {line_number}: {advice}"));
            }
            Err(error) => {
                tracing::debug!(line = line_number, %error, "not an inline attribute list");
            }
        }
    }
    Ok(context)
}
