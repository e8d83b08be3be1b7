use std::{
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use draft_renderers_core::{CustomStyles, DEFAULT_ORDERED_LIST_SEPARATOR, Options, PrettyDuration};
use draft_renderers_terminal::{Appearance, Capabilities, Processor};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Render Draft.js raw content exports in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally booleans
struct Args {
    /// Raw content JSON files to render
    #[arg(conflicts_with = "stdin", required_unless_present = "stdin")]
    files: Vec<PathBuf>,

    /// Read raw content JSON from stdin
    #[arg(long)]
    stdin: bool,

    /// JSON file mapping style names to style overrides
    #[arg(long, value_name = "FILE")]
    styles: Option<PathBuf>,

    /// String printed after ordered list numbers
    #[arg(long, default_value = DEFAULT_ORDERED_LIST_SEPARATOR)]
    ordered_separator: String,

    /// Columns of indentation per list depth
    #[arg(long, default_value_t = 2)]
    depth_margin: u16,

    /// Fail on atomic blocks that have no renderer instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Disable colors and hyperlinks
    #[arg(long)]
    no_color: bool,

    /// Show timing information
    #[arg(long)]
    timings: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    run(&args)
}

#[tracing::instrument(skip(args))]
fn run(args: &Args) -> Result<()> {
    let processor = Processor::new(build_options(args)?).with_appearance(appearance(args));

    if args.stdin {
        let stdin = io::stdin();
        let mut reader = BufReader::new(stdin.lock());
        let content = draft_model::parse_from_reader(&mut reader)?;
        processor.print(&content)?;
        return Ok(());
    }

    // Output goes to stdout, so files are rendered one after the other.
    let mut failures = Vec::new();
    for file in &args.files {
        if let Err(error) = render_file(&processor, file) {
            failures.push((file, error));
        }
    }

    if failures.is_empty() {
        return Ok(());
    }
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "\nFailed to render {} file(s):", failures.len())?;
    for (idx, (file, error)) in failures.iter().enumerate() {
        writeln!(stderr, "\n{}. File: {}", idx + 1, file.display())?;
        writeln!(stderr, "{error:?}")?;
    }
    anyhow::bail!("{} of {} file(s) failed", failures.len(), args.files.len())
}

fn render_file(processor: &Processor, file: &Path) -> Result<()> {
    let now = Instant::now();
    let content = draft_model::parse_file(file)?;
    processor
        .print(&content)
        .with_context(|| format!("rendering {}", file.display()))?;
    if processor.options().timings() {
        eprintln!(
            "  Rendered {} in {}",
            file.display(),
            now.elapsed().pretty_print()
        );
    }
    Ok(())
}

fn build_options(args: &Args) -> Result<Options> {
    let custom_styles = match &args.styles {
        Some(path) => load_styles(path)?,
        None => CustomStyles::new(),
    };
    Ok(Options::builder()
        .custom_styles(custom_styles)
        .ordered_list_separator(args.ordered_separator.clone())
        .depth_margin(args.depth_margin)
        .strict(args.strict)
        .timings(args.timings)
        .build())
}

fn load_styles(path: &Path) -> Result<CustomStyles> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading styles from {}", path.display()))?;
    let styles = serde_json::from_str(&raw)
        .with_context(|| format!("parsing styles from {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded custom styles");
    Ok(styles)
}

fn appearance(args: &Args) -> Appearance {
    if args.no_color {
        Appearance::with_capabilities(Capabilities {
            color: false,
            osc8_links: false,
            ..Capabilities::detect()
        })
    } else {
        Appearance::detect()
    }
}
