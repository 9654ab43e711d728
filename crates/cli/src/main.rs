use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use copycheck_core::{
    CompareConfig, Copydoc, JsonConfig, SnippetAlignment, TextConfig, compare_blocks, extract_text_units, read_file,
    render_json, render_text,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod echo;

use echo::{
    format_size, print_banner, print_detail, print_info, print_step, print_success, print_timing_summary,
    print_warning, prompt,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the comparison report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Proofread an HTML email against the approved copydoc
#[derive(Parser, Debug)]
#[command(name = "copycheck")]
#[command(author = "Copycheck Contributors")]
#[command(version = VERSION)]
#[command(about = "Proofread an HTML email against the approved copydoc", long_about = None)]
struct Args {
    /// Copydoc text file (prompted for when omitted)
    #[arg(value_name = "COPYDOC")]
    copydoc: Option<PathBuf>,

    /// HTML email file (prompted for when omitted)
    #[arg(value_name = "HTML")]
    html: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Minimum similarity percentage for a block to count as found
    #[arg(long, default_value = "50", value_name = "PCT")]
    threshold: f64,

    /// Characters of context around each difference
    #[arg(long, default_value = "10", value_name = "NUM")]
    context: usize,

    /// Cut the found snippet with the expected text's offsets
    #[arg(long)]
    legacy_snippets: bool,

    /// Text report without emoji markers
    #[arg(long)]
    plain: bool,

    /// Exit with status 1 when discrepancies or missing blocks are found
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose { "copycheck=debug,copycheck_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))
}

fn resolve_path(arg: Option<PathBuf>, question: &str) -> anyhow::Result<PathBuf> {
    match arg {
        Some(path) => Ok(path),
        None => {
            let answer = prompt(question).context("Failed to read path from stdin")?;
            anyhow::ensure!(!answer.is_empty(), "No path given");
            Ok(PathBuf::from(answer))
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let copydoc_path = resolve_path(args.copydoc, "Enter the copydoc TXT file: ")?;
    let html_path = resolve_path(args.html, "Enter the HTML email file: ")?;
    tracing::debug!(copydoc = %copydoc_path.display(), html = %html_path.display(), "inputs resolved");

    let config = CompareConfig::builder()
        .threshold(args.threshold)
        .context(args.context)
        .snippet_alignment(if args.legacy_snippets { SnippetAlignment::Legacy } else { SnippetAlignment::Aligned })
        .build();
    config.validate()?;

    let started = Instant::now();
    let mut timings = Vec::new();

    if args.verbose {
        print_step(1, 4, &format!("Reading copydoc {}", copydoc_path.display().bright_white()));
    }
    let step = Instant::now();
    let copydoc = Copydoc::from_file(&copydoc_path)
        .with_context(|| format!("Failed to read copydoc: {}", copydoc_path.display()))?;
    timings.push(("Copydoc".to_string(), step.elapsed()));

    if args.verbose {
        print_detail("Blocks", &copydoc.len().to_string());
        eprintln!();
    }
    for name in copydoc.duplicates() {
        print_warning(&format!("Block \"{}\" is defined more than once; the last definition wins", name));
    }

    if args.verbose {
        print_step(2, 4, &format!("Extracting text from {}", html_path.display().bright_white()));
    }
    let step = Instant::now();
    let html = read_file(&html_path).with_context(|| format!("Failed to read HTML email: {}", html_path.display()))?;
    let units = extract_text_units(&html);
    timings.push(("Extraction".to_string(), step.elapsed()));

    if args.verbose {
        print_detail("Size", &format_size(html.len()));
        print_detail("Text units", &units.len().to_string());
        eprintln!();
        print_step(3, 4, "Comparing blocks");
    }

    let step = Instant::now();
    let report = compare_blocks(&copydoc, &units, &config);
    timings.push(("Comparison".to_string(), step.elapsed()));

    if args.verbose {
        print_detail("Discrepancies", &report.discrepancies.len().to_string());
        print_detail("Missing", &report.missing.len().to_string());
        eprintln!();
        print_step(4, 4, "Rendering report");
        print_detail("Format", &format!("{:?}", args.format));
        eprintln!();
    }

    let output = match args.format {
        OutputFormat::Text => render_text(&report, &TextConfig { use_emoji: !args.plain, ..Default::default() }),
        OutputFormat::Json => render_json(&report, &JsonConfig { pretty: true }).context("Failed to render JSON")? + "\n",
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Report written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    if args.verbose {
        print_timing_summary(started.elapsed(), &timings);
    }

    if args.strict && !report.is_clean() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
