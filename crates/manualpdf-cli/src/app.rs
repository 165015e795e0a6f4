//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use manualpdf_core::{
    ConversionStrategy, Converter, Outcome, Settings, StrategyKind, Theme, CONFIG_FILE,
};

/// Exit status when the conversion succeeded
pub const EXIT_OK: u8 = 0;
/// Exit status when the input is missing or settings could not be loaded
pub const EXIT_INPUT: u8 = 1;
/// Exit status when every strategy failed
pub const EXIT_CONVERSION_FAILED: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "manualpdf")]
#[command(
    author,
    version,
    about = "Convert the Markdown user manual to a styled PDF",
    long_about = None
)]
struct Cli {
    /// Markdown source (default: ΕΓΧΕΙΡΙΔΙΟ_ΧΡΗΣΤΗ.md)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// PDF destination (default: input with .pdf extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (default: manualpdf.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Strategy to try, repeat to set the order (html, direct-layout)
    #[arg(short, long = "strategy", value_name = "NAME")]
    strategies: Vec<StrategyKind>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Run the CLI application
///
/// Parses arguments, loads settings and runs the conversion. Settings
/// errors are returned; conversion failures are mapped to an exit status.
pub fn run_cli() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut settings = load_settings(cli.config.as_deref())?;
    apply_overrides(&mut settings, &cli);

    let outcome = convert_command(&settings, &mut std::io::stdout().lock())?;
    Ok(ExitCode::from(exit_status(&outcome)))
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins over `--verbose`; the default level is `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the conversion with the given settings, printing progress to `out`
pub fn convert_command(settings: &Settings, out: &mut dyn Write) -> Result<Outcome> {
    print_banner(out)?;

    let converter = build_converter(settings);
    tracing::debug!("Strategy order: {:?}", converter.strategy_names());

    let job = settings.job(Theme::default());
    let outcome = converter
        .run(&job, out)
        .context("Failed to write progress output")?;

    Ok(outcome)
}

/// Map an outcome to the process exit status
pub fn exit_status(outcome: &Outcome) -> u8 {
    match outcome {
        Outcome::Converted { .. } => EXIT_OK,
        Outcome::MissingInput(_) => EXIT_INPUT,
        Outcome::Failed { .. } => EXIT_CONVERSION_FAILED,
    }
}

/// Build the converter with strategies in configured order, duplicates dropped
pub fn build_converter(settings: &Settings) -> Converter {
    let mut converter = Converter::empty();
    let mut seen = Vec::new();

    for kind in &settings.strategies.order {
        if seen.contains(kind) {
            continue;
        }
        seen.push(*kind);
        converter.add_strategy(strategy_for(*kind, settings));
    }

    converter
}

fn strategy_for(kind: StrategyKind, settings: &Settings) -> Box<dyn ConversionStrategy> {
    match kind {
        StrategyKind::Html => html_strategy(settings),
        StrategyKind::DirectLayout => direct_layout_strategy(settings),
    }
}

#[cfg(feature = "html-render")]
fn html_strategy(settings: &Settings) -> Box<dyn ConversionStrategy> {
    let strategy = manualpdf_html::HtmlStrategy::new();
    match &settings.html.engine {
        Some(engine) => Box::new(strategy.with_engine(engine)),
        None => Box::new(strategy),
    }
}

#[cfg(not(feature = "html-render"))]
fn html_strategy(_settings: &Settings) -> Box<dyn ConversionStrategy> {
    Box::new(manualpdf_core::UnavailableStrategy::new(
        "html",
        "cargo install manualpdf-cli --features html-render   (then install WeasyPrint or Chromium)",
    ))
}

#[cfg(feature = "direct-layout")]
fn direct_layout_strategy(settings: &Settings) -> Box<dyn ConversionStrategy> {
    Box::new(
        manualpdf_pdf::DirectLayoutStrategy::new().with_fonts(settings.layout.fonts.iter().cloned()),
    )
}

#[cfg(not(feature = "direct-layout"))]
fn direct_layout_strategy(_settings: &Settings) -> Box<dyn ConversionStrategy> {
    Box::new(manualpdf_core::UnavailableStrategy::new(
        "direct-layout",
        "cargo install manualpdf-cli --features direct-layout",
    ))
}

fn print_banner(out: &mut dyn Write) -> std::io::Result<()> {
    let rule = "=".repeat(60);
    writeln!(out, "{}", rule)?;
    writeln!(out, "  Fast Delivery - Markdown to PDF converter")?;
    writeln!(out, "  Greek & emoji support (manualpdf v{})", manualpdf_core::VERSION)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)
}

fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(input) = &cli.input {
        settings.paths.input = input.clone();
        // An output configured for another input no longer applies
        if cli.output.is_none() {
            settings.paths.output = None;
        }
    }
    if let Some(output) = &cli.output {
        settings.paths.output = Some(output.clone());
    }
    if !cli.strategies.is_empty() {
        settings.strategies.order = cli.strategies.clone();
    }
}

/// Load settings from a config file or use defaults
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            read_settings(path)
        }
        None => {
            let candidate = Path::new(CONFIG_FILE);
            if candidate.exists() {
                read_settings(candidate)
            } else {
                Ok(Settings::default())
            }
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    Settings::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}
