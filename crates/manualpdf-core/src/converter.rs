//! Conversion orchestrator with fallback chain
//!
//! ```text
//! CHECK_INPUT ──missing──▶ MissingInput
//!      │
//!      ▼
//! strategy 1 ──ok──▶ Converted
//!      │ err
//!      ▼
//! strategy 2 ──ok──▶ Converted
//!      │ err
//!      ▼
//!   Failed
//! ```
//!
//! Strategy errors never escape: each one is logged, printed, and turns into
//! an [`Attempt`] record before the next strategy runs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::strategy::{ConversionJob, ConversionStrategy};

/// A failed strategy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub strategy: &'static str,
    pub message: String,
    /// The backend was missing rather than broken
    pub unavailable: bool,
}

/// Final state of a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input file absent, no strategy was invoked
    MissingInput(PathBuf),
    /// A strategy wrote the PDF
    Converted {
        strategy: &'static str,
        output: PathBuf,
        size: u64,
    },
    /// Every strategy failed, in the order they were tried
    Failed { attempts: Vec<Attempt> },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }
}

/// Runs strategies in priority order until one succeeds
pub struct Converter {
    strategies: Vec<Box<dyn ConversionStrategy>>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::empty()
    }
}

impl Converter {
    /// Create a converter with no strategies
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy; strategies are tried in the order they were added
    pub fn add_strategy(&mut self, strategy: Box<dyn ConversionStrategy>) {
        tracing::debug!("Added strategy: {}", strategy.name());
        self.strategies.push(strategy);
    }

    /// Builder form of [`Converter::add_strategy`]
    pub fn with_strategy(mut self, strategy: Box<dyn ConversionStrategy>) -> Self {
        self.add_strategy(strategy);
        self
    }

    /// Get the names of all registered strategies
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run the full check → convert → report flow, writing progress to `out`
    pub fn run(&self, job: &ConversionJob, out: &mut dyn Write) -> io::Result<Outcome> {
        let input_size = match std::fs::metadata(&job.input) {
            Ok(meta) if meta.is_file() => meta.len(),
            _ => {
                tracing::debug!("Input missing: {}", job.input.display());
                writeln!(out, "❌ Input file not found: {}", job.input.display())?;
                return Ok(Outcome::MissingInput(job.input.clone()));
            }
        };

        writeln!(out, "📖 Found file: {}", file_name(&job.input))?;
        writeln!(out, "📊 Size: {}", format_kb(input_size))?;
        writeln!(out)?;

        let mut attempts = Vec::new();

        for (index, strategy) in self.strategies.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "🔄 Method {}: {}", index + 1, strategy.label())?;
            writeln!(out, "📄 Converting with {}...", strategy.label())?;

            match strategy.convert(job) {
                Ok(size) => {
                    tracing::debug!(
                        "Converted {} with {} ({} bytes)",
                        job.input.display(),
                        strategy.name(),
                        size
                    );
                    writeln!(out, "✅ PDF created: {}", job.output.display())?;
                    writeln!(out, "📊 File size: {}", format_kb(size))?;
                    writeln!(out)?;
                    writeln!(out, "🎉 Conversion succeeded!")?;
                    writeln!(
                        out,
                        "💡 Tip: open the PDF in a dedicated viewer such as Adobe Reader for the best rendering"
                    )?;
                    return Ok(Outcome::Converted {
                        strategy: strategy.name(),
                        output: job.output.clone(),
                        size,
                    });
                }
                Err(e) => {
                    tracing::warn!("Strategy {} failed: {}", strategy.name(), e);
                    if e.is_unavailable() {
                        writeln!(out, "❌ {} is not available: {}", strategy.label(), e)?;
                    } else {
                        writeln!(out, "❌ Error: {}", e)?;
                    }
                    attempts.push(Attempt {
                        strategy: strategy.name(),
                        message: e.to_string(),
                        unavailable: e.is_unavailable(),
                    });
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "❌ Conversion failed with every method")?;
        if !self.strategies.is_empty() {
            writeln!(out)?;
            writeln!(out, "📝 Install the dependencies for one of the methods:")?;
            for (index, strategy) in self.strategies.iter().enumerate() {
                let prefix = if index == 0 { "   " } else { "   or: " };
                writeln!(out, "{}{}", prefix, strategy.install_hint())?;
            }
        }

        Ok(Outcome::Failed { attempts })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format a byte count as kilobytes with two decimals
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
