//! Conversion strategy trait and job description
//!
//! A strategy is one self-contained way of producing the output PDF from the
//! input Markdown file. The [`Converter`](crate::Converter) tries strategies
//! in priority order until one succeeds.

use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::theme::Theme;

/// Everything a strategy needs to produce one PDF
#[derive(Debug, Clone)]
pub struct ConversionJob {
    /// Markdown source file
    pub input: PathBuf,
    /// PDF destination, overwritten without confirmation
    pub output: PathBuf,
    /// Styling applied by every strategy
    pub theme: Theme,
}

impl ConversionJob {
    /// Create a job whose output sits next to the input with a `.pdf` extension
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = input.with_extension("pdf");
        Self {
            input,
            output,
            theme: Theme::default(),
        }
    }

    /// Override the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Override the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Read the whole source as UTF-8
    ///
    /// Bytes that are not UTF-8 are a [`ConvertError::Markdown`], not an I/O error.
    pub fn read_source(&self) -> Result<String> {
        let bytes = std::fs::read(&self.input)?;
        String::from_utf8(bytes).map_err(|e| {
            ConvertError::Markdown(format!(
                "{} is not valid UTF-8 (byte {})",
                self.input.display(),
                e.utf8_error().valid_up_to()
            ))
        })
    }

    /// Write PDF bytes to the output path and return the size on disk
    pub fn write_output(&self, bytes: &[u8]) -> Result<u64> {
        std::fs::write(&self.output, bytes)?;
        output_size(&self.output)
    }
}

/// Size of a produced PDF, failing if it is missing or empty
pub fn output_size(path: &Path) -> Result<u64> {
    let size = std::fs::metadata(path)?.len();
    if size == 0 {
        return Err(ConvertError::Render(format!(
            "{} was written but is empty",
            path.display()
        )));
    }
    Ok(size)
}

/// Trait for conversion strategies
///
/// Implementors turn a [`ConversionJob`] into a PDF on disk. Any error is
/// contained by the orchestrator and triggers the next strategy.
pub trait ConversionStrategy {
    /// Stable identifier, also used in configuration
    fn name(&self) -> &'static str;

    /// Human-readable label shown in progress output
    fn label(&self) -> &str {
        self.name()
    }

    /// Install hint shown when every strategy has failed
    fn install_hint(&self) -> &str;

    /// Convert the job's input and write the PDF
    ///
    /// # Returns
    /// The size of the written PDF in bytes, as reported by the file system
    fn convert(&self, job: &ConversionJob) -> Result<u64>;
}

/// Stand-in for a strategy whose backend was not compiled in
///
/// Always reports [`ConvertError::Unavailable`] so the orchestrator falls
/// back exactly as it would when a backend is missing at run time.
pub struct UnavailableStrategy {
    name: &'static str,
    hint: String,
}

impl UnavailableStrategy {
    pub fn new(name: &'static str, hint: impl Into<String>) -> Self {
        Self {
            name,
            hint: hint.into(),
        }
    }
}

impl ConversionStrategy for UnavailableStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn install_hint(&self) -> &str {
        &self.hint
    }

    fn convert(&self, _job: &ConversionJob) -> Result<u64> {
        Err(ConvertError::Unavailable(format!(
            "{} support is not compiled into this build",
            self.name
        )))
    }
}
