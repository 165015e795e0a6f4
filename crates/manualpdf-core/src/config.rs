//! Configuration settings
//!
//! Settings are loaded from `manualpdf.toml` when present:
//!
//! ```toml
//! [paths]
//! input = "ΕΓΧΕΙΡΙΔΙΟ_ΧΡΗΣΤΗ.md"
//! output = "ΕΓΧΕΙΡΙΔΙΟ_ΧΡΗΣΤΗ.pdf"
//!
//! [strategies]
//! order = ["html", "direct-layout"]
//!
//! [html]
//! engine = "/usr/bin/weasyprint"
//!
//! [layout]
//! fonts = ["fonts/NotoSans-Regular.ttf"]
//! ```
//!
//! Every table is optional. The theme is not configurable.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::strategy::ConversionJob;
use crate::theme::Theme;

/// Manual converted when no input is configured
pub const DEFAULT_INPUT: &str = "ΕΓΧΕΙΡΙΔΙΟ_ΧΡΗΣΤΗ.md";

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "manualpdf.toml";

/// Identifies a conversion strategy in configuration and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Markdown → HTML → external paged-media engine
    Html,
    /// Line blocks → Typst → PDF
    DirectLayout,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Html => "html",
            StrategyKind::DirectLayout => "direct-layout",
        }
    }

    pub fn all() -> &'static [StrategyKind] {
        &[StrategyKind::Html, StrategyKind::DirectLayout]
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown strategy '{}' (expected one of: html, direct-layout)",
                    s
                )
            })
    }
}

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
    pub strategies: StrategySettings,
    pub html: HtmlSettings,
    pub layout: LayoutSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Build the conversion job described by these settings
    pub fn job(&self, theme: Theme) -> ConversionJob {
        let job = ConversionJob::new(&self.paths.input).with_theme(theme);
        match &self.paths.output {
            Some(output) => job.with_output(output),
            None => job,
        }
    }
}

/// Input and output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub input: PathBuf,
    /// Defaults to the input path with a `.pdf` extension
    pub output: Option<PathBuf>,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
        }
    }
}

/// Strategy priority order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    pub order: Vec<StrategyKind>,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            order: StrategyKind::all().to_vec(),
        }
    }
}

/// HTML-rendering strategy settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HtmlSettings {
    /// Explicit engine executable; skips discovery when set
    pub engine: Option<PathBuf>,
}

/// Direct-layout strategy settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutSettings {
    /// Extra font files loaded in addition to embedded and system fonts
    pub fonts: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.paths.input, PathBuf::from(DEFAULT_INPUT));
        assert!(settings.paths.output.is_none());
        assert_eq!(
            settings.strategies.order,
            vec![StrategyKind::Html, StrategyKind::DirectLayout]
        );
        assert!(settings.html.engine.is_none());
        assert!(settings.layout.fonts.is_empty());
    }

    #[test]
    fn test_load_config_from_toml() {
        let toml = r#"
[paths]
input = "docs/manual.md"
output = "build/manual.pdf"

[strategies]
order = ["direct-layout", "html"]

[html]
engine = "/opt/weasyprint/bin/weasyprint"

[layout]
fonts = ["fonts/NotoSans-Regular.ttf"]
"#;
        let settings = Settings::from_toml_str(toml).unwrap();

        assert_eq!(settings.paths.input, PathBuf::from("docs/manual.md"));
        assert_eq!(
            settings.paths.output,
            Some(PathBuf::from("build/manual.pdf"))
        );
        assert_eq!(
            settings.strategies.order,
            vec![StrategyKind::DirectLayout, StrategyKind::Html]
        );
        assert_eq!(
            settings.html.engine,
            Some(PathBuf::from("/opt/weasyprint/bin/weasyprint"))
        );
        assert_eq!(settings.layout.fonts.len(), 1);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let settings = Settings::from_toml_str("[html]\nengine = \"chromium\"\n").unwrap();
        assert_eq!(settings.paths.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(settings.strategies.order.len(), 2);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result = Settings::from_toml_str("[strategies]\norder = [\"latex\"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_strategy_kind_from_str() {
        assert_eq!("html".parse::<StrategyKind>(), Ok(StrategyKind::Html));
        assert_eq!(
            "Direct-Layout".parse::<StrategyKind>(),
            Ok(StrategyKind::DirectLayout)
        );
        assert!("pdfkit".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_job_from_settings() {
        let settings = Settings::default();
        let job = settings.job(Theme::default());
        assert_eq!(job.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(job.output, PathBuf::from("ΕΓΧΕΙΡΙΔΙΟ_ΧΡΗΣΤΗ.pdf"));
    }
}
