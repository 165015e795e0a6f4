//! manualpdf-html - HTML-rendering strategy
//!
//! # Architecture
//!
//! The pipeline consists of three stages:
//!
//! 1. **Markdown** - source text to an HTML fragment via `pulldown-cmark`
//! 2. **Template** - fragment wrapped in a full document with the print stylesheet
//! 3. **Engine** - an installed paged-media engine lays the HTML out as PDF
//!
//! When no engine is installed the strategy reports
//! [`ConvertError::Unavailable`] and the converter moves on.

mod engine;
mod markdown;
mod template;

use std::path::PathBuf;

use manualpdf_core::{ConversionJob, ConversionStrategy, ConvertError, Result, Theme};

pub use engine::{find_executable, EngineKind, HtmlEngine, CANDIDATES};
pub use markdown::{extract_title, html_escape, markdown_to_html, markdown_options};
pub use template::{stylesheet, wrap_document};

/// Render Markdown source to the complete styled HTML document
pub fn render_html(source: &str, theme: &Theme) -> String {
    let body = markdown_to_html(source);
    let title = extract_title(source).unwrap_or_else(|| theme.document_title.to_string());
    wrap_document(&body, &title, theme)
}

/// Markdown → HTML → PDF through an external engine
#[derive(Debug, Clone, Default)]
pub struct HtmlStrategy {
    /// Explicit engine executable; discovery is used when `None`
    engine: Option<PathBuf>,
}

impl HtmlStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific engine executable instead of discovering one
    pub fn with_engine(mut self, engine: impl Into<PathBuf>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    fn resolve_engine(&self) -> Result<HtmlEngine> {
        match &self.engine {
            Some(path) => HtmlEngine::from_configured(path),
            None => HtmlEngine::discover().ok_or_else(|| {
                ConvertError::Unavailable(
                    "no HTML-to-PDF engine found on PATH (looked for WeasyPrint and Chromium)"
                        .to_string(),
                )
            }),
        }
    }
}

impl ConversionStrategy for HtmlStrategy {
    fn name(&self) -> &'static str {
        "html"
    }

    fn label(&self) -> &str {
        "HTML rendering (recommended)"
    }

    fn install_hint(&self) -> &str {
        "pip install weasyprint   (or install Chromium / Google Chrome)"
    }

    fn convert(&self, job: &ConversionJob) -> Result<u64> {
        let engine = self.resolve_engine()?;
        tracing::debug!("Using HTML engine {}", engine.kind().name());

        let source = job.read_source()?;
        let document = render_html(&source, &job.theme);
        engine.render(&document, &job.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_html_uses_first_heading_as_title() {
        let html = render_html("# Οδηγός\n\nΚείμενο", &Theme::default());
        assert!(html.contains("<title>Οδηγός</title>"));
        assert!(html.contains("<h1>Οδηγός</h1>"));
    }

    #[test]
    fn test_render_html_falls_back_to_theme_title() {
        let theme = Theme::default();
        let html = render_html("Χωρίς τίτλο", &theme);
        assert!(html.contains(&format!("<title>{}</title>", theme.document_title)));
    }

    #[test]
    fn test_configured_missing_engine_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("manual.md");
        std::fs::write(&input, "# Manual").unwrap();

        let strategy = HtmlStrategy::new().with_engine(dir.path().join("missing-weasyprint"));
        let err = strategy.convert(&ConversionJob::new(&input)).unwrap_err();

        assert!(err.is_unavailable());
        assert!(!dir.path().join("manual.pdf").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_silent_engine_fails_instead_of_keeping_old_pdf() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let exe = dir.path().join("chromium");
        std::fs::write(&exe, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let input = dir.path().join("manual.md");
        std::fs::write(&input, "# Manual").unwrap();
        let job = ConversionJob::new(&input);
        std::fs::write(&job.output, b"%PDF stale from yesterday").unwrap();

        let err = HtmlStrategy::new().with_engine(&exe).convert(&job).unwrap_err();

        assert!(!err.is_unavailable());
        assert_eq!(std::fs::read(&job.output).unwrap(), b"%PDF stale from yesterday");
    }

    #[test]
    fn test_strategy_identity() {
        let strategy = HtmlStrategy::new();
        assert_eq!(strategy.name(), "html");
        assert!(strategy.install_hint().contains("weasyprint"));
    }

    #[test]
    fn test_renders_pdf_when_weasyprint_installed() {
        let weasyprint = HtmlEngine::discover().filter(|e| e.kind() == EngineKind::WeasyPrint);
        let Some(engine) = weasyprint else {
            eprintln!("skipping: WeasyPrint not installed");
            return;
        };

        let dir = TempDir::new().unwrap();
        let input = dir.path().join("manual.md");
        std::fs::write(
            &input,
            "# Εγχειρίδιο\n\n## Σύνδεση\n\n- **Email**\n- *Κωδικός*\n\n---\n\nΤέλος.\n",
        )
        .unwrap();
        let job = ConversionJob::new(&input);

        let strategy = HtmlStrategy::new().with_engine(engine.executable());
        let size = strategy.convert(&job).unwrap();

        assert!(size > 0);
        assert_eq!(size, std::fs::metadata(&job.output).unwrap().len());
    }
}
