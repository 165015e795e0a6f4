//! manualpdf-pdf - Direct-layout strategy via Typst
//!
//! # Architecture
//!
//! The direct-layout pipeline consists of three stages:
//!
//! 1. **Blocks** - each source line becomes a `ContentBlock` (see `manualpdf_core::layout`)
//! 2. **Transpiler** - the block story becomes Typst markup with the theme's named styles
//! 3. **Compiler** - Typst markup is compiled to PDF bytes in-process
//!
//! # Example
//!
//! ```ignore
//! use manualpdf_core::{layout::parse_blocks, Theme};
//! use manualpdf_pdf::{Compiler, Transpiler};
//!
//! let blocks = parse_blocks("# Title\n- item\n");
//! let markup = Transpiler::transpile(&blocks, "Title", &Theme::default());
//! let pdf_bytes = Compiler::new().compile(&markup)?;
//! ```

mod compiler;
mod transpiler;

use std::path::PathBuf;

use manualpdf_core::layout::{parse_blocks, ContentBlock};
use manualpdf_core::{ConversionJob, ConversionStrategy, Result, Theme};

pub use compiler::Compiler;
pub use transpiler::{escape_markup, Transpiler};

/// Convenience function to render Markdown source to PDF bytes
pub fn render_pdf(source: &str, theme: &Theme) -> Result<Vec<u8>> {
    let blocks = parse_blocks(source);
    let markup = Transpiler::transpile(&blocks, story_title(&blocks, theme), theme);
    Compiler::new().compile(&markup)
}

/// Title of the first title block, or the theme's document title
fn story_title<'a>(blocks: &'a [ContentBlock], theme: &'a Theme) -> &'a str {
    blocks
        .iter()
        .find_map(|block| match block {
            ContentBlock::Title(text) => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or(theme.document_title)
}

/// Line blocks → Typst → PDF, no external programs required
#[derive(Debug, Clone, Default)]
pub struct DirectLayoutStrategy {
    fonts: Vec<PathBuf>,
}

impl DirectLayoutStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load extra font files, e.g. when system fonts lack Greek glyphs
    pub fn with_fonts(mut self, fonts: impl IntoIterator<Item = PathBuf>) -> Self {
        self.fonts.extend(fonts);
        self
    }
}

impl ConversionStrategy for DirectLayoutStrategy {
    fn name(&self) -> &'static str {
        "direct-layout"
    }

    fn label(&self) -> &str {
        "Direct layout (Typst)"
    }

    fn install_hint(&self) -> &str {
        "add a font with Greek glyphs to [layout] fonts in manualpdf.toml"
    }

    fn convert(&self, job: &ConversionJob) -> Result<u64> {
        let source = job.read_source()?;
        let blocks = parse_blocks(&source);
        tracing::debug!("Parsed {} blocks from {}", blocks.len(), job.input.display());

        let markup = Transpiler::transpile(&blocks, story_title(&blocks, &job.theme), &job.theme);
        let pdf = Compiler::new()
            .with_fonts(self.fonts.iter().cloned())
            .compile(&markup)?;

        job.write_output(&pdf)
    }
}
