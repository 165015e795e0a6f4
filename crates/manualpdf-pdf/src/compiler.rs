//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib.

use std::path::PathBuf;

use manualpdf_core::{ConvertError, Result};
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_as_lib::TypstEngine;

/// Compiler for converting Typst markup to PDF
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    /// Extra font files loaded on top of embedded and system fonts
    font_paths: Vec<PathBuf>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add font files (TTF/OTF) to the font book
    pub fn with_fonts(mut self, font_paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.font_paths.extend(font_paths);
        self
    }

    /// Compile Typst markup to PDF bytes
    ///
    /// # Arguments
    /// * `markup` - Typst markup string
    ///
    /// # Returns
    /// PDF bytes on success
    pub fn compile(&self, markup: &str) -> Result<Vec<u8>> {
        let font_data = self.load_fonts()?;

        let mut builder = TypstEngine::builder()
            .main_file(markup.to_string())
            .search_fonts_with(
                TypstKitFontOptions::default()
                    .include_system_fonts(true)
                    .include_embedded_fonts(true),
            );
        if !font_data.is_empty() {
            builder = builder.fonts(font_data);
        }

        let engine = builder.build();

        // compiled is Warned<Result<Document, Error>>
        let compiled = engine.compile();
        for warning in &compiled.warnings {
            tracing::debug!("Typst warning: {:?}", warning.message);
        }

        let document = compiled
            .output
            .map_err(|e| ConvertError::Render(format!("Typst compilation failed: {:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| ConvertError::Render(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }

    fn load_fonts(&self) -> Result<Vec<Vec<u8>>> {
        self.font_paths
            .iter()
            .map(|path| {
                std::fs::read(path).map_err(|e| {
                    ConvertError::Font(format!("Failed to read font {}: {}", path.display(), e))
                })
            })
            .collect()
    }
}
