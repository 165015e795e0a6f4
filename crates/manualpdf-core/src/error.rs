//! Error types for conversion strategies

use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while a strategy converts a document
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The backend this strategy needs is not installed or not compiled in
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The source is not valid UTF-8 Markdown
    #[error("Markdown conversion failed: {0}")]
    Markdown(String),

    /// The rendering engine or compiler failed
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Font loading error
    #[error("Font error: {0}")]
    Font(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// True when the failure means "backend missing" rather than a broken conversion
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ConvertError::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_is_distinguished() {
        assert!(ConvertError::Unavailable("weasyprint".into()).is_unavailable());
        assert!(!ConvertError::Render("boom".into()).is_unavailable());
    }

    #[test]
    fn test_markdown_error_is_not_unavailable() {
        let err = ConvertError::Markdown("line 3 is not UTF-8".into());
        assert!(!err.is_unavailable());
        assert!(err.to_string().starts_with("Markdown conversion failed:"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ConvertError = io.into();
        assert!(err.to_string().starts_with("IO error:"));
    }
}
