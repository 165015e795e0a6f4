//! Document theme shared by both rendering strategies
//!
//! The theme is fixed: `Theme::default()` is the only theme the tool ships.
//! It is still passed around explicitly so renderers never embed literals.

/// Paper size for the generated PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// ISO A4, 210mm x 297mm
    #[default]
    A4,
}

impl PageSize {
    /// Name used by CSS `@page { size: ... }`
    pub fn css_name(self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
        }
    }

    /// Name used by Typst `#set page(paper: ...)`
    pub fn typst_name(self) -> &'static str {
        match self {
            PageSize::A4 => "a4",
        }
    }
}

/// Colours, sizes and page geometry for the manual
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub page_size: PageSize,
    /// Margin on all four sides, in centimetres
    pub margin_cm: f32,
    pub title_color: &'static str,
    pub heading_color: &'static str,
    pub subheading_color: &'static str,
    pub accent_color: &'static str,
    pub text_color: &'static str,
    pub muted_color: &'static str,
    /// Font sizes in points
    pub title_size_pt: f32,
    pub heading_size_pt: f32,
    pub subheading_size_pt: f32,
    pub body_size_pt: f32,
    pub footer_size_pt: f32,
    /// Prefix for the page counter in the footer
    pub page_label: &'static str,
    /// BCP 47 language tag of the document
    pub language: &'static str,
    /// Fallback document title when the source has no `# ` heading
    pub document_title: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin_cm: 2.0,
            title_color: "#2c3e50",
            heading_color: "#2980b9",
            subheading_color: "#34495e",
            accent_color: "#3498db",
            text_color: "#333333",
            muted_color: "#666666",
            title_size_pt: 24.0,
            heading_size_pt: 18.0,
            subheading_size_pt: 14.0,
            body_size_pt: 11.0,
            footer_size_pt: 10.0,
            page_label: "Σελίδα",
            language: "el",
            document_title: "Fast Delivery - Εγχειρίδιο Χρήστη",
        }
    }
}
