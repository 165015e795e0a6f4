//! Line classification into content blocks

use super::inline::{substitute_markup, Inline};

/// Glyph prepended to bullet items
pub const BULLET: &str = "•";

/// Marker line that becomes a large spacer
pub const RULE_MARKER: &str = "---";

/// Vertical gap inserted by a spacer block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// Blank source line
    Line,
    /// Horizontal rule (`---`)
    Rule,
}

impl Spacing {
    /// Height of the gap in centimetres
    pub fn height_cm(self) -> f32 {
        match self {
            Spacing::Line => 0.2,
            Spacing::Rule => 1.0,
        }
    }
}

/// A unit of styled output in the direct-layout story
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// `# ` line, large centred heading
    Title(String),
    /// `## ` line, coloured heading
    Heading(String),
    /// `### ` line, or a line fully wrapped in `**`
    Bold(String),
    /// `- ` line, item text without the glyph
    Bullet(String),
    /// Any other non-empty line
    Paragraph(Vec<Inline>),
    /// Blank line or horizontal rule
    Spacer(Spacing),
}

impl ContentBlock {
    /// Classify one source line
    ///
    /// The line is trimmed first. Rules are checked in a fixed order, so a
    /// line like `**A** and **B**` matches the fully-wrapped bold rule before
    /// it ever reaches inline substitution.
    pub fn classify(line: &str) -> ContentBlock {
        let line = line.trim();

        if line.is_empty() {
            return ContentBlock::Spacer(Spacing::Line);
        }
        if let Some(rest) = line.strip_prefix("# ") {
            return ContentBlock::Title(rest.trim().to_string());
        }
        if let Some(rest) = line.strip_prefix("## ") {
            return ContentBlock::Heading(rest.trim().to_string());
        }
        if let Some(rest) = line.strip_prefix("### ") {
            return ContentBlock::Bold(rest.trim().to_string());
        }
        if let Some(rest) = line.strip_prefix("- ") {
            return ContentBlock::Bullet(rest.trim().to_string());
        }
        if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
            return ContentBlock::Bold(line[2..line.len() - 2].to_string());
        }
        if line == RULE_MARKER {
            return ContentBlock::Spacer(Spacing::Rule);
        }

        ContentBlock::Paragraph(substitute_markup(line))
    }

    /// Text as it appears on the page, or `None` for spacers
    pub fn display_text(&self) -> Option<String> {
        match self {
            ContentBlock::Title(text) | ContentBlock::Heading(text) | ContentBlock::Bold(text) => {
                Some(text.clone())
            }
            ContentBlock::Bullet(text) => Some(format!("{} {}", BULLET, text)),
            ContentBlock::Paragraph(runs) => Some(super::inline::plain_text(runs)),
            ContentBlock::Spacer(_) => None,
        }
    }

    /// Check if this block carries text
    pub fn is_text(&self) -> bool {
        !matches!(self, ContentBlock::Spacer(_))
    }
}

/// Build the story for a whole source document, one block per line
pub fn parse_blocks(source: &str) -> Vec<ContentBlock> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    source.lines().map(ContentBlock::classify).collect()
}
