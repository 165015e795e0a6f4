//! Content blocks to Typst markup transpiler
//!
//! Each block becomes one line of Typst. Page geometry and the named styles
//! (title, heading-2, normal-justified) come from the [`Theme`].

use manualpdf_core::layout::{ContentBlock, Inline, BULLET};
use manualpdf_core::Theme;

/// Space after a title block, in points
const TITLE_SPACE_AFTER_PT: u32 = 30;
/// Space before and after a heading block, in points
const HEADING_SPACE_BEFORE_PT: u32 = 20;
const HEADING_SPACE_AFTER_PT: u32 = 12;
/// Space after every body paragraph, in points
const BODY_SPACE_AFTER_PT: u32 = 10;

/// Transpiler for converting a block story to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a story to a complete Typst document
    pub fn transpile(blocks: &[ContentBlock], title: &str, theme: &Theme) -> String {
        let mut output = Self::preamble(title, theme);

        for block in blocks {
            output.push_str(&Self::transpile_block(block, theme));
            output.push('\n');
        }

        output
    }

    /// Page template and default text style
    fn preamble(title: &str, theme: &Theme) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "#set document(title: \"{}\")\n",
            escape_string(title)
        ));
        output.push_str(&format!(
            "#set page(paper: \"{}\", margin: {}cm, footer: context align(right, text(size: {}pt, fill: rgb(\"{}\"))[{} #counter(page).display()]))\n",
            theme.page_size.typst_name(),
            theme.margin_cm,
            theme.footer_size_pt,
            theme.muted_color,
            escape_markup(theme.page_label),
        ));
        output.push_str(&format!(
            "#set text(size: {}pt, lang: \"{}\", fill: rgb(\"{}\"))\n",
            theme.body_size_pt, theme.language, theme.text_color
        ));
        output.push_str("#set par(justify: true)\n\n");

        output
    }

    /// Transpile a single block
    pub fn transpile_block(block: &ContentBlock, theme: &Theme) -> String {
        match block {
            ContentBlock::Title(text) => format!(
                "#block(width: 100%, below: {}pt)[#align(center)[#text(size: {}pt, weight: \"bold\", fill: rgb(\"{}\"))[{}]]]",
                TITLE_SPACE_AFTER_PT,
                theme.title_size_pt,
                theme.title_color,
                escape_markup(text)
            ),

            ContentBlock::Heading(text) => format!(
                "#block(above: {}pt, below: {}pt)[#text(size: {}pt, weight: \"bold\", fill: rgb(\"{}\"))[{}]]",
                HEADING_SPACE_BEFORE_PT,
                HEADING_SPACE_AFTER_PT,
                theme.heading_size_pt,
                theme.heading_color,
                escape_markup(text)
            ),

            ContentBlock::Bold(text) => body_block(&format!("#strong[{}]", escape_markup(text))),

            ContentBlock::Bullet(text) => {
                body_block(&format!("{} {}", BULLET, escape_markup(text)))
            }

            ContentBlock::Paragraph(runs) => body_block(&Self::transpile_inlines(runs)),

            ContentBlock::Spacer(spacing) => format!("#v({}cm)", spacing.height_cm()),
        }
    }

    /// Transpile inline runs
    fn transpile_inlines(runs: &[Inline]) -> String {
        runs.iter().map(Self::transpile_inline).collect()
    }

    /// Transpile a single inline run
    fn transpile_inline(inline: &Inline) -> String {
        match inline {
            Inline::Text(text) => escape_markup(text),
            Inline::Bold(text) => format!("#strong[{}]", escape_markup(text)),
            Inline::Italic(text) => format!("#emph[{}]", escape_markup(text)),
        }
    }
}

fn body_block(content: &str) -> String {
    format!("#block(below: {}pt)[{}]", BODY_SPACE_AFTER_PT, content)
}

/// Escape special characters in strings for Typst
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape text so it renders literally inside a Typst content block
pub fn escape_markup(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(
            c,
            '\\' | '#'
                | '*'
                | '_'
                | '`'
                | '$'
                | '<'
                | '>'
                | '@'
                | '['
                | ']'
                | '='
                | '-'
                | '+'
                | '/'
                | '~'
                | '"'
                | '\''
                | '.'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
