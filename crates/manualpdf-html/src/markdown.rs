//! Markdown to HTML fragment conversion

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parser options: tables, footnotes, strikethrough and task lists
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Convert Markdown source to an HTML fragment
///
/// Fenced code blocks are wrapped in `<div class="codehilite">` so the
/// stylesheet can treat them like highlighted listings.
pub fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, markdown_options());

    let mut in_fenced = false;
    let events = parser.flat_map(move |event| match event {
        Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) => {
            in_fenced = true;
            vec![
                Event::Html(CowStr::Borrowed("<div class=\"codehilite\">\n")),
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))),
            ]
        }
        Event::End(TagEnd::CodeBlock) if in_fenced => {
            in_fenced = false;
            vec![
                Event::End(TagEnd::CodeBlock),
                Event::Html(CowStr::Borrowed("</div>\n")),
            ]
        }
        other => vec![other],
    });

    let mut body = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut body, events);
    body
}

/// First `# ` heading of the source, used as the document title
pub fn extract_title(source: &str) -> Option<String> {
    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .find(|title| !title.is_empty())
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let html = markdown_to_html("# Εγχειρίδιο\n\nΚαλώς ήρθατε.");
        assert!(html.contains("<h1>Εγχειρίδιο</h1>"));
        assert!(html.contains("<p>Καλώς ήρθατε.</p>"));
    }

    #[test]
    fn test_inline_emphasis_every_span() {
        let html = markdown_to_html("**A** and **B** and *c*");
        assert!(html.contains("<strong>A</strong>"));
        assert!(html.contains("<strong>B</strong>"));
        assert!(html.contains("<em>c</em>"));
    }

    #[test]
    fn test_tables() {
        let html = markdown_to_html("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_fenced_code_is_wrapped() {
        let html = markdown_to_html("```bash\nnpm start\n```\n");
        assert!(html.contains("<div class=\"codehilite\">\n<pre><code class=\"language-bash\">"));
        assert!(html.contains("npm start"));
        assert!(html.contains("</code></pre>\n</div>"));
    }

    #[test]
    fn test_indented_code_is_not_wrapped() {
        let html = markdown_to_html("    plain code\n");
        assert!(html.contains("<pre><code>"));
        assert!(!html.contains("codehilite"));
        assert!(!html.contains("</div>"));
    }

    #[test]
    fn test_horizontal_rule_and_lists() {
        let html = markdown_to_html("- one\n- two\n\n---\n");
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<hr />"));
    }

    #[test]
    fn test_task_list_and_strikethrough() {
        let html = markdown_to_html("- [x] done\n\n~~old~~");
        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(
            extract_title("intro\n# Fast Delivery\n## Part").as_deref(),
            Some("Fast Delivery")
        );
        assert_eq!(extract_title("## Only level two"), None);
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>\"x\" & y</b>"), "&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;");
    }
}
