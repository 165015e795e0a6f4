//! Full HTML document template with the embedded print stylesheet

use manualpdf_core::Theme;

use crate::markdown::html_escape;

/// Build the print stylesheet from the theme
///
/// Uses CSS paged media (`@page`, margin boxes, `page-break-*`), which the
/// engine must support for the footer and page breaks to come out right.
pub fn stylesheet(theme: &Theme) -> String {
    format!(
        r#"
* {{
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}}

body {{
    font-family: 'Roboto', 'Noto Sans', 'DejaVu Sans', 'Segoe UI', Arial, sans-serif;
    line-height: 1.8;
    color: {text};
    background: #fff;
}}

h1 {{
    color: {title};
    border-bottom: 4px solid {accent};
    padding-bottom: 15px;
    margin-bottom: 30px;
    font-size: 2.5em;
    page-break-after: avoid;
}}

h2 {{
    color: {heading};
    margin-top: 40px;
    margin-bottom: 20px;
    font-size: 2em;
    border-left: 5px solid {accent};
    padding-left: 15px;
    page-break-after: avoid;
}}

h3 {{
    color: {subheading};
    margin-top: 30px;
    margin-bottom: 15px;
    font-size: 1.5em;
    page-break-after: avoid;
}}

h4 {{
    color: #555;
    margin-top: 20px;
    margin-bottom: 10px;
    font-size: 1.2em;
    page-break-after: avoid;
}}

p {{
    margin-bottom: 15px;
    text-align: justify;
}}

ul, ol {{
    margin-left: 30px;
    margin-bottom: 20px;
}}

li {{
    margin-bottom: 8px;
}}

code {{
    background-color: #f4f4f4;
    padding: 2px 6px;
    border-radius: 3px;
    font-family: 'Courier New', 'DejaVu Sans Mono', monospace;
    font-size: 0.9em;
}}

pre, .codehilite pre {{
    background-color: #f8f8f8;
    border: 1px solid #ddd;
    border-radius: 5px;
    padding: 15px;
    margin-bottom: 20px;
    white-space: pre-wrap;
    page-break-inside: avoid;
}}

pre code {{
    background: none;
    padding: 0;
}}

hr {{
    border: none;
    border-top: 2px solid #eee;
    margin: 40px 0;
}}

blockquote {{
    border-left: 4px solid {accent};
    padding-left: 20px;
    margin: 20px 0;
    color: #555;
    font-style: italic;
}}

table {{
    width: 100%;
    border-collapse: collapse;
    margin-bottom: 20px;
    page-break-inside: avoid;
}}

th, td {{
    border: 1px solid #ddd;
    padding: 12px;
    text-align: left;
}}

th {{
    background-color: {accent};
    color: white;
    font-weight: bold;
}}

tr:nth-child(even) {{
    background-color: #f9f9f9;
}}

.page-break {{
    page-break-after: always;
}}

@page {{
    size: {page_size};
    margin: {margin}cm;
    @bottom-right {{
        content: "{page_label} " counter(page);
        font-size: {footer}pt;
        color: {muted};
    }}
}}

@media print {{
    body {{
        font-size: {body}pt;
    }}

    h1 {{
        font-size: {title_size}pt;
    }}

    h2 {{
        font-size: {heading_size}pt;
    }}

    h3 {{
        font-size: {subheading_size}pt;
    }}
}}
"#,
        text = theme.text_color,
        title = theme.title_color,
        heading = theme.heading_color,
        subheading = theme.subheading_color,
        accent = theme.accent_color,
        muted = theme.muted_color,
        page_size = theme.page_size.css_name(),
        margin = theme.margin_cm,
        page_label = theme.page_label,
        footer = theme.footer_size_pt,
        body = theme.body_size_pt,
        title_size = theme.title_size_pt,
        heading_size = theme.heading_size_pt,
        subheading_size = theme.subheading_size_pt,
    )
}

/// Wrap an HTML fragment in a complete, styled document
pub fn wrap_document(body: &str, title: &str, theme: &Theme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
{body}
</body>
</html>
"#,
        lang = theme.language,
        title = html_escape(title),
        css = stylesheet(theme),
        body = body,
    )
}
