//! Inline bold/italic substitution for plain paragraphs
//!
//! Substitution is deliberately limited: only the first `**...**` pair becomes
//! bold, and only the first lone `*...*` pair in the remaining plain text
//! becomes italic. Any later markers stay in the text as literal characters.

/// A run of text inside a paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
}

impl Inline {
    /// The text of the run without any markup
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Bold(s) | Inline::Italic(s) => s,
        }
    }
}

/// Split a paragraph line into runs, substituting at most one bold and one italic span
pub fn substitute_markup(line: &str) -> Vec<Inline> {
    let mut runs = Vec::new();

    match find_bold_pair(line) {
        Some((open, close)) => {
            push_text(&mut runs, &line[..open]);
            runs.push(Inline::Bold(line[open + 2..close].to_string()));
            push_text(&mut runs, &line[close + 2..]);
        }
        None => push_text(&mut runs, line),
    }

    apply_first_italic(runs)
}

/// Flatten runs back into a plain string (markers already removed)
pub fn plain_text(runs: &[Inline]) -> String {
    runs.iter().map(Inline::as_str).collect()
}

fn push_text(runs: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        runs.push(Inline::Text(text.to_string()));
    }
}

/// Byte offsets of the first `**` and the next `**` after it, with non-empty content between
fn find_bold_pair(line: &str) -> Option<(usize, usize)> {
    let open = line.find("**")?;
    let close = open + 2 + line[open + 2..].find("**")?;
    (close > open + 2).then_some((open, close))
}

/// Byte offsets of `*` characters that are not part of a `**` marker
fn lone_stars(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len())
        .filter(|&i| {
            bytes[i] == b'*'
                && (i == 0 || bytes[i - 1] != b'*')
                && bytes.get(i + 1) != Some(&b'*')
        })
        .collect()
}

fn apply_first_italic(runs: Vec<Inline>) -> Vec<Inline> {
    let mut out = Vec::with_capacity(runs.len() + 2);
    let mut done = false;

    for run in runs {
        let text = match run {
            Inline::Text(text) if !done => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let stars = lone_stars(&text);
        match stars.as_slice() {
            [open, close, ..] if close - open > 1 => {
                push_text(&mut out, &text[..*open]);
                out.push(Inline::Italic(text[open + 1..*close].to_string()));
                push_text(&mut out, &text[close + 1..]);
                done = true;
            }
            _ => out.push(Inline::Text(text)),
        }
    }

    out
}
