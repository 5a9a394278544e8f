use crate::parsing::span::LineSpan;

use super::{cursor::Cursor, kinds::Link, types::Inline};

/// Splits `text` into literal and link runs, all spanning `line`.
///
/// Literal text around and between links becomes [`Inline::Text`]; empty
/// literal runs are omitted, so plain text yields one run and empty text
/// yields none. A link needs a non-empty label and a non-empty url with no
/// whitespace; anything else stays literal.
pub fn split_inlines(text: &str, line: usize) -> Vec<Inline> {
    let span = LineSpan::line(line);
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let at = cur.pos();
        if let Some((label, url)) = try_parse_link(&mut cur) {
            flush_text(&mut out, &text[text_start..at], span);
            out.push(Inline::Link {
                text: label.to_string(),
                url: url.to_string(),
                span,
            });
            text_start = cur.pos();
            continue;
        }
        // A failed attempt resumes where its scan stopped.
        if cur.pos() == at {
            cur.bump();
        }
    }

    flush_text(&mut out, &text[text_start..], span);
    out
}

fn flush_text(out: &mut Vec<Inline>, text: &str, span: LineSpan) {
    if !text.is_empty() {
        out.push(Inline::Text {
            text: text.to_string(),
            span,
        });
    }
}

/// Attempts `[label](url)` at the current position.
///
/// On failure the cursor is left where the scan stopped, which is always at
/// or before the next `[`, so no link start is skipped.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }
    cur.bump();

    let label_start = cur.pos();
    cur.bump_until(Link::ends_label);
    let label = cur.slice_from(label_start);
    if label.is_empty() || !cur.starts_with(Link::LABEL_CLOSE) {
        return None;
    }
    cur.bump_n(Link::LABEL_CLOSE.len());

    let url_start = cur.pos();
    cur.bump_until(Link::ends_url);
    let url = cur.slice_from(url_start);
    if url.is_empty() || cur.peek() != Some(Link::CLOSE) {
        return None;
    }
    cur.bump();

    Some((label, url))
}
