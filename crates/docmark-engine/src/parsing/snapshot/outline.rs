use std::fmt::Write;

use crate::parsing::{
    blocks::{Block, Document},
    inline::Inline,
};

/// Renders a document as an indented tree, one node per line.
///
/// Code and quote lines are prefixed with `|` and `>`. The output has no
/// trailing newline and no trailing whitespace, so it can be compared
/// directly against stored snapshots.
pub fn outline(doc: &Document) -> String {
    let mut out = vec![format!("Document {}", doc.span)];
    for block in &doc.blocks {
        write_block(&mut out, block, 1);
    }
    out.join("\n")
}

fn write_block(out: &mut Vec<String>, block: &Block, depth: usize) {
    let pad = "  ".repeat(depth);
    let span = block.span();
    match block {
        Block::Heading(h) => {
            out.push(format!("{pad}Heading level={} {span}", h.level));
            write_inlines(out, &h.inlines, depth + 1);
        }
        Block::Paragraph(p) => {
            out.push(format!("{pad}Paragraph {span}"));
            write_inlines(out, &p.inlines, depth + 1);
        }
        Block::CodeBlock(c) => {
            let mut line = format!(
                "{pad}CodeBlock {span} language={}",
                c.language.as_deref().unwrap_or("-")
            );
            if !c.meta.is_empty() {
                let _ = write!(line, " meta={:?}", c.meta);
            }
            out.push(line);
            if !c.content.is_empty() {
                for content in c.content.split('\n') {
                    out.push(prefixed(&pad, '|', content));
                }
            }
        }
        Block::UnorderedList(list) | Block::OrderedList(list) => {
            let name = match block {
                Block::OrderedList(_) => "OrderedList",
                _ => "UnorderedList",
            };
            out.push(format!("{pad}{name} {span}"));
            for item in &list.items {
                out.push(format!("{pad}  ListItem {}", item.span));
                write_inlines(out, &item.paragraph.inlines, depth + 2);
            }
        }
        Block::QuoteBlock(q) => {
            out.push(format!("{pad}QuoteBlock {span}"));
            for line in &q.lines {
                out.push(prefixed(&pad, '>', line));
            }
        }
        Block::TabBlock(tabs) => {
            out.push(format!("{pad}TabBlock {span}"));
            for tab in &tabs.tabs {
                out.push(format!("{pad}  Tab {:?} {}", tab.title, tab.span));
                for child in &tab.blocks {
                    write_block(out, child, depth + 2);
                }
            }
        }
        Block::Admonition(a) => {
            let mut line = format!("{pad}Admonition {} {span}", a.tag);
            if !a.kind.is_empty() {
                let _ = write!(line, " kind={}", a.kind);
            }
            if !a.title.is_empty() {
                let _ = write!(line, " title={:?}", a.title);
            }
            if a.foldable {
                line.push_str(" foldable");
            }
            out.push(line);
            for child in &a.blocks {
                write_block(out, child, depth + 1);
            }
        }
    }
}

fn write_inlines(out: &mut Vec<String>, inlines: &[Inline], depth: usize) {
    let pad = "  ".repeat(depth);
    for inline in inlines {
        out.push(match inline {
            Inline::Text { text, span } => format!("{pad}Text {text:?} {span}"),
            Inline::Link { text, url, span } => format!("{pad}Link {text:?} -> {url:?} {span}"),
        });
    }
}

/// `pad  | text`, without a trailing space when `text` is empty.
fn prefixed(pad: &str, marker: char, text: &str) -> String {
    if text.is_empty() {
        format!("{pad}  {marker}")
    } else {
        format!("{pad}  {marker} {text}")
    }
}
