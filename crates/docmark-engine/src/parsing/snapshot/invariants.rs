use crate::parsing::{
    blocks::{Block, Document},
    inline::Inline,
    span::LineSpan,
};

/// Validates span invariants of a parsed document.
///
/// Asserts that:
/// - The root starts at line 1
/// - Every block span is non-empty and contained in its parent
/// - Sibling blocks are non-overlapping and in document order
/// - Inline runs lie inside their block, with non-decreasing starts
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    assert_eq!(doc.span.start_line, 1, "document must start at line 1: {}", doc.span);
    check_siblings(doc.span, &doc.blocks);
}

fn check_siblings(parent: LineSpan, blocks: &[Block]) {
    let mut previous: Option<LineSpan> = None;
    for block in blocks {
        let span = block.span();
        check_node(parent, span);
        if let Some(prev) = previous {
            assert!(!prev.overlaps(span), "sibling spans overlap: {prev} and {span}");
            assert!(
                prev.start_line < span.start_line,
                "sibling spans out of order: {prev} then {span}"
            );
        }
        previous = Some(span);
        check_block(block);
    }
}

fn check_node(parent: LineSpan, span: LineSpan) {
    assert!(!span.is_empty(), "empty span {span} inside {parent}");
    assert!(
        parent.contains(span),
        "span {span} not contained in parent {parent}"
    );
}

fn check_block(block: &Block) {
    let span = block.span();
    match block {
        Block::Heading(h) => check_inlines(span, &h.inlines),
        Block::Paragraph(p) => check_inlines(span, &p.inlines),
        Block::UnorderedList(list) | Block::OrderedList(list) => {
            let mut previous: Option<LineSpan> = None;
            for item in &list.items {
                check_node(span, item.span);
                if let Some(prev) = previous {
                    assert!(
                        prev.limit_line <= item.span.start_line,
                        "list items overlap: {prev} then {}",
                        item.span
                    );
                }
                previous = Some(item.span);
                check_node(item.span, item.paragraph.span);
                check_inlines(item.paragraph.span, &item.paragraph.inlines);
            }
        }
        Block::TabBlock(tabs) => {
            let mut previous: Option<LineSpan> = None;
            for tab in &tabs.tabs {
                check_node(span, tab.span);
                if let Some(prev) = previous {
                    assert!(
                        prev.limit_line <= tab.span.start_line,
                        "tabs overlap: {prev} then {}",
                        tab.span
                    );
                }
                previous = Some(tab.span);
                check_siblings(tab.span, &tab.blocks);
            }
        }
        Block::Admonition(a) => check_siblings(span, &a.blocks),
        Block::CodeBlock(_) | Block::QuoteBlock(_) => {}
    }
}

fn check_inlines(parent: LineSpan, inlines: &[Inline]) {
    let mut previous_start = parent.start_line;
    for inline in inlines {
        let span = inline.span();
        check_node(parent, span);
        assert!(
            span.start_line >= previous_start,
            "inline at {span} starts before its predecessor"
        );
        previous_start = span.start_line;
    }
}
