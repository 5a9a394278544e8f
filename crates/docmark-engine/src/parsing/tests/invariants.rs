use rstest::rstest;

use crate::parsing::{DEFAULT_MAX_DEPTH, LineSpan, blocks::Block, parse, snapshot};

#[rstest]
#[case::empty("")]
#[case::newline_only("\n")]
#[case::whitespace("   \n\t\n")]
#[case::lone_fence("```")]
#[case::fence_in_admonition("!!! note\n    ```\n    never closed\nafter")]
#[case::admonition_at_eof("??? tip")]
#[case::tab_at_eof("=== \"A\"")]
#[case::tab_then_blank("=== \"A\"\n\n")]
#[case::deep_nesting("!!! a\n    !!! b\n        !!! c\n            === \"t\"\n                x")]
#[case::mixed_indent("!!! a\n\tTab indented\n    space indented\n  two spaces")]
#[case::crlf("# A\r\n\r\n- b\r\n")]
#[case::unicode("# Ünïcödé\n\n[ü](ü.md) ✓")]
#[case::marker_soup("#\n-\n1.\n>\n!!!\n===\n```")]
fn invariants_hold(#[case] md: &str) {
    let doc = parse(md);
    snapshot::invariants(&doc);
    assert_eq!(doc.span, LineSpan::new(1, md.lines().count() + 1));
}

/// Test that every non-blank line is covered by some top-level block.
#[rstest]
#[case("# A\ntext\n- b\n> c\n!!! d\n    e\n=== \"f\"\n    g\n```\nh")]
#[case("para\n\n\n??? x\n\n    y\n\nz")]
fn top_level_blocks_cover_non_blank_lines(#[case] md: &str) {
    let doc = parse(md);
    for (i, line) in md.lines().enumerate() {
        let number = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        assert!(
            doc.blocks
                .iter()
                .any(|b| b.span().contains(LineSpan::line(number))),
            "line {number} ({line:?}) not covered"
        );
    }
}

/// Test that parsing is deterministic.
#[test]
fn parse_is_deterministic() {
    let md = "# T\n\n!!! note \"x\"\n    - a\n    - b\n\n=== \"A\"\n    [l](u)\n";
    assert_eq!(parse(md), parse(md));
}

/// Test that nested spans refer to lines of the original text.
#[test]
fn nested_spans_are_absolute() {
    let md = "intro\n\n!!! note\n\n    inner\n";
    let doc = parse(md);
    let Block::Admonition(a) = &doc.blocks[1] else {
        panic!("expected admonition");
    };
    assert_eq!(a.blocks[0].span(), LineSpan::new(5, 6));
}

/// Test that nesting far past the depth limit still yields a valid tree.
#[test]
fn deep_nesting_stays_within_depth_limit() {
    let depth = 5000;
    let md: String = (0..depth)
        .map(|level| format!("{}!!! note\n", "\t".repeat(level)))
        .collect();
    let doc = parse(&md);
    snapshot::invariants(&doc);
    assert_eq!(doc.span, LineSpan::new(1, depth + 1));

    let mut nested = 0;
    let mut blocks = doc.blocks.as_slice();
    while let [Block::Admonition(a)] = blocks {
        nested += 1;
        blocks = a.blocks.as_slice();
    }
    assert_eq!(nested, DEFAULT_MAX_DEPTH + 1);
    match blocks {
        [Block::CodeBlock(c)] => {
            assert_eq!(c.span, LineSpan::new(DEFAULT_MAX_DEPTH + 2, depth + 1));
            assert_eq!(c.content.lines().count(), depth - DEFAULT_MAX_DEPTH - 1);
        }
        other => panic!("expected raw body past the limit, got {other:?}"),
    }
}
