//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and their outline snapshots (.snap) are co-located in
//! `fixtures/`. Every fixture also passes the span invariant checks.

mod invariants;

use crate::parsing::{
    FoldPolicy, ParseOptions, TokenKind, blocks::Block, lex, lines::line_count, parse, parse_with,
    snapshot,
};

// Fixture-based snapshot tests

#[test]
fn fixture_basic_blocks() {
    assert_fixture("basic_blocks");
}

#[test]
fn fixture_admonitions() {
    assert_fixture("admonitions");
}

#[test]
fn fixture_tabs() {
    assert_fixture("tabs");
}

#[test]
fn fixture_malformed() {
    assert_fixture("malformed");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse(&md);
    snapshot::invariants(&doc);

    let outline = snapshot::outline(&doc);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, outline);
    });
}

/// Test that every line of a fixture is lexed exactly once before EOF.
#[test]
fn fixtures_lex_one_token_per_line() {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    for name in ["basic_blocks", "admonitions", "tabs", "malformed"] {
        let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
        let tokens: Vec<_> = lex(&md).collect();
        let total = line_count(&md);

        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof, "{name}");
        assert_eq!(eof.line, total + 1, "{name}");

        let mut lines: Vec<_> = tokens[..tokens.len() - 1].iter().map(|t| t.line).collect();
        lines.dedup();
        assert_eq!(lines, (1..=total).collect::<Vec<_>>(), "{name}");
    }
}

/// Test fold policy flows into nested admonitions.
#[test]
fn fold_policy_reaches_nested_admonitions() {
    let md = "!!! note\n    ??? tip\n        body";
    let options = ParseOptions::default().with_fold_policy(FoldPolicy::QuestionMarks);
    let doc = parse_with(md, &options);

    let Block::Admonition(outer) = &doc.blocks[0] else {
        panic!("expected admonition");
    };
    assert!(!outer.foldable);
    let Block::Admonition(inner) = &outer.blocks[0] else {
        panic!("expected nested admonition");
    };
    assert!(inner.foldable);
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    let doc = parse("");
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.total_lines(), 0);
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    let doc = parse("\n\n\n");
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.total_lines(), 3);
}
