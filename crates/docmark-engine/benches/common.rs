// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with a [link](./guide.md) and more words.\n\n- Bullet point\n- Another item\n\n1. First\n2) Second\n\n> quoted line\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// Sections of admonitions and tab blocks nested `depth` levels deep.
#[allow(dead_code)]
pub fn generate_nested_containers(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str(&generate_nested_content(depth, 0));
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, level: usize) -> String {
    let indent = "    ".repeat(level);
    let mut content = format!(
        "{indent}Some paragraph content at level {level} with a [reference](../ref.md).\n\n"
    );

    for i in 0..3 {
        content.push_str(&format!("{indent}- Item {i} at level {level}\n"));
    }
    content.push('\n');

    if remaining_depth == 0 {
        return content;
    }

    if level % 2 == 0 {
        content.push_str(&format!("{indent}!!! note \"Level {level}\"\n\n"));
        content.push_str(&generate_nested_content(remaining_depth - 1, level + 1));
    } else {
        for tab in ["Python", "Rust"] {
            content.push_str(&format!("{indent}=== \"{tab}\"\n\n"));
            content.push_str(&format!(
                "{indent}    ```{}\n{indent}    code here\n{indent}    ```\n\n",
                tab.to_lowercase()
            ));
        }
        content.push_str(&generate_nested_content(remaining_depth - 1, level));
    }

    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_nested_containers(50, 4)
}
