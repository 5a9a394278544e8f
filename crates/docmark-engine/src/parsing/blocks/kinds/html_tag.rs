use std::sync::OnceLock;

use regex::Regex;

/// Single-line HTML recognition.
///
/// Multi-line HTML blocks are not parsed; this only decides whether one line
/// is made up entirely of complete HTML elements, and splits it into them.
pub struct HtmlTag;

impl HtmlTag {
    /// Elements that never take a closing tag.
    pub const VOID_ELEMENTS: [&'static str; 13] = [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
        "track", "wbr",
    ];

    fn tag_regex() -> &'static Regex {
        static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
        TAG_REGEX.get_or_init(|| {
            Regex::new(r"^<(/?)([A-Za-z][A-Za-z0-9-]*)(?:\s[^>]*)?>").expect("Invalid HTML tag regex")
        })
    }

    /// Byte offset just past `</name>` in `s`, searching from `from`.
    fn closing_tag_end(s: &str, name: &str, from: usize) -> Option<usize> {
        let lower = s.to_ascii_lowercase();
        let needle = format!("</{name}");
        let mut search = from;
        while let Some(found) = lower[search..].find(&needle) {
            let after = search + found + needle.len();
            let tail = &s[after..];
            let gap = tail.len() - tail.trim_start().len();
            if tail[gap..].starts_with('>') {
                return Some(after + gap + 1);
            }
            search = after;
        }
        None
    }

    /// Length of the element starting at the beginning of `s`.
    fn element_len(s: &str) -> Option<usize> {
        let caps = Self::tag_regex().captures(s)?;
        let tag_end = caps.get(0)?.end();
        let is_closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let name = caps.get(2)?.as_str().to_ascii_lowercase();
        let is_self_closing =
            s[..tag_end].ends_with("/>") || Self::VOID_ELEMENTS.contains(&name.as_str());

        if is_closing || is_self_closing {
            return Some(tag_end);
        }
        // A lone opening tag still counts as one element.
        Some(Self::closing_tag_end(s, &name, tag_end).unwrap_or(tag_end))
    }

    /// Splits a left-trimmed line into its HTML elements.
    ///
    /// Returns `None` unless the whole line is HTML elements separated by
    /// optional whitespace.
    pub fn elements(trimmed: &str) -> Option<Vec<&str>> {
        let mut rest = trimmed.trim_end();
        let mut out = vec![];
        while !rest.is_empty() {
            let len = Self::element_len(rest)?;
            out.push(&rest[..len]);
            rest = rest[len..].trim_start();
        }
        (!out.is_empty()).then_some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element() {
        assert_eq!(
            HtmlTag::elements("<p>Hello</p>"),
            Some(vec!["<p>Hello</p>"])
        );
    }

    #[test]
    fn two_elements_on_one_line() {
        assert_eq!(
            HtmlTag::elements("<div>a</div><span>b</span>"),
            Some(vec!["<div>a</div>", "<span>b</span>"])
        );
    }

    #[test]
    fn lone_tags_are_elements() {
        assert_eq!(HtmlTag::elements("<div>"), Some(vec!["<div>"]));
        assert_eq!(HtmlTag::elements("</div>"), Some(vec!["</div>"]));
        assert_eq!(
            HtmlTag::elements("<div class=\"note\">"),
            Some(vec!["<div class=\"note\">"])
        );
    }

    #[test]
    fn void_and_self_closing() {
        assert_eq!(HtmlTag::elements("<br>"), Some(vec!["<br>"]));
        assert_eq!(
            HtmlTag::elements("<img src=\"a.png\"> <x-icon />"),
            Some(vec!["<img src=\"a.png\">", "<x-icon />"])
        );
    }

    #[test]
    fn closing_tag_is_case_insensitive() {
        assert_eq!(HtmlTag::elements("<B>bold</b>"), Some(vec!["<B>bold</b>"]));
    }

    #[test]
    fn similar_closing_name_is_not_a_match() {
        assert_eq!(
            HtmlTag::elements("<a>x</ab></a>"),
            Some(vec!["<a>x</ab></a>"])
        );
    }

    #[test]
    fn trailing_text_disqualifies_line() {
        assert_eq!(HtmlTag::elements("<div>text"), None);
        assert_eq!(HtmlTag::elements("<b>x</b> and more"), None);
    }

    #[test]
    fn not_html() {
        for line in ["plain text", "< not a tag>", "a < b > c", ""] {
            assert_eq!(HtmlTag::elements(line), None, "{line:?}");
        }
    }
}
