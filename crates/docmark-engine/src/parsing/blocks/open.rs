use super::kinds::{
    AdmonitionHeader, AdmonitionTag, AtxHeading, BlockQuote, CodeFence, ListMarker, TabHeader,
};

/// The block a line opens when it is dispatched.
///
/// Lines that open nothing start a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    CodeFence,
    Heading,
    UnorderedList,
    OrderedList,
    BlockQuote,
    Admonition(AdmonitionTag),
    TabBlock,
}

/// One entry of the dispatch table: the name used in dispatch logs and a
/// matcher over the left-trimmed line.
pub struct OpenRule {
    pub name: &'static str,
    pub try_open: fn(&str) -> Option<BlockOpen>,
}

/// Block openers in precedence order. The first matching rule wins.
pub const OPEN_RULES: [OpenRule; 7] = [
    OpenRule {
        name: "code fence",
        try_open: |t| CodeFence::opens(t).then_some(BlockOpen::CodeFence),
    },
    OpenRule {
        name: "heading",
        try_open: |t| AtxHeading::opens(t).then_some(BlockOpen::Heading),
    },
    OpenRule {
        name: "unordered list",
        try_open: |t| ListMarker::unordered(t).map(|_| BlockOpen::UnorderedList),
    },
    OpenRule {
        name: "ordered list",
        try_open: |t| ListMarker::ordered(t).map(|_| BlockOpen::OrderedList),
    },
    OpenRule {
        name: "blockquote",
        try_open: |t| BlockQuote::opens(t).then_some(BlockOpen::BlockQuote),
    },
    OpenRule {
        name: "admonition",
        try_open: |t| AdmonitionHeader::tag(t).map(BlockOpen::Admonition),
    },
    OpenRule {
        name: "tab header",
        try_open: |t| TabHeader::opens(t).then_some(BlockOpen::TabBlock),
    },
];

/// Evaluates [`OPEN_RULES`] top to bottom against a left-trimmed line,
/// returning the matching rule's name with the block it opens.
pub fn match_rule(trimmed: &str) -> Option<(&'static str, BlockOpen)> {
    OPEN_RULES
        .iter()
        .find_map(|rule| (rule.try_open)(trimmed).map(|open| (rule.name, open)))
}

pub fn try_open(trimmed: &str) -> Option<BlockOpen> {
    match_rule(trimmed).map(|(_, open)| open)
}
