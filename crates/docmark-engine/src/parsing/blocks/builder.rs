use crate::parsing::{
    inline::split_inlines,
    lines::{LineRef, numbered_lines, strip_indent_level},
    options::ParseOptions,
    span::LineSpan,
};

use super::{
    kinds::{
        AdmonitionHeader, AdmonitionTag, AtxHeading, BlockQuote, CodeFence, ListMarker, ListStyle,
        TabHeader,
    },
    open::{BlockOpen, match_rule, try_open},
    types::{
        Admonition, Block, CodeBlock, Document, Heading, List, ListItem, Paragraph, QuoteBlock,
        Tab, TabBlock,
    },
};

/// Line-cursor parser over a fixed array of numbered lines.
///
/// The cursor only moves forward and every dispatched block consumes at
/// least one line, so a parse always terminates. Nested content is parsed
/// by a fresh `BlockParser` over the de-indented body lines; those lines
/// keep their original numbers, so nested spans are absolute.
///
/// Nesting is bounded by [`ParseOptions::max_depth`]; a container at the
/// limit keeps its body as a single raw [`CodeBlock`].
pub struct BlockParser<'a> {
    lines: Vec<LineRef<'a>>,
    current: usize,
    options: ParseOptions,
    depth: usize,
}

impl<'a> BlockParser<'a> {
    pub fn new(text: &'a str, options: ParseOptions) -> Self {
        Self::from_lines(numbered_lines(text, 1).collect(), options)
    }

    pub fn from_lines(lines: Vec<LineRef<'a>>, options: ParseOptions) -> Self {
        Self {
            lines,
            current: 0,
            options,
            depth: 0,
        }
    }

    /// Parses the whole input into a [`Document`] spanning every line.
    pub fn parse(self) -> Document {
        let span = LineSpan::new(1, self.lines.len() + 1);
        Document {
            span,
            blocks: self.parse_blocks(),
        }
    }

    /// Parses the lines into a block sequence, skipping blank lines.
    pub fn parse_blocks(mut self) -> Vec<Block> {
        let mut blocks = vec![];
        while let Some(line) = self.peek() {
            if line.is_blank() {
                self.current += 1;
                continue;
            }
            let (name, open) = match match_rule(line.trimmed()) {
                Some((name, open)) => (name, Some(open)),
                None => ("paragraph", None),
            };
            let block = self.parse_block(open);
            log::trace!("parsed {name} at {}", block.span());
            blocks.push(block);
        }
        blocks
    }

    fn parse_block(&mut self, open: Option<BlockOpen>) -> Block {
        match open {
            Some(BlockOpen::CodeFence) => self.parse_code_block(),
            Some(BlockOpen::Heading) => self.parse_heading(),
            Some(BlockOpen::UnorderedList) => {
                Block::UnorderedList(self.parse_list(ListStyle::Unordered))
            }
            Some(BlockOpen::OrderedList) => Block::OrderedList(self.parse_list(ListStyle::Ordered)),
            Some(BlockOpen::BlockQuote) => self.parse_quote_block(),
            Some(BlockOpen::Admonition(tag)) => self.parse_admonition(tag),
            Some(BlockOpen::TabBlock) => self.parse_tab_block(),
            None => self.parse_paragraph(),
        }
    }

    fn peek(&self) -> Option<LineRef<'a>> {
        self.lines.get(self.current).copied()
    }

    /// Consumes the current line. Callers only advance after a `peek`.
    fn advance(&mut self) -> LineRef<'a> {
        let line = self.lines[self.current];
        self.current += 1;
        line
    }

    /// Limit line of a block ending with the last consumed line.
    fn limit(&self) -> usize {
        self.lines[self.current - 1].number + 1
    }

    fn span_from(&self, start_line: usize) -> LineSpan {
        LineSpan::new(start_line, self.limit())
    }

    fn parse_code_block(&mut self) -> Block {
        let open = self.advance();
        let info = CodeFence::info(open.text);

        let mut content = vec![];
        let mut closed = false;
        while let Some(line) = self.peek() {
            self.current += 1;
            if CodeFence::closes(line.text) {
                closed = true;
                break;
            }
            content.push(line.text);
        }
        if !closed {
            // Unterminated fences run to the end of input.
            log::debug!("code fence opened at line {} is never closed", open.number);
        }

        Block::CodeBlock(CodeBlock {
            span: self.span_from(open.number),
            language: info.language,
            meta: info.meta,
            content: content.join("\n"),
        })
    }

    fn parse_heading(&mut self) -> Block {
        let line = self.advance();
        let (level, text) = match AtxHeading::split(line.text) {
            Some(split) => split,
            None => {
                // Marker with nothing after it: keep the line as a level 1 heading.
                log::debug!("heading at line {} has no text", line.number);
                (1, line.text.trim())
            }
        };

        Block::Heading(Heading {
            span: LineSpan::line(line.number),
            level,
            inlines: split_inlines(text, line.number),
        })
    }

    fn parse_list(&mut self, style: ListStyle) -> List {
        let start = self.lines[self.current].number;
        let mut items = vec![];
        while let Some(line) = self.peek() {
            let Some(text) = ListMarker::item_text(style, line.text) else {
                break;
            };
            self.current += 1;
            let span = LineSpan::line(line.number);
            items.push(ListItem {
                span,
                paragraph: Paragraph {
                    span,
                    inlines: split_inlines(text, line.number),
                },
            });
        }

        List {
            span: self.span_from(start),
            items,
        }
    }

    fn parse_quote_block(&mut self) -> Block {
        let start = self.lines[self.current].number;
        let mut lines = vec![];
        while let Some(line) = self.peek() {
            let Some(quoted) = BlockQuote::strip_prefix(line.text) else {
                break;
            };
            self.current += 1;
            lines.push(quoted.to_string());
        }

        Block::QuoteBlock(QuoteBlock {
            span: self.span_from(start),
            lines,
        })
    }

    fn parse_admonition(&mut self, tag: AdmonitionTag) -> Block {
        let header_line = self.advance();
        let header = AdmonitionHeader::parse(tag, header_line.text);

        self.skip_blank_lines();
        let body = self.collect_indented_body(false);
        if body.is_empty() {
            log::debug!("admonition at line {} has no body", header_line.number);
        }

        Block::Admonition(Admonition {
            span: self.span_from(header_line.number),
            tag,
            kind: header.kind,
            title: header.title,
            foldable: self.options.fold_policy.is_foldable(tag),
            blocks: self.parse_body(body),
        })
    }

    fn parse_tab_block(&mut self) -> Block {
        let start = self.lines[self.current].number;
        let mut tabs = vec![];

        loop {
            self.skip_blank_lines();
            let Some(line) = self.peek() else { break };
            let Some(title) = TabHeader::title(line.trimmed()) else {
                break;
            };
            self.current += 1;

            self.skip_blank_lines();
            let body = self.collect_indented_body(true);
            if body.is_empty() {
                log::debug!("tab {title:?} at line {} has no body", line.number);
            }

            tabs.push(Tab {
                span: self.span_from(line.number),
                title: title.to_string(),
                blocks: self.parse_body(body),
            });
        }

        Block::TabBlock(TabBlock {
            span: self.span_from(start),
            tabs,
        })
    }

    fn parse_paragraph(&mut self) -> Block {
        let start = self.lines[self.current].number;
        let mut parts: Vec<&str> = vec![];
        while let Some(line) = self.peek() {
            if line.is_blank() || (!parts.is_empty() && try_open(line.trimmed()).is_some()) {
                break;
            }
            self.current += 1;
            parts.push(line.text.trim());
        }

        let joined = parts.join(" ");
        Block::Paragraph(Paragraph {
            span: self.span_from(start),
            inlines: split_inlines(&joined, start),
        })
    }

    /// Parses a container body with a child parser one level deeper.
    fn parse_body(&self, body: Vec<LineRef<'a>>) -> Vec<Block> {
        if self.depth >= self.options.max_depth {
            // Intentional: past the nesting limit the body stays raw text.
            return raw_body(&body).into_iter().collect();
        }
        BlockParser {
            lines: body,
            current: 0,
            options: self.options,
            depth: self.depth + 1,
        }
        .parse_blocks()
    }

    fn skip_blank_lines(&mut self) {
        while self.peek().is_some_and(|line| line.is_blank()) {
            self.current += 1;
        }
    }

    /// Collects lines indented by one level, de-indenting each.
    ///
    /// Blank lines are kept as they are. The first unindented line ends the
    /// body, as does an unindented tab header when `stop_at_tab_header` is
    /// set. Trailing blank lines are consumed but dropped from the body.
    fn collect_indented_body(&mut self, stop_at_tab_header: bool) -> Vec<LineRef<'a>> {
        let mut body = vec![];
        while let Some(line) = self.peek() {
            if stop_at_tab_header && TabHeader::opens(line.text) {
                break;
            }
            let text = if line.is_blank() {
                line.text
            } else {
                match strip_indent_level(line.text) {
                    Some(text) => text,
                    None => break,
                }
            };
            self.current += 1;
            body.push(LineRef {
                number: line.number,
                text,
            });
        }

        while body.last().is_some_and(|line| line.is_blank()) {
            body.pop();
        }
        body
    }
}

/// Keeps a container body verbatim as one code block over its lines.
fn raw_body(body: &[LineRef<'_>]) -> Option<Block> {
    let (first, last) = (body.first()?, body.last()?);
    log::debug!(
        "nesting limit reached at line {}, keeping body as raw text",
        first.number
    );
    let content: Vec<&str> = body.iter().map(|line| line.text).collect();
    Some(Block::CodeBlock(CodeBlock {
        span: LineSpan::new(first.number, last.number + 1),
        language: None,
        meta: String::new(),
        content: content.join("\n"),
    }))
}
