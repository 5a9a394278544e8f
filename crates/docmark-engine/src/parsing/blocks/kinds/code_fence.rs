/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

/// Info string of an opening fence, split into language and meta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceInfo {
    pub language: Option<String>,
    pub meta: String,
}

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if the left-trimmed line starts a fence.
    pub fn opens(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BACKTICKS)
    }

    /// Returns true if the raw line closes an open fence.
    ///
    /// Any line whose trimmed form starts with backticks closes, including
    /// one carrying an info string.
    pub fn closes(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    /// Splits the text after the opening backticks on the first whitespace.
    ///
    /// `` ```python hl_lines="1-2" `` gives language `python` and meta
    /// `hl_lines="1-2"`. A bare fence has no language and an empty meta.
    pub fn info(line: &str) -> FenceInfo {
        let body = line
            .trim()
            .strip_prefix(Self::BACKTICKS)
            .unwrap_or_default()
            .trim();

        if body.is_empty() {
            return FenceInfo {
                language: None,
                meta: String::new(),
            };
        }

        match body.split_once(char::is_whitespace) {
            Some((language, meta)) => FenceInfo {
                language: Some(language.to_string()),
                meta: meta.trim_start().to_string(),
            },
            None => FenceInfo {
                language: Some(body.to_string()),
                meta: String::new(),
            },
        }
    }
}
