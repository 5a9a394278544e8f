use serde::Serialize;

/// Admonition header type with owned delimiter constants.
pub struct AdmonitionHeader;

/// The three-character marker that opens an admonition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdmonitionTag {
    /// `!!!`
    #[serde(rename = "!!!")]
    Exclamation,
    /// `???`
    #[serde(rename = "???")]
    Question,
}

impl AdmonitionTag {
    pub fn as_str(self) -> &'static str {
        match self {
            AdmonitionTag::Exclamation => AdmonitionHeader::EXCLAMATION,
            AdmonitionTag::Question => AdmonitionHeader::QUESTION,
        }
    }
}

impl std::fmt::Display for AdmonitionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of an admonition header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Lower-cased callout kind such as `note`; empty when absent.
    pub kind: String,
    /// Title with surrounding quotes removed; empty when absent.
    pub title: String,
}

impl AdmonitionHeader {
    pub const EXCLAMATION: &'static str = "!!!";
    pub const QUESTION: &'static str = "???";
    pub const QUOTE: char = '"';

    /// The tag opening the left-trimmed line, if any.
    pub fn tag(trimmed: &str) -> Option<AdmonitionTag> {
        if trimmed.starts_with(Self::EXCLAMATION) {
            Some(AdmonitionTag::Exclamation)
        } else if trimmed.starts_with(Self::QUESTION) {
            Some(AdmonitionTag::Question)
        } else {
            None
        }
    }

    /// Returns true if the left-trimmed line opens an admonition.
    pub fn opens(trimmed: &str) -> bool {
        Self::tag(trimmed).is_some()
    }

    /// Splits `!!! note "Title"` into kind and title.
    ///
    /// Anything after the tag is accepted: a missing kind, a missing title or
    /// an unquoted title all parse.
    pub fn parse(tag: AdmonitionTag, line: &str) -> ParsedHeader {
        let header = line.trim();
        let rest = header
            .strip_prefix(tag.as_str())
            .unwrap_or(header)
            .trim_start();

        let (kind, title) = if rest.starts_with(Self::QUOTE) {
            ("", rest)
        } else {
            match rest.split_once(char::is_whitespace) {
                Some((kind, title)) => (kind, title.trim_start()),
                None => (rest, ""),
            }
        };

        ParsedHeader {
            kind: kind.to_lowercase(),
            title: title.trim_matches(Self::QUOTE).to_string(),
        }
    }
}
