use serde::{Deserialize, Serialize};

use super::blocks::kinds::AdmonitionTag;

/// Decides the `foldable` flag of parsed admonitions.
///
/// The tag is recorded on every admonition regardless, so a renderer may
/// also ignore the flag and decide from the tag itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoldPolicy {
    /// No admonition is foldable.
    #[default]
    Never,
    /// `???` admonitions are foldable, `!!!` ones are not.
    QuestionMarks,
}

impl FoldPolicy {
    pub fn is_foldable(self, tag: AdmonitionTag) -> bool {
        match self {
            FoldPolicy::Never => false,
            FoldPolicy::QuestionMarks => tag == AdmonitionTag::Question,
        }
    }
}

/// Nesting depth of admonitions and tabs parsed as blocks by default.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options threaded through a parse and every nested sub-parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub fold_policy: FoldPolicy,
    /// Containers nested deeper than this keep their body as raw text.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            fold_policy: FoldPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_fold_policy(mut self, fold_policy: FoldPolicy) -> Self {
        self.fold_policy = fold_policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_never_folds() {
        let options = ParseOptions::default();
        assert!(!options.fold_policy.is_foldable(AdmonitionTag::Question));
        assert!(!options.fold_policy.is_foldable(AdmonitionTag::Exclamation));
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn question_marks_policy_folds_only_question_tags() {
        let policy = FoldPolicy::QuestionMarks;
        assert!(policy.is_foldable(AdmonitionTag::Question));
        assert!(!policy.is_foldable(AdmonitionTag::Exclamation));
    }
}
