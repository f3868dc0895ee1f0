//! Markup validation for `_html` translation values.
//!
//! Translation values flagged as HTML are fragments, not documents, and may
//! contain Liquid output tags (`{{ count }}`). The validator here checks their
//! structure only: tags must be closed and named consistently, attributes must
//! follow a consistent style.
//!
//! ## Module Structure
//!
//! - `rules`: Rule identifiers and the enabled rule set
//! - `tokenizer`: Start and end tags of a fragment, read with `quick-xml`
//! - `linter`: `HtmlLinter`, the built-in [`MarkupValidator`]

pub mod linter;
pub mod rules;
pub mod tokenizer;

pub use linter::HtmlLinter;
pub use rules::{HtmlLintRules, HtmlRule};

/// Base URL of the rule documentation; the rule name is the fragment.
pub const RULE_DOCS_URL: &str = "https://github.com/htmllint/htmllint/wiki/Options";

/// Documentation link for a rule, e.g. `.../Options#tag-close`.
pub fn rule_url(rule: HtmlRule) -> String {
    format!("{}#{}", RULE_DOCS_URL, rule)
}

/// A structural problem found in a markup string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlIssue {
    pub rule: HtmlRule,
    /// Byte offset in the validated markup.
    pub offset: usize,
    pub message: String,
}

impl HtmlIssue {
    pub fn new(rule: HtmlRule, offset: usize, message: impl Into<String>) -> Self {
        Self {
            rule,
            offset,
            message: message.into(),
        }
    }
}

/// Validates a markup string and returns its issues, ordered by position.
///
/// Implementations must be shareable across threads; values are validated in
/// parallel.
pub trait MarkupValidator: Sync {
    fn validate(&self, markup: &str) -> Vec<HtmlIssue>;
}
