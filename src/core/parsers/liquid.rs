use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::{CaptureMatches, Regex};

use crate::core::Reference;

// Matches a translate filter applied to a quoted key:
//   {{ "product.title" | t }}
//   {{ 'cart.count' | translate: count: cart.item_count | escape }}
// Group 1/2: key quoted with " or ' (the other quote may appear inside)
// Group 3:   filter arguments after the colon, up to the next `|` or `}}`
static TRANSLATE_FILTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\{\{\s*(?:"([^"\n\r]+)"|'([^'\n\r]+)')\s*\|\s*(?:translate|t)\b(?::(.*?)\s*(?:\||\}\}))?"#,
    )
    .unwrap()
});

/// Argument token that makes a reference resolve through its plural bucket.
const COUNT_ARGUMENT: &str = "count:";

/// A translate filter invocation found in template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// The quoted key, verbatim.
    pub key: String,
    /// Raw argument list after `t:`, if any.
    pub args: Option<String>,
    /// Character offset where the invocation starts.
    pub offset: usize,
}

impl FilterMatch {
    /// True when the arguments contain a standalone `count:` token.
    pub fn is_pluralized(&self) -> bool {
        self.args
            .as_deref()
            .is_some_and(|args| args.split_whitespace().any(|token| token == COUNT_ARGUMENT))
    }

    pub fn into_reference(self, file: &str) -> Reference {
        let pluralized = self.is_pluralized();
        let reference = Reference::new(file, self.offset, self.key);
        if pluralized {
            reference.pluralize()
        } else {
            reference
        }
    }
}

/// Iterator over the translate filter invocations of one template.
///
/// Matches are yielded lazily in document order and never overlap.
pub struct TranslationFilterScanner<'a> {
    content: &'a str,
    matches: CaptureMatches<'static, 'a>,
    // Byte/char position of the previous match, so offsets are computed in one pass.
    last_byte: usize,
    last_char: usize,
}

impl<'a> TranslationFilterScanner<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            matches: TRANSLATE_FILTER_REGEX.captures_iter(content),
            last_byte: 0,
            last_char: 0,
        }
    }

    fn char_offset(&mut self, byte: usize) -> usize {
        self.last_char += self.content[self.last_byte..byte].chars().count();
        self.last_byte = byte;
        self.last_char
    }
}

impl Iterator for TranslationFilterScanner<'_> {
    type Item = FilterMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let captures = self.matches.next()?;
        let whole = captures.get(0)?;
        let key = captures.get(1).or_else(|| captures.get(2))?.as_str();
        let args = captures.get(3).map(|m| m.as_str().to_string());
        let offset = self.char_offset(whole.start());

        Some(FilterMatch {
            key: key.to_string(),
            args,
            offset,
        })
    }
}

/// Extract all references from template source.
pub fn extract_references(content: &str, file_path: &str) -> Vec<Reference> {
    TranslationFilterScanner::new(content)
        .map(|m| m.into_reference(file_path))
        .collect()
}

pub fn parse_template_file(path: &Path) -> Result<Vec<Reference>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file: {:?}", path))?;

    Ok(extract_references(&content, &path.to_string_lossy()))
}
