//! HTML validity rule.
//!
//! Values of keys ending in `_html` (or pluralized variants of such keys) are
//! rendered unescaped by the theme, so they must be well-formed markup.

use rayon::prelude::*;
use serde_json::Value;

use crate::{
    core::{AllLocaleMessages, LintContext},
    findings::{Check, Finding},
    html::{MarkupValidator, rule_url},
    rules::helpers::is_html_key,
};

pub fn check_html_findings(ctx: &LintContext, validator: &dyn MarkupValidator) -> Vec<Finding> {
    check_html(&ctx.catalog, validator)
}

/// Validate every HTML-flagged value of every locale.
///
/// Findings follow catalog order, then key order within each locale file, and
/// are attributed to the locale file. Only the first issue of a value is
/// reported.
pub fn check_html(catalog: &AllLocaleMessages, validator: &dyn MarkupValidator) -> Vec<Finding> {
    let targets: Vec<(&str, &str, &Value)> = catalog
        .values()
        .flat_map(|messages| {
            messages
                .iter()
                .filter(|(key, _)| is_html_key(key))
                .map(|(key, value)| (messages.file_path.as_str(), key.as_str(), value))
        })
        .collect();

    targets
        .par_iter()
        .map(|(file, key, value)| {
            let markup = markup_text(value);
            let issues = validator.validate(&markup);

            let finding = match issues.first() {
                None => Finding::success(Check::Html, format!("'{}' contains valid HTML", key)),
                Some(issue) => Finding::failure(
                    Check::Html,
                    format!(
                        "'{}' contains invalid HTML. See {}",
                        key,
                        rule_url(issue.rule)
                    ),
                ),
            };
            finding.with_file(*file)
        })
        .collect()
}

/// Strings are validated verbatim, any other leaf as its JSON text.
fn markup_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
