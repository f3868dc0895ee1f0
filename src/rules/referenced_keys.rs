//! Referenced key coverage rule.
//!
//! Every key a template passes to the `t` filter must exist in the default
//! locale. Count-bearing references are looked up through their `.other`
//! variant.

use crate::{
    core::{LintContext, LocaleMessages, Reference},
    findings::{Check, Finding},
    rules::helpers::default_locale_label,
};

pub fn check_referenced_keys_findings(ctx: &LintContext) -> Vec<Finding> {
    let default_messages = ctx
        .default_locale()
        .and_then(|locale| ctx.catalog.get(locale));
    check_referenced_keys(&ctx.references, default_messages)
}

/// Check each reference against the default locale.
///
/// One finding per reference, in reference order, carrying the template path
/// and the offset of the match. Without a default locale every reference fails.
pub fn check_referenced_keys(
    references: &[Reference],
    default_messages: Option<&LocaleMessages>,
) -> Vec<Finding> {
    let label = default_locale_label(default_messages.map(|m| m.locale.as_str()));

    references
        .iter()
        .map(|reference| {
            let found = default_messages.is_some_and(|m| m.contains_key(&reference.key));
            let finding = if found {
                Finding::success(
                    Check::ReferencedKeys,
                    format!("'{}' has a matching entry in {}", reference.key, label),
                )
            } else {
                Finding::failure(
                    Check::ReferencedKeys,
                    format!(
                        "'{}' does not have a matching entry in {}",
                        reference.key, label
                    ),
                )
            };
            finding
                .with_file(&reference.file)
                .with_location(reference.offset)
        })
        .collect()
}
