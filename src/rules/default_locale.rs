//! Default locale existence rule.
//!
//! A theme must ship exactly one locale file whose identifier contains
//! `.default` (e.g. `en.default.json`); it is the source of truth for every
//! other pass.

use crate::{
    core::{AllLocaleMessages, LintContext},
    findings::{Check, Finding},
};

pub fn check_default_locale_findings(ctx: &LintContext) -> Vec<Finding> {
    check_default_locale(&ctx.catalog, ctx.default_locale())
}

/// Report whether the catalog has a default locale.
///
/// The success finding points at the default locale file.
pub fn check_default_locale(
    catalog: &AllLocaleMessages,
    default_locale: Option<&str>,
) -> Vec<Finding> {
    let finding = match default_locale.and_then(|locale| catalog.get(locale)) {
        Some(messages) => Finding::success(Check::DefaultLocale, "Includes a default locale file")
            .with_file(&messages.file_path),
        None => Finding::failure(Check::DefaultLocale, "Does not include a default locale file"),
    };

    vec![finding]
}
