//! Cross-locale key parity rule.
//!
//! Every locale must define exactly the keys of the default locale: no key
//! missing, no key the default locale does not know about.

use crate::{
    core::{AllLocaleMessages, LintContext, LocaleMessages},
    findings::{Check, Finding},
    rules::helpers::{default_locale_label, quote_keys},
};

pub fn check_key_parity_findings(ctx: &LintContext) -> Vec<Finding> {
    check_key_parity(&ctx.catalog, ctx.default_locale())
}

/// Compare the key set of every non-default locale with the default locale.
///
/// Produces exactly one finding per compared locale, attributed to its file.
/// Missing keys are listed in default-locale order, extra keys in the order of
/// the compared locale. Without a default locale every locale is compared
/// against an empty key set.
pub fn check_key_parity(
    catalog: &AllLocaleMessages,
    default_locale: Option<&str>,
) -> Vec<Finding> {
    let default_messages = default_locale.and_then(|locale| catalog.get(locale));
    let label = default_locale_label(default_locale);

    catalog
        .values()
        .filter(|messages| Some(messages.locale.as_str()) != default_locale)
        .map(|messages| compare_locale(messages, default_messages, &label))
        .collect()
}

fn compare_locale(
    messages: &LocaleMessages,
    default_messages: Option<&LocaleMessages>,
    label: &str,
) -> Finding {
    let missing: Vec<&str> = default_messages
        .into_iter()
        .flat_map(LocaleMessages::keys)
        .filter(|key| !messages.contains_key(key))
        .map(String::as_str)
        .collect();

    let extra: Vec<&str> = messages
        .keys()
        .filter(|key| !default_messages.is_some_and(|d| d.contains_key(key)))
        .map(String::as_str)
        .collect();

    if missing.is_empty() && extra.is_empty() {
        return Finding::success(
            Check::KeyParity,
            format!(
                "'{}' has all the entries present in {}",
                messages.locale, label
            ),
        )
        .with_file(&messages.file_path);
    }

    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("Missing entries found: {}", quote_keys(&missing)));
    }
    if !extra.is_empty() {
        parts.push(format!("Extra entries found: {}", quote_keys(&extra)));
    }

    Finding::failure(Check::KeyParity, parts.join("; ")).with_file(&messages.file_path)
}
