//! Helper functions shared by the verification passes.

/// Trailing segments that mark a leaf as one variant of a pluralized group.
pub const PLURALIZATION_KEYS: [&str; 4] = ["zero", "one", "two", "other"];

/// Suffix of the key segment that flags a value as HTML.
pub const HTML_KEY_SUFFIX: &str = "_html";

/// Whether a flattened key holds HTML.
///
/// The last segment decides, except for a pluralization variant, where its
/// parent segment decides: `count_html.other` is HTML, `count.other` is not.
pub fn is_html_key(key: &str) -> bool {
    let mut segments = key.rsplit('.');
    let Some(last) = segments.next() else {
        return false;
    };

    let applicable = if PLURALIZATION_KEYS.contains(&last) {
        segments.next()
    } else {
        Some(last)
    };

    applicable.is_some_and(|segment| segment.ends_with(HTML_KEY_SUFFIX))
}

/// Render keys as a quoted list: `'a', 'b'`.
pub fn quote_keys<S: AsRef<str>>(keys: &[S]) -> String {
    keys.iter()
        .map(|key| format!("'{}'", key.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Label of the default locale in messages: `'en.default'`, or
/// `the default locale` when the catalog has none.
pub fn default_locale_label(default_locale: Option<&str>) -> String {
    match default_locale {
        Some(locale) => format!("'{}'", locale),
        None => "the default locale".to_string(),
    }
}
