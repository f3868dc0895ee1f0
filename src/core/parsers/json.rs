use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde_json::Value;

use crate::core::{AllLocaleMessages, FlatLocaleMap, LocaleMessages};

pub fn parse_locale_file(path: &Path, locale: &str) -> Result<LocaleMessages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse locale file: {:?}", path))?;

    let file_path = path.to_string_lossy().to_string();
    let mut messages = LocaleMessages::new(locale, file_path);
    messages.entries =
        flatten_locale(&json).with_context(|| format!("Invalid locale file: {:?}", path))?;
    Ok(messages)
}

/// Flatten a locale document into dotted key paths.
///
/// The document must be a JSON object. Objects are walked recursively; every
/// other value (strings, numbers, booleans, null and arrays) is a leaf.
/// Paths that collide after flattening are rejected.
pub fn flatten_locale(json: &Value) -> Result<FlatLocaleMap> {
    if !json.is_object() {
        bail!("expected a JSON object at the top level");
    }

    let mut result = FlatLocaleMap::new();
    flatten_json(json, None, &mut result)?;
    check_prefix_conflicts(&result)?;
    Ok(result)
}

/// `prefix` is `None` only at the document root; an empty segment is still a
/// segment (`{"": {"a": 1}}` flattens to `.a`).
fn flatten_json(value: &Value, prefix: Option<&str>, result: &mut FlatLocaleMap) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = match prefix {
                    Some(prefix) => format!("{}.{}", prefix, key),
                    None => key.clone(),
                };
                flatten_json(val, Some(&path), result)?;
            }
        }
        leaf => {
            let path = prefix.unwrap_or_default();
            if result.contains_key(path) {
                bail!("key '{}' is defined more than once", path);
            }
            result.insert(path.to_string(), leaf.clone());
        }
    }
    Ok(())
}

/// Reject a leaf whose path is also the parent of another leaf,
/// e.g. `{"a": "x", "a.b": "y"}`.
fn check_prefix_conflicts(entries: &FlatLocaleMap) -> Result<()> {
    let keys: HashSet<&str> = entries.keys().map(String::as_str).collect();

    for key in entries.keys() {
        for (i, _) in key.match_indices('.') {
            let parent = &key[..i];
            if keys.contains(parent) {
                bail!(
                    "key '{}' is both a value and the parent of '{}'",
                    parent,
                    key
                );
            }
        }
    }

    Ok(())
}

/// Extracts locale from filename.
///
/// Examples:
/// - "fr.json" -> Some("fr")
/// - "en.default.json" -> Some("en.default")
/// - "/path/to/locales/pt-BR.json" -> Some("pt-BR")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `*.json` file directly inside `locale_dir`.
///
/// Hidden files (`.backup.json`) are not locales and are skipped.
/// A missing directory yields an empty catalog. Any unreadable or invalid
/// file fails the whole load.
pub fn scan_locale_files(locale_dir: impl AsRef<Path>) -> Result<AllLocaleMessages> {
    let locale_dir = locale_dir.as_ref();

    if !locale_dir.exists() {
        return Ok(AllLocaleMessages::new());
    }

    if !locale_dir.is_dir() {
        bail!("'{}' is not a directory.", locale_dir.display());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(locale_dir)
        .with_context(|| format!("Failed to read locales directory: {:?}", locale_dir))?
    {
        let path = entry?.path();

        if path.is_file()
            && !is_hidden(&path)
            && path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            files.push((locale, path));
        }
    }
    files.sort();

    let loaded: Vec<LocaleMessages> = files
        .par_iter()
        .map(|(locale, path)| parse_locale_file(path, locale))
        .collect::<Result<_>>()?;

    Ok(loaded
        .into_iter()
        .map(|messages| (messages.locale.clone(), messages))
        .collect())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
