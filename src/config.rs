use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::html::{HtmlLintRules, HtmlRule};

pub const CONFIG_FILE_NAME: &str = ".themelintrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locale directory, relative to the theme root.
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    /// Extension of the template files to scan.
    #[serde(default = "default_template_extension")]
    pub template_extension: String,
    /// Glob patterns (relative to the theme root) excluded from template scanning.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Per-rule overrides for the HTML lint, e.g. `{"attr-quote-style": false}`.
    #[serde(default)]
    pub html_rules: BTreeMap<String, bool>,
}

fn default_locales_dir() -> String {
    "locales".to_string()
}

fn default_template_extension() -> String {
    "liquid".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            template_extension: default_template_extension(),
            ignores: Vec::new(),
            html_rules: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores` and unknown
    /// rule names in `htmlRules`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for name in self.html_rules.keys() {
            if HtmlRule::from_name(name).is_none() {
                bail!("Unknown rule in 'htmlRules': \"{}\"", name);
            }
        }

        let extension = self.template_extension.trim_start_matches('.');
        if extension.is_empty() {
            bail!("'templateExtension' must not be empty");
        }

        Ok(())
    }

    /// The HTML lint rule set: defaults with `htmlRules` applied on top.
    pub fn html_lint_rules(&self) -> HtmlLintRules {
        let mut rules = HtmlLintRules::default();
        for (name, enabled) in &self.html_rules {
            if let Some(rule) = HtmlRule::from_name(name) {
                rules.set(rule, *enabled);
            }
        }
        rules
    }

    /// Template extension without a leading dot.
    pub fn template_extension(&self) -> &str {
        self.template_extension.trim_start_matches('.')
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
