use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;

use super::args::Arguments;
use crate::{
    config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config},
    core::LintContext,
    findings::Reporter,
    html::HtmlLinter,
    rules::run_checks,
};

/// Run the selected checks on the theme at `root`.
///
/// Configuration priority (highest to lowest): CLI arguments, the
/// `.themelintrc.json` file found from `root` upwards, built-in defaults.
pub fn check(args: &Arguments, root: &Path) -> Result<Reporter> {
    if !root.is_dir() {
        bail!("'{}' is not a directory", root.display());
    }

    let ConfigLoadResult { mut config, path } = load_config(root)?;

    if args.verbose {
        match &path {
            Some(path) => eprintln!(
                "{} Using config file: {}",
                "note:".bold().cyan(),
                path.display()
            ),
            None => eprintln!(
                "{} No {} found, using defaults",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            ),
        }
    }

    if let Some(locales_dir) = &args.locales_dir {
        config.locales_dir = locales_dir.clone();
    }

    let validator = HtmlLinter::new(config.html_lint_rules());
    let ctx = LintContext::load(root, config, args.verbose)?;

    Ok(run_checks(&ctx, &args.selected_checks(), &validator))
}
