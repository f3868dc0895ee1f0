//! Verification passes.
//!
//! Each pass is a pure function over the loaded catalog and references that
//! returns findings. The `*_findings` wrappers take a [`LintContext`] and pick
//! out the inputs the pass needs.
//!
//! ## Module Structure
//!
//! - `helpers`: Key classification and message formatting shared by the passes
//! - `default_locale`: A default locale file exists
//! - `referenced_keys`: Template references resolve in the default locale
//! - `key_parity`: Locales define the same keys as the default locale
//! - `html`: `_html` values are well-formed markup

pub mod default_locale;
pub mod helpers;
pub mod html;
pub mod key_parity;
pub mod referenced_keys;

use colored::Colorize;

use crate::{
    core::LintContext,
    findings::{Check, Reporter},
    html::MarkupValidator,
};

pub use default_locale::check_default_locale_findings;
pub use html::check_html_findings;
pub use key_parity::check_key_parity_findings;
pub use referenced_keys::check_referenced_keys_findings;

/// Run the selected passes in evaluation order and collect their findings.
///
/// `checks` only selects; passes always run in the order of [`Check::all`].
pub fn run_checks(
    ctx: &LintContext,
    checks: &[Check],
    validator: &dyn MarkupValidator,
) -> Reporter {
    let mut reporter = Reporter::new();

    for check in Check::all() {
        if !checks.contains(&check) {
            continue;
        }

        let findings = match check {
            Check::DefaultLocale => check_default_locale_findings(ctx),
            Check::ReferencedKeys => check_referenced_keys_findings(ctx),
            Check::KeyParity => check_key_parity_findings(ctx),
            Check::Html => check_html_findings(ctx, validator),
        };

        if ctx.verbose {
            let failures = findings.iter().filter(|f| f.is_failure()).count();
            eprintln!(
                "{} {}: {} findings, {} failures",
                "note:".bold().cyan(),
                check,
                findings.len(),
                failures
            );
        }

        for finding in findings {
            reporter.report(finding);
        }
    }

    reporter
}
