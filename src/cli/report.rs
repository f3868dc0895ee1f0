//! Report formatting and printing utilities.
//!
//! Separate from the checks so the crate can be used as a library: the
//! [`Reporter`] only collects findings, rendering happens here.

use std::io::{self, Write};

use colored::Colorize;

use crate::findings::{Finding, Reporter};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Header for failures that are not attributed to a file.
const NO_FILE: &str = "(no file)";

/// Print the report of a run to stdout.
pub fn print(reporter: &Reporter, verbose: bool) {
    print_to(reporter, verbose, &mut io::stdout().lock());
}

/// Print the report to a custom writer.
///
/// In verbose mode every success is listed first. The summary line always
/// follows; failures are then grouped by file in the order the files first
/// appear.
pub fn print_to<W: Write>(reporter: &Reporter, verbose: bool, writer: &mut W) {
    if verbose {
        for finding in reporter.successes() {
            let _ = writeln!(
                writer,
                "{} {}{}",
                SUCCESS_MARK.green(),
                finding.message,
                location_suffix(finding)
            );
        }
    }

    let status = if reporter.has_failures() {
        "Failed".bold().red()
    } else {
        "Success".bold().green()
    };
    let _ = writeln!(
        writer,
        "Translation tests complete: {} ({} checks run)",
        status,
        reporter.checks_run()
    );

    if !reporter.has_failures() {
        return;
    }

    for (file, failures) in group_by_file(reporter.failures()) {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "{}:", file.unwrap_or(NO_FILE).bold());
        for finding in failures {
            let offset = match finding.location {
                Some(location) => format!(" (offset {})", location).dimmed().to_string(),
                None => String::new(),
            };
            let _ = writeln!(
                writer,
                "  {} {}{}",
                FAILURE_MARK.red(),
                finding.message,
                offset
            );
        }
    }

    let count = reporter.failure_count();
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} {}",
            count,
            if count == 1 { "failure" } else { "failures" }
        )
        .bold()
        .red()
    );
}

/// ` --> file:offset`, ` --> file`, or nothing.
fn location_suffix(finding: &Finding) -> String {
    match (&finding.file, finding.location) {
        (Some(file), Some(location)) => format!(" {} {}:{}", "-->".blue(), file, location),
        (Some(file), None) => format!(" {} {}", "-->".blue(), file),
        (None, _) => String::new(),
    }
}

/// Group findings by file, keeping first-seen order of files and emission
/// order within a file.
fn group_by_file<'a>(
    findings: impl Iterator<Item = &'a Finding>,
) -> Vec<(Option<&'a str>, Vec<&'a Finding>)> {
    let mut groups: Vec<(Option<&'a str>, Vec<&'a Finding>)> = Vec::new();

    for finding in findings {
        let file = finding.file.as_deref();
        match groups.iter_mut().find(|(f, _)| *f == file) {
            Some((_, group)) => group.push(finding),
            None => groups.push((file, vec![finding])),
        }
    }

    groups
}
