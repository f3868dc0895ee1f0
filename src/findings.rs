//! Finding types for translation check results.
//!
//! Every verification pass produces findings: a success or a failure with a
//! message and, where known, the file and offset it points at. Findings are
//! never errors; they are the product of a run and are collected by the
//! [`Reporter`] in emission order.

use clap::ValueEnum;

// ============================================================
// Check and Outcome
// ============================================================

/// Identifier of the verification pass that emitted a finding.
///
/// The declaration order is the evaluation order of a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Check {
    /// A default locale file exists.
    DefaultLocale,
    /// Every template reference has an entry in the default locale.
    ReferencedKeys,
    /// Every locale has the same keys as the default locale.
    KeyParity,
    /// Every `_html` value is well-formed markup.
    Html,
}

impl Check {
    pub fn all() -> Vec<Check> {
        vec![
            Check::DefaultLocale,
            Check::ReferencedKeys,
            Check::KeyParity,
            Check::Html,
        ]
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Check::DefaultLocale => write!(f, "default-locale"),
            Check::ReferencedKeys => write!(f, "referenced-keys"),
            Check::KeyParity => write!(f, "key-parity"),
            Check::Html => write!(f, "html"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

// ============================================================
// Finding
// ============================================================

/// A single success or failure record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub check: Check,
    pub outcome: Outcome,
    pub message: String,
    /// File the finding is attributed to, if any.
    pub file: Option<String>,
    /// Character offset inside `file`, if any.
    pub location: Option<usize>,
}

impl Finding {
    pub fn success(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            outcome: Outcome::Success,
            message: message.into(),
            file: None,
            location: None,
        }
    }

    pub fn failure(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            outcome: Outcome::Failure,
            message: message.into(),
            file: None,
            location: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_location(mut self, location: usize) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_failure(&self) -> bool {
        self.outcome == Outcome::Failure
    }
}

// ============================================================
// Reporter
// ============================================================

/// Collects findings in the order they are emitted.
///
/// Rendering is left to the caller (see `cli::report`), so the reporter can be
/// used as a plain library result.
#[derive(Debug, Default)]
pub struct Reporter {
    findings: Vec<Finding>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(
        &mut self,
        check: Check,
        message: impl Into<String>,
        file: Option<&str>,
        location: Option<usize>,
    ) {
        self.record(Finding::success(check, message), file, location);
    }

    pub fn failure(
        &mut self,
        check: Check,
        message: impl Into<String>,
        file: Option<&str>,
        location: Option<usize>,
    ) {
        self.record(Finding::failure(check, message), file, location);
    }

    fn record(&mut self, mut finding: Finding, file: Option<&str>, location: Option<usize>) {
        finding.file = file.map(str::to_string);
        finding.location = location;
        self.findings.push(finding);
    }

    /// Record a finding produced by a pass through `success`/`failure`.
    pub fn report(&mut self, finding: Finding) {
        let Finding {
            check,
            outcome,
            message,
            file,
            location,
        } = finding;

        match outcome {
            Outcome::Success => self.success(check, message, file.as_deref(), location),
            Outcome::Failure => self.failure(check, message, file.as_deref(), location),
        }
    }

    /// All findings in emission order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn successes(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_failure())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn has_failures(&self) -> bool {
        self.findings.iter().any(Finding::is_failure)
    }

    /// Number of checks run, successes and failures together.
    pub fn checks_run(&self) -> usize {
        self.findings.len()
    }
}
