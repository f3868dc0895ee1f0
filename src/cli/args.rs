//! CLI argument definitions using clap.
//!
//! `theme-lint [OPTIONS] [PATH]` checks the theme at `PATH`; without a path
//! the help text is printed.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use crate::findings::Check;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Theme root directory to check
    pub path: Option<PathBuf>,

    /// Locales directory, relative to the theme root (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<String>,

    /// Checks to run (default: all)
    /// Can be specified multiple times: --check key-parity --check html
    #[arg(long = "check", value_enum)]
    pub checks: Vec<Check>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// The theme path, or None after printing help when no path was given.
    pub fn path_or_help(&self) -> Option<&Path> {
        if self.path.is_none() {
            Self::command().print_help().ok();
        }
        self.path.as_deref()
    }

    /// Selected checks, all of them when none was given.
    pub fn selected_checks(&self) -> Vec<Check> {
        if self.checks.is_empty() {
            Check::all()
        } else {
            self.checks.clone()
        }
    }
}
