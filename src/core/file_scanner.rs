use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Result of scanning for template files.
pub struct ScanResult {
    /// Template files, sorted by path.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Find every file below `base_dir` with the given extension.
///
/// Hidden files and directories are skipped, as are paths (relative to
/// `base_dir`) matching one of `ignore_patterns`.
pub fn scan_files(
    base_dir: &Path,
    extension: &str,
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let walker = WalkDir::new(base_dir)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        if patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        if entry.file_type().is_file() && has_extension(path, extension) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}
