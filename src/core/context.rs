use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    config::Config,
    core::{
        AllLocaleMessages, Reference,
        file_scanner::scan_files,
        parsers::{json::scan_locale_files, liquid::parse_template_file},
    },
};

/// Everything a run checks, loaded once.
///
/// `LintContext` is the per-run cache: the locale catalog and the template
/// references are read when the context is created and shared by every
/// verification pass. Nothing is kept between runs; a new run builds a new
/// context.
///
/// # Loading
///
/// The catalog and the references are independent, so they are loaded
/// concurrently with `rayon::join`. Each side reads its files in parallel and
/// keeps a deterministic order (locales by identifier, templates by path). The
/// first read or parse error aborts the whole load.
pub struct LintContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Theme root directory.
    pub root_dir: PathBuf,

    /// Directory the locale files were loaded from.
    pub locales_dir: PathBuf,

    /// All locales, keyed by identifier.
    pub catalog: AllLocaleMessages,

    /// References from every template, files in path order, document order
    /// within a file.
    pub references: Vec<Reference>,

    /// Number of template files scanned.
    pub template_count: usize,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Default locale identifier.
    /// Resolved on first call to `default_locale()`.
    default_locale: OnceCell<Option<String>>,
}

impl LintContext {
    /// Load the catalog and the references of the theme at `root_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The locales path exists but is not a directory
    /// - A locale or template file cannot be read
    /// - A locale file is not valid JSON, not an object, or has colliding keys
    pub fn load(root_dir: &Path, config: Config, verbose: bool) -> Result<Self> {
        let locales_dir = root_dir.join(&config.locales_dir);

        if verbose && !locales_dir.exists() {
            eprintln!(
                "{} Locales directory not found: {}",
                "warning:".bold().yellow(),
                locales_dir.display()
            );
        }

        let scan = scan_files(
            root_dir,
            config.template_extension(),
            &config.ignores,
            verbose,
        );
        if verbose && scan.skipped_count > 0 {
            eprintln!(
                "{} {} paths could not be accessed",
                "warning:".bold().yellow(),
                scan.skipped_count
            );
        }

        let (catalog, references) = rayon::join(
            || scan_locale_files(&locales_dir),
            || load_references(&scan.files),
        );
        let catalog = catalog?;
        let references = references?;

        if verbose {
            eprintln!(
                "{} Loaded {} locale files and {} references from {} templates",
                "note:".bold().cyan(),
                catalog.len(),
                references.len(),
                scan.files.len()
            );
        }

        Ok(Self {
            config,
            root_dir: root_dir.to_path_buf(),
            locales_dir,
            catalog,
            references,
            template_count: scan.files.len(),
            verbose,
            default_locale: OnceCell::new(),
        })
    }

    /// Identifier of the default locale, `None` if no locale qualifies.
    ///
    /// The first identifier (in catalog order) containing `.default`.
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale
            .get_or_init(|| find_default_locale(&self.catalog))
            .as_deref()
    }
}

fn find_default_locale(catalog: &AllLocaleMessages) -> Option<String> {
    catalog
        .values()
        .find(|messages| messages.is_default())
        .map(|messages| messages.locale.clone())
}

fn load_references(files: &[PathBuf]) -> Result<Vec<Reference>> {
    let per_file: Vec<Vec<Reference>> = files
        .par_iter()
        .map(|path| parse_template_file(path))
        .collect::<Result<_>>()?;

    Ok(per_file.into_iter().flatten().collect())
}
