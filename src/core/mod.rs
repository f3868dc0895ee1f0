//! Loading engine: everything the verification passes consume.
//!
//! ## Module Structure
//!
//! - `context`: Per-run context holding the loaded catalog and references
//! - `data`: Core data types (LocaleMessages, Reference)
//! - `file_scanner`: Template file discovery
//! - `parsers`: Locale JSON flattening and Liquid reference scanning

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod parsers;

pub use context::LintContext;
pub use data::{AllLocaleMessages, DEFAULT_LOCALE_MARKER, FlatLocaleMap, LocaleMessages, Reference};
