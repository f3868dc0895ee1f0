//! Core data types shared by the loaders and the verification passes.
//!
//! ## Module Structure
//!
//! - `locale`: Flattened locale data (LocaleMessages, FlatLocaleMap, AllLocaleMessages)
//! - `reference`: Translation references found in templates (Reference)

pub mod locale;
pub mod reference;

pub use locale::{AllLocaleMessages, DEFAULT_LOCALE_MARKER, FlatLocaleMap, LocaleMessages};
pub use reference::Reference;
