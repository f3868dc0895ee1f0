//! File parsers for templates and locale files.
//!
//! This module provides parsers for the two kinds of theme files:
//! - `json`: Locale file parser (flattens nested JSON into dotted keys)
//! - `liquid`: Template scanner (finds `t`/`translate` filter references)

pub mod json;
pub mod liquid;
