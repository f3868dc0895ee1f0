//! theme-lint - translation checker for Liquid themes
//!
//! theme-lint is a CLI tool and library for checking translation issues in
//! Liquid themes. It finds every `t`/`translate` filter reference in the
//! templates, checks them against the default locale, compares every locale
//! file with the default one, and validates the markup of `_html` keys.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, rendering, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Loading engine (template scanning, locale flattening, run context)
//! - `findings`: Finding types and the reporter collecting them
//! - `html`: Markup validator used for `_html` translation values
//! - `rules`: The verification passes

pub mod cli;
pub mod config;
pub mod core;
pub mod findings;
pub mod html;
pub mod rules;
