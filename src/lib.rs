//! incfix - rewrite PHP include/require calls to keyword form
//!
//! incfix is a CLI tool and library that rewrites `include('file.php');` to
//! `include 'file.php';` (and likewise for `include_once`, `require` and
//! `require_once`), but only on lines where that statement is the only code,
//! ignoring whitespace, comments and a trailing `?>`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Line classifier, rewriter and file processor

pub mod cli;
pub mod config;
pub mod core;
