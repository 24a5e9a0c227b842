//! CLI argument definitions using clap.
//!
//! `incfix` has a single flat command line:
//!
//! ```text
//! incfix [--dry-run] [--no-backup] [-v] [FILES]...
//! ```
//!
//! Without `FILES`, every matching file under the current directory is
//! processed.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Rewrite PHP include/require('file') calls to include/require 'file' where the call is the only code on its line",
    long_about = None
)]
pub struct Arguments {
    /// Do not modify files, only report changes
    #[arg(long, env = "INCFIX_DRY_RUN")]
    pub dry_run: bool,

    /// Do not create backup files
    #[arg(long)]
    pub no_backup: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Files to process (default: all matching files under the current directory)
    pub files: Vec<PathBuf>,
}
