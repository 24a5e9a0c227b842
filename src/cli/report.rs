//! Report formatting and printing utilities.
//!
//! Per-file results and the final summary go to stdout; warnings, notes and
//! per-file errors go to stderr. Every printer has a `*_to` variant taking a
//! writer so output can be tested.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::{FileReport, ProcessOptions, ProcessStats};
use crate::core::file_scanner::SkipReason;

/// Print the per-file line for a file with changes.
pub fn print_file_report(report: &FileReport) {
    print_file_report_to(report, &mut io::stdout().lock());
}

pub fn print_file_report_to<W: Write>(report: &FileReport, writer: &mut W) {
    if report.changed_lines() == 0 {
        return;
    }
    let _ = writeln!(
        writer,
        "{}: changed {} line(s)",
        report.path.display(),
        report.changed_lines()
    );
}

/// Print every changed line of a file as a `-`/`+` pair.
pub fn print_preview(report: &FileReport) {
    print_preview_to(report, &mut io::stdout().lock());
}

pub fn print_preview_to<W: Write>(report: &FileReport, writer: &mut W) {
    let width = report
        .changes
        .last()
        .map(|c| c.line.to_string().len())
        .unwrap_or(1);

    for change in &report.changes {
        let before = change.before.trim_end_matches(['\r', '\n']);
        let after = change.after.trim_end_matches(['\r', '\n']);
        let _ = writeln!(
            writer,
            "  {:>width$} {} {}",
            change.line.to_string().blue(),
            "-".red(),
            before.red(),
            width = width
        );
        let _ = writeln!(
            writer,
            "  {:>width$} {} {}",
            change.line.to_string().blue(),
            "+".green(),
            after.green(),
            width = width
        );
    }
}

/// Print the final summary line(s).
pub fn print_summary(stats: &ProcessStats, options: &ProcessOptions) {
    print_summary_to(stats, options, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(stats: &ProcessStats, options: &ProcessOptions, writer: &mut W) {
    if options.dry_run {
        let _ = writeln!(
            writer,
            "\n{} would change {} line(s) across {}/{} file(s).",
            "DRY RUN:".yellow().bold(),
            stats.lines_changed,
            stats.files_changed,
            stats.files_total
        );
        return;
    }

    let _ = writeln!(
        writer,
        "\n{} changed {} line(s) across {}/{} file(s).",
        "Done:".green().bold(),
        stats.lines_changed,
        stats.files_changed,
        stats.files_total
    );
    if let Some(suffix) = &options.backup_suffix {
        let _ = writeln!(
            writer,
            "Backups created as *{} (only for files that actually changed).",
            suffix
        );
    }
}

/// Print a warning for an explicit path that will not be processed.
pub fn print_skipped_path(path: &Path, reason: SkipReason) {
    print_skipped_path_to(path, reason, &mut io::stderr().lock());
}

pub fn print_skipped_path_to<W: Write>(path: &Path, reason: SkipReason, writer: &mut W) {
    let what = match reason {
        SkipReason::NotFound => "path not found",
        SkipReason::Directory => "directory provided",
    };
    let _ = writeln!(
        writer,
        "{} {}, skipped: {}",
        "warning:".bold().yellow(),
        what,
        path.display()
    );
}

/// Print a note for an explicit file that does not carry a configured extension.
pub fn print_unmatched_extension(path: &Path, extensions: &[String]) {
    print_unmatched_extension_to(path, extensions, &mut io::stderr().lock());
}

pub fn print_unmatched_extension_to<W: Write>(path: &Path, extensions: &[String], writer: &mut W) {
    let expected = extensions
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join("/");
    let _ = writeln!(
        writer,
        "{} processing non-{} file because it was explicitly provided: {}",
        "note:".bold().cyan(),
        expected,
        path.display()
    );
}

/// Print a per-file I/O error.
pub fn print_file_error(path: &Path, err: &anyhow::Error) {
    print_file_error_to(path, err, &mut io::stderr().lock());
}

pub fn print_file_error_to<W: Write>(path: &Path, err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}: {:#}",
        "error:".bold().red(),
        path.display(),
        err
    );
}

/// Print a warning about files that could not be processed.
pub fn print_failure_warning(count: usize) {
    print_failure_warning_to(count, &mut io::stderr().lock());
}

pub fn print_failure_warning_to<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be processed",
            "warning:".bold().yellow(),
            count
        );
    }
}

/// Print a warning about walk entries that could not be accessed.
pub fn print_scan_warning(count: usize, verbose: bool) {
    print_scan_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_scan_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print the backup created for a file in this run.
pub fn print_backup_created(path: &Path) {
    print_backup_created_to(path, &mut io::stderr().lock());
}

pub fn print_backup_created_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(writer, "{} backup written to {}", "note:".bold().cyan(), path.display());
}

/// Print which config file is in use.
pub fn print_config_path(path: &Path) {
    print_config_path_to(path, &mut io::stderr().lock());
}

pub fn print_config_path_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(writer, "{} using config {}", "note:".bold().cyan(), path.display());
}
