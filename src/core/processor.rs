//! File processor.
//!
//! Runs the classifier and rewriter over every line of a file, in order, and
//! writes the result back unless this is a dry run.
//!
//! ## Write order
//!
//! ```text
//! read file (fully)
//!     ↓
//! rewrite lines (comment state threads line to line)
//!     ↓
//! write backup (only if none exists yet)
//!     ↓
//! overwrite file
//! ```

use std::{
    ffi::OsString,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::classifier::classify_line;
use super::rewriter::{rewrite_statement, split_line_ending};
use super::scanner::CommentState;

/// Options controlling how files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Report changes without writing anything.
    pub dry_run: bool,
    /// Suffix appended to the file path for backups; `None` disables backups.
    pub backup_suffix: Option<String>,
}

/// A single rewritten line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number.
    pub line: usize,
    pub before: String,
    pub after: String,
}

/// Result of rewriting source bytes in memory.
#[derive(Debug, Clone, Default)]
pub struct RewriteResult {
    pub output: Vec<u8>,
    pub changes: Vec<LineChange>,
}

impl RewriteResult {
    pub fn changed_lines(&self) -> usize {
        self.changes.len()
    }
}

/// Result of processing one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub changes: Vec<LineChange>,
    /// Set when this run created the backup file.
    pub backup_path: Option<PathBuf>,
}

impl FileReport {
    pub fn changed_lines(&self) -> usize {
        self.changes.len()
    }
}

/// Rewrite every safe directive in `source`.
///
/// Lines are split after each `\n`, so line endings (including a missing one
/// on the last line) are carried through unchanged. Lines that are not valid
/// UTF-8 are copied byte for byte and never rewritten, though they still
/// advance the comment state.
///
/// # Examples
///
/// ```
/// use incfix::core::rewrite_source;
///
/// let result = rewrite_source(b"<?php\ninclude('a.php');\nif ($x) include('b.php');\n");
/// assert_eq!(result.output, b"<?php\ninclude 'a.php';\nif ($x) include('b.php');\n");
/// assert_eq!(result.changed_lines(), 1);
/// ```
pub fn rewrite_source(source: &[u8]) -> RewriteResult {
    let mut state = CommentState::new();
    let mut result = RewriteResult {
        output: Vec::with_capacity(source.len()),
        ..Default::default()
    };

    for (idx, raw) in source.split_inclusive(|&b| b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw) else {
            let decoded = String::from_utf8_lossy(raw);
            let (content, _) = split_line_ending(&decoded);
            state = classify_line(content, state).2;
            result.output.extend_from_slice(raw);
            continue;
        };

        let (content, line_ending) = split_line_ending(line);
        let (verdict, statement, next_state) = classify_line(content, state);
        state = next_state;

        let rewritten = match statement {
            Some(statement) if verdict.can_rewrite() => rewrite_statement(&statement, line_ending),
            _ => {
                result.output.extend_from_slice(raw);
                continue;
            }
        };

        if rewritten != line {
            result.changes.push(LineChange {
                line: idx + 1,
                before: line.to_string(),
                after: rewritten.clone(),
            });
        }
        result.output.extend_from_slice(rewritten.as_bytes());
    }

    result
}

/// Path of the backup for `path`: the full path with `suffix` appended.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Process a single file.
///
/// Nothing is written when no line changes or when `options.dry_run` is set.
/// An existing backup is never overwritten, so it keeps the content from
/// before the first run.
pub fn process_file(path: &Path, options: &ProcessOptions) -> Result<FileReport> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let result = rewrite_source(&bytes);

    let mut report = FileReport {
        path: path.to_path_buf(),
        changes: result.changes,
        backup_path: None,
    };

    if report.changes.is_empty() || options.dry_run {
        return Ok(report);
    }

    if let Some(suffix) = &options.backup_suffix {
        let backup = backup_path(path, suffix);
        if write_backup_once(&backup, &bytes)? {
            report.backup_path = Some(backup);
        }
    }

    fs::write(path, &result.output)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(report)
}

/// Write `content` to `backup` unless it already exists.
///
/// Returns `true` if the backup was created by this call.
fn write_backup_once(backup: &Path, content: &[u8]) -> Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(backup) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to create backup {}", backup.display()));
        }
    };

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .with_context(|| format!("Failed to write backup {}", backup.display()))?;

    Ok(true)
}

/// Totals across all processed files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessStats {
    /// Files attempted, including those that failed.
    pub files_total: usize,
    /// Files with at least one changed line.
    pub files_changed: usize,
    /// Files that could not be processed.
    pub files_failed: usize,
    pub lines_changed: usize,
}

impl ProcessStats {
    pub fn record(&mut self, report: &FileReport) {
        self.files_total += 1;
        if report.changed_lines() > 0 {
            self.files_changed += 1;
            self.lines_changed += report.changed_lines();
        }
    }

    pub fn record_failure(&mut self) {
        self.files_total += 1;
        self.files_failed += 1;
    }
}
