use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Options for discovering files under a directory.
#[derive(Debug, Clone)]
pub struct ScanOptions<'a> {
    /// Extensions to match, without the leading dot (case-insensitive).
    pub extensions: &'a [String],
    pub ignore_patterns: &'a [String],
    /// Files ending with this suffix are backups and never scanned.
    pub backup_suffix: &'a str,
    pub verbose: bool,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Discovered files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively collect files under `base_dir` whose extension matches.
///
/// Fails only if `base_dir` itself cannot be read; entries that cannot be
/// accessed further down are counted and skipped.
pub fn scan_files(base_dir: &Path, options: &ScanOptions<'_>) -> Result<ScanResult> {
    std::fs::read_dir(base_dir)
        .with_context(|| format!("Cannot read directory: {}", base_dir.display()))?;

    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in options.ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if options.verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let walker = WalkDir::new(base_dir)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git");

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if options.verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if path_str.ends_with(options.backup_suffix) {
            continue;
        }

        // `path.is_file()` follows symlinks; walkdir's file type does not.
        if path.is_file() && has_extension(path, options.extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

/// Case-insensitive extension check.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// Why an explicitly supplied path was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    Directory,
}

/// Explicit paths split into files to process and paths to skip.
#[derive(Debug, Default)]
pub struct ResolvedPaths {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    /// Files kept despite not matching a configured extension.
    pub unmatched_extension: Vec<PathBuf>,
}

/// Normalize explicitly supplied paths, keeping only existing files.
pub fn resolve_explicit_paths(paths: &[PathBuf], extensions: &[String]) -> ResolvedPaths {
    let mut resolved = ResolvedPaths::default();

    for original in paths {
        let path = normalize_path(original);
        if !path.exists() {
            resolved.skipped.push((original.clone(), SkipReason::NotFound));
        } else if path.is_dir() {
            resolved.skipped.push((original.clone(), SkipReason::Directory));
        } else {
            if !has_extension(&path, extensions) {
                resolved.unmatched_extension.push(path.clone());
            }
            resolved.files.push(path);
        }
    }

    resolved
}

/// Lexically normalize a path: drop `.` components and fold `..` where possible.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
