use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{args::Arguments, exit_status::ExitStatus, report};
use crate::{
    config::{Config, ConfigLoadResult, load_config},
    core::{
        ProcessOptions, ProcessStats,
        file_scanner::{ScanOptions, resolve_explicit_paths, scan_files},
        process_file,
    },
};

/// Run a rewrite over the selected files.
///
/// # Returns
/// - `Ok(ExitStatus::Success)` when every file was processed
/// - `Ok(ExitStatus::Failure)` when some files failed with I/O errors
/// - `Err` when the file set could not be determined (config error,
///   unreadable working directory)
pub fn run(args: &Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Cannot determine current directory")?;
    let ConfigLoadResult { config, path } = load_config(&cwd)?;
    if args.verbose
        && let Some(path) = &path
    {
        report::print_config_path(path);
    }

    let targets = collect_targets(args, &config)?;

    let options = ProcessOptions {
        dry_run: args.dry_run,
        backup_suffix: (!args.no_backup).then(|| config.backup_suffix.clone()),
    };

    let mut stats = ProcessStats::default();
    for path in &targets {
        match process_file(path, &options) {
            Ok(file_report) => {
                stats.record(&file_report);
                report::print_file_report(&file_report);
                if args.verbose && options.dry_run {
                    report::print_preview(&file_report);
                }
                if args.verbose
                    && let Some(backup) = &file_report.backup_path
                {
                    report::print_backup_created(backup);
                }
            }
            Err(err) => {
                stats.record_failure();
                report::print_file_error(path, &err);
            }
        }
    }

    report::print_summary(&stats, &options);
    report::print_failure_warning(stats.files_failed);

    if stats.files_failed > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Explicit files when given, otherwise every matching file under `.`.
fn collect_targets(args: &Arguments, config: &Config) -> Result<Vec<PathBuf>> {
    if !args.files.is_empty() {
        let resolved = resolve_explicit_paths(&args.files, &config.extensions);
        for (path, reason) in &resolved.skipped {
            report::print_skipped_path(path, *reason);
        }
        for path in &resolved.unmatched_extension {
            report::print_unmatched_extension(path, &config.extensions);
        }
        return Ok(resolved.files);
    }

    let options = ScanOptions {
        extensions: &config.extensions,
        ignore_patterns: &config.ignores,
        backup_suffix: &config.backup_suffix,
        verbose: args.verbose,
    };
    let scan = scan_files(Path::new("."), &options)?;
    report::print_scan_warning(scan.skipped_count, args.verbose);

    Ok(scan.files)
}
