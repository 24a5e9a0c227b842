use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const INDEX_PHP: &str = r#"<?php
include('header.php');
  require_once ( "lib/db.php" ) ; // database
if ($debug) include('debug.php');
include 'already.php';
$url = 'http://example.com'; include('x.php');
/*
include('commented.php');
*/
Require('http://cdn/x.php'); ?>
"#;

const INDEX_PHP_REWRITTEN: &str = r#"<?php
include 'header.php';
  require_once "lib/db.php"; // database
if ($debug) include('debug.php');
include 'already.php';
$url = 'http://example.com'; include('x.php');
/*
include('commented.php');
*/
Require 'http://cdn/x.php'; ?>
"#;

#[test]
fn test_rewrite_discovered_files() -> Result<()> {
    let test = CliTest::with_file("index.php", INDEX_PHP)?;
    test.write_file("lib/Legacy.PHP", "<?php\ninclude_once('a.php'); # a\n")?;
    test.write_file("notes.txt", "include('not-php.php');\n")?;

    let output = test.run(&[])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    ./index.php: changed 3 line(s)
    ./lib/Legacy.PHP: changed 1 line(s)

    Done: changed 4 line(s) across 2/2 file(s).
    Backups created as *.bak (only for files that actually changed).
    ");

    assert_eq!(test.read_file("index.php")?, INDEX_PHP_REWRITTEN);
    assert_eq!(
        test.read_file("lib/Legacy.PHP")?,
        "<?php\ninclude_once 'a.php'; # a\n"
    );
    assert_eq!(test.read_file("notes.txt")?, "include('not-php.php');\n");

    assert_eq!(test.read_file("index.php.bak")?, INDEX_PHP);
    assert!(test.exists("lib/Legacy.PHP.bak"));
    assert!(!test.exists("notes.txt.bak"));
    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("index.php", INDEX_PHP)?;

    let output = test.run(&["--dry-run"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    ./index.php: changed 3 line(s)

    DRY RUN: would change 3 line(s) across 1/1 file(s).
    ");
    assert_eq!(test.read_file("index.php")?, INDEX_PHP);
    assert!(!test.exists("index.php.bak"));
    Ok(())
}

#[test]
fn test_dry_run_counts_match_real_run() -> Result<()> {
    let test = CliTest::with_file("a.php", INDEX_PHP)?;
    test.write_file("b.php", "<?php\nrequire('b.php');\n")?;
    test.write_file("c.php", "<?php\necho 'nothing';\n")?;

    let dry = stdout(&test.run(&["--dry-run"])?);
    let real = stdout(&test.run(&[])?);

    assert!(dry.contains("would change 4 line(s) across 2/3 file(s)."));
    assert!(real.contains("changed 4 line(s) across 2/3 file(s)."));
    Ok(())
}

#[test]
fn test_verbose_dry_run_previews_changes() -> Result<()> {
    let test = CliTest::with_file("a.php", "<?php\n\ninclude('a.php'); // a\n")?;

    let output = test.run(&["--dry-run", "-v"])?;

    assert_snapshot!(stdout(&output), @r"
    ./a.php: changed 1 line(s)
      3 - include('a.php'); // a
      3 + include 'a.php'; // a

    DRY RUN: would change 1 line(s) across 1/1 file(s).
    ");
    Ok(())
}

#[test]
fn test_verbose_run_reports_new_backups() -> Result<()> {
    let test = CliTest::with_file("a.php", "include('a.php');\n")?;

    let output = test.run(&["-v", "a.php"])?;
    assert_eq!(stderr(&output), "note: backup written to a.php.bak\n");

    test.write_file("a.php", "require('b.php');\n")?;
    let output = test.run(&["-v", "a.php"])?;
    assert_eq!(stderr(&output), "");
    Ok(())
}

#[test]
fn test_no_backup() -> Result<()> {
    let test = CliTest::with_file("a.php", "include('a.php');\n")?;

    let output = test.run(&["--no-backup"])?;

    assert!(output.status.success());
    assert!(!stdout(&output).contains("Backups created"));
    assert_eq!(test.read_file("a.php")?, "include 'a.php';\n");
    assert!(!test.exists("a.php.bak"));
    Ok(())
}

#[test]
fn test_second_run_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("index.php", INDEX_PHP)?;

    test.run(&[])?;
    let output = test.run(&[])?;

    assert!(stdout(&output).contains("Done: changed 0 line(s) across 0/1 file(s)."));
    assert_eq!(test.read_file("index.php")?, INDEX_PHP_REWRITTEN);
    Ok(())
}

#[test]
fn test_backup_is_never_overwritten() -> Result<()> {
    let original = "<?php\ninclude('a.php');\n";
    let test = CliTest::with_file("a.php", original)?;

    test.run(&[])?;
    test.write_file("a.php", "<?php\ninclude 'a.php';\nrequire('b.php');\n")?;
    let output = test.run(&[])?;

    assert!(stdout(&output).contains("changed 1 line(s) across 1/1 file(s)."));
    assert_eq!(
        test.read_file("a.php")?,
        "<?php\ninclude 'a.php';\nrequire 'b.php';\n"
    );
    assert_eq!(test.read_file("a.php.bak")?, original);
    Ok(())
}

#[test]
fn test_backup_files_are_not_rewritten() -> Result<()> {
    let test = CliTest::with_file("a.php", "include('a.php');\n")?;
    test.write_file("b.php.bak", "include('b.php');\n")?;

    test.run(&[])?;

    assert_eq!(test.read_file("b.php.bak")?, "include('b.php');\n");
    Ok(())
}

#[test]
fn test_line_endings_are_preserved() -> Result<()> {
    let test = CliTest::with_file(
        "a.php",
        "<?php\r\ninclude('a.php');\r\n  require('b.php'); // b\r\ninclude('c.php');",
    )?;

    test.run(&["--no-backup"])?;

    assert_eq!(
        test.read_file("a.php")?,
        "<?php\r\ninclude 'a.php';\r\n  require 'b.php'; // b\r\ninclude 'c.php';"
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_io_error_skips_file_and_continues() -> Result<()> {
    let test = CliTest::with_file("a.php", "include('a.php');\n")?;
    test.write_file("b.php", "include 'b.php';\n")?;
    // The backup for a.php cannot be created because a.php is not a directory.
    test.write_file(".incfixrc.json", r#"{ "backupSuffix": "/x.bak" }"#)?;

    let output = test.run(&["a.php", "b.php"])?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error: a.php: Failed to create backup a.php/x.bak"));
    assert!(err.contains("warning: 1 file(s) could not be processed"));
    assert!(stdout(&output).contains("Done: changed 0 line(s) across 0/2 file(s)."));
    assert_eq!(test.read_file("a.php")?, "include('a.php');\n");
    Ok(())
}
