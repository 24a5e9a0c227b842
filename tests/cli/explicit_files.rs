use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_only_explicit_files_are_processed() -> Result<()> {
    let test = CliTest::with_file("a.php", "include('a.php');\n")?;
    test.write_file("b.php", "include('b.php');\n")?;

    let output = test.run(&["a.php"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "a.php: changed 1 line(s)\n\
         \n\
         Done: changed 1 line(s) across 1/1 file(s).\n\
         Backups created as *.bak (only for files that actually changed).\n"
    );
    assert_eq!(test.read_file("a.php")?, "include 'a.php';\n");
    assert_eq!(test.read_file("b.php")?, "include('b.php');\n");
    Ok(())
}

#[test]
fn test_explicit_paths_are_normalized() -> Result<()> {
    let test = CliTest::with_file("lib/a.php", "include('a.php');\n")?;

    let output = test.run(&["./lib/../lib/a.php"])?;

    assert!(stdout(&output).starts_with("lib/a.php: changed 1 line(s)\n"));
    Ok(())
}

#[test]
fn test_missing_and_directory_paths_are_skipped() -> Result<()> {
    let test = CliTest::with_file("lib/a.php", "include('a.php');\n")?;

    let output = test.run(&["missing.php", "lib", "lib/a.php"])?;

    assert!(output.status.success());
    assert_eq!(
        stderr(&output),
        "warning: path not found, skipped: missing.php\n\
         warning: directory provided, skipped: lib\n"
    );
    assert!(stdout(&output).contains("Done: changed 1 line(s) across 1/1 file(s)."));
    Ok(())
}

#[test]
fn test_non_php_file_is_processed_with_note() -> Result<()> {
    let test = CliTest::with_file("template.inc", "<?php require('x.php'); ?>\nrequire('y.php');\n")?;

    let output = test.run(&["template.inc"])?;

    assert_eq!(
        stderr(&output),
        "note: processing non-.php file because it was explicitly provided: template.inc\n"
    );
    assert_eq!(
        test.read_file("template.inc")?,
        "<?php require('x.php'); ?>\nrequire 'y.php';\n"
    );
    assert!(test.exists("template.inc.bak"));
    Ok(())
}

#[test]
fn test_all_explicit_paths_missing() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--dry-run", "nope.php"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("DRY RUN: would change 0 line(s) across 0/0 file(s)."));
    assert!(!test.root().join("nope.php").exists());
    Ok(())
}
