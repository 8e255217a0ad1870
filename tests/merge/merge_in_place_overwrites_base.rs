use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

/// Without an output directory the three-way merge replaces the base file,
/// going through a temporary file that must not survive the merge.
#[rstest]
fn merge_in_place_overwrites_base(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(
        dir.path().join("base.txt"),
        "a\nb\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("local.txt"),
        "a\nb\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("remote.txt"),
        "a\nB\n".to_string(),
    ));

    run_trimerge_command(dir.path(), &["merge3", "local.txt", "base.txt", "remote.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merged successfully"));

    let merged = fs::read_to_string(dir.path().join("base.txt"))?;
    assert_eq!(merged, "a\nB\n");
    assert!(!dir.path().join("base.txt.temp").exists());

    Ok(())
}
