use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

/// When one side of the pair is missing there is nothing to compare: the
/// surviving file is copied to the destination as-is.
#[rstest]
fn merge_missing_remote_copies_local(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(
        dir.path().join("local.txt"),
        "a\nb\n".to_string(),
    ));

    run_trimerge_command(
        dir.path(),
        &["merge", "local.txt", "remote.txt", "-o", "out"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("merged successfully"));

    let merged = fs::read_to_string(dir.path().join("out").join("local.txt"))?;
    assert_eq!(merged, "a\nb\n");

    Ok(())
}
