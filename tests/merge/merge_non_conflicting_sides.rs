use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

/// Local changed the first line and remote the last one, so both edits land
/// in the result without any conflict markers.
#[rstest]
fn merge_non_conflicting_sides(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(
        dir.path().join("base.txt"),
        "a\nb\nc\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("local.txt"),
        "A\nb\nc\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("remote.txt"),
        "a\nb\nC\n".to_string(),
    ));

    run_trimerge_command(
        dir.path(),
        &["merge3", "local.txt", "base.txt", "remote.txt", "-o", "out"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("merged successfully"));

    let merged = fs::read_to_string(dir.path().join("out").join("base.txt"))?;
    assert_eq!(merged, "A\nb\nC\n");

    Ok(())
}
