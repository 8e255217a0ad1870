use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

/// Without a base version every differing region is a conflict; the block is
/// written with two-sided markers (no `|||||||` section).
#[rstest]
fn merge_two_way_conflict_markers(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(
        dir.path().join("local.txt"),
        "a\nb\nc\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("remote.txt"),
        "a\nY\nc\n".to_string(),
    ));

    run_trimerge_command(
        dir.path(),
        &["merge", "local.txt", "remote.txt", "-o", "out"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("merged with conflicts"));

    let local = dir.path().join("local.txt").canonicalize()?;
    let remote = dir.path().join("remote.txt").canonicalize()?;
    let expected = format!(
        "a\n<<<<<<< {}\nb\n=======\nY\n>>>>>>> {}\nc\n",
        local.display(),
        remote.display(),
    );

    let merged = fs::read_to_string(dir.path().join("out").join("local.txt"))?;
    assert_eq!(merged, expected);

    Ok(())
}
