use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

/// A two-way merge with `--default-action apply-remote` takes the remote
/// side of every differing region.
#[rstest]
fn merge_two_way_apply_remote(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(
        dir.path().join("local.txt"),
        "a\nb\nc\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("remote.txt"),
        "a\nY\nc\nd\n".to_string(),
    ));

    run_trimerge_command(
        dir.path(),
        &[
            "merge",
            "local.txt",
            "remote.txt",
            "-o",
            "out",
            "--default-action",
            "apply-remote",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("merged successfully"));

    let merged = fs::read_to_string(dir.path().join("out").join("local.txt"))?;
    assert_eq!(merged, "a\nY\nc\nd\n");

    Ok(())
}
