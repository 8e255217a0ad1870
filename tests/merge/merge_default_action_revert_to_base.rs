use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

/// With `--default-action revert-to-base` every chunk resolves to the base
/// version, so the result is the base file again.
#[rstest]
fn merge_default_action_revert_to_base(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(
        dir.path().join("base.txt"),
        "a\nb\nc\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("local.txt"),
        "a\nX\nc\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("remote.txt"),
        "a\nY\nc\n".to_string(),
    ));

    run_trimerge_command(
        dir.path(),
        &[
            "merge3",
            "local.txt",
            "base.txt",
            "remote.txt",
            "-o",
            "out",
            "--default-action",
            "revert-to-base",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("merged successfully"));

    let merged = fs::read_to_string(dir.path().join("out").join("base.txt"))?;
    assert_eq!(merged, "a\nb\nc\n");

    Ok(())
}
