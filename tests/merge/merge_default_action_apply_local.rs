use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

/// With `--default-action apply-local` a conflicting chunk resolves to the
/// local side instead of being marked.
#[rstest]
fn merge_default_action_apply_local(
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
            "apply-local",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("merged successfully"));

    let merged = fs::read_to_string(dir.path().join("out").join("base.txt"))?;
    assert_eq!(merged, "a\nX\nc\n");

    Ok(())
}
