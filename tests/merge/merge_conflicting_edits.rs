use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

/// Both sides rewrote the same base line, so the merge keeps both versions
/// inside a single conflict block and reports the conflict.
#[rstest]
fn merge_conflicting_edits(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
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
        &["merge3", "local.txt", "base.txt", "remote.txt", "-o", "out"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("merged with conflicts"));

    let local = dir.path().join("local.txt").canonicalize()?;
    let base = dir.path().join("base.txt").canonicalize()?;
    let remote = dir.path().join("remote.txt").canonicalize()?;
    let expected = format!(
        "a\n<<<<<<< {}\nX\n||||||| {}\nb\n=======\nY\n>>>>>>> {}\nc\n",
        local.display(),
        base.display(),
        remote.display(),
    );

    let merged = fs::read_to_string(dir.path().join("out").join("base.txt"))?;
    assert_eq!(merged, expected);

    Ok(())
}
