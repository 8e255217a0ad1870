use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

/// When all three files disagree the hunk opens with a bare `===` and all
/// three sections print their content.
#[rstest]
fn diff3_conflict_hunk(workspace_dir: TempDir) {
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
        &["diff3", "local.txt", "base.txt", "remote.txt"],
    )
    .assert()
    .success()
    .stdout("===\n1:2c\n  X\n2:2c\n  b\n3:2c\n  Y\n".to_string());
}
