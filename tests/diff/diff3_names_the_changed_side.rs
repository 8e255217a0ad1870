use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

/// A hunk only remote touched opens with `===3`; the unchanged local
/// section prints its range header but no content lines.
#[rstest]
fn diff3_names_the_changed_side(workspace_dir: TempDir) {
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

    run_trimerge_command(
        dir.path(),
        &["diff3", "local.txt", "base.txt", "remote.txt"],
    )
    .assert()
    .success()
    .stdout("===3\n1:2c\n2:2c\n  b\n3:2c\n  B\n".to_string());
}
