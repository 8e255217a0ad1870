use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

/// A section that consumes the last line of a file without a trailing
/// newline is followed by the `\ No newline at end of file` marker.
#[rstest]
fn diff_marks_missing_trailing_newline(workspace_dir: TempDir) {
    let dir = workspace_dir;
    write_file(FileSpec::new(
        dir.path().join("local.txt"),
        "a\nb".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("remote.txt"),
        "a\nc\n".to_string(),
    ));

    run_trimerge_command(dir.path(), &["diff", "local.txt", "remote.txt"])
        .assert()
        .success()
        .stdout("2c2\n< b\n\\ No newline at end of file\n---\n> c\n".to_string());
}
