use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, generated_lines, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn diff_identical_files_prints_nothing(workspace_dir: TempDir) {
    let dir = workspace_dir;
    let content = generated_lines(20);
    write_file(FileSpec::new(dir.path().join("local.txt"), content.clone()));
    write_file(FileSpec::new(dir.path().join("remote.txt"), content));

    run_trimerge_command(dir.path(), &["diff", "local.txt", "remote.txt"])
        .assert()
        .success()
        .stdout("".to_string());
}
