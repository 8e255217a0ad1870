use crate::common::command::{run_trimerge_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

fn write_pair(dir: &TempDir, local: &str, remote: &str) {
    write_file(FileSpec::new(
        dir.path().join("local.txt"),
        local.to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("remote.txt"),
        remote.to_string(),
    ));
}

#[rstest]
fn changed_line_prints_both_sides(workspace_dir: TempDir) {
    let dir = workspace_dir;
    write_pair(&dir, "a\nb\nc\n", "a\nB\nc\n");

    run_trimerge_command(dir.path(), &["diff", "local.txt", "remote.txt"])
        .assert()
        .success()
        .stdout("2c2\n< b\n---\n> B\n".to_string());
}

#[rstest]
fn added_line_prints_the_remote_side(workspace_dir: TempDir) {
    let dir = workspace_dir;
    write_pair(&dir, "a\nc\n", "a\nb\nc\n");

    run_trimerge_command(dir.path(), &["diff", "local.txt", "remote.txt"])
        .assert()
        .success()
        .stdout("1a2\n> b\n".to_string());
}

#[rstest]
fn deleted_line_prints_the_local_side(workspace_dir: TempDir) {
    let dir = workspace_dir;
    write_pair(&dir, "a\nb\nc\n", "a\nc\n");

    run_trimerge_command(dir.path(), &["diff", "local.txt", "remote.txt"])
        .assert()
        .success()
        .stdout("2d1\n< b\n".to_string());
}
