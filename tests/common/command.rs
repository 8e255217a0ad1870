use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_trimerge_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("trimerge").expect("Failed to find trimerge binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
