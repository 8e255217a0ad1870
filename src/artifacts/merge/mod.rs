//! Merge rendering
//!
//! This module materializes diffs into merged files:
//!
//! - `resolution`: maps chunk state + configured default to a concrete action
//! - `two_way`: streams local/remote against a two-way diff
//! - `three_way`: streams base/local/remote against three-way chunks
//!
//! Both renderers write through a temporary file when the destination
//! already exists and replace it only after the whole merge succeeded, so a
//! failed render never leaves a partially written destination behind.

pub mod resolution;
pub mod three_way;
pub mod two_way;

use crate::artifacts::node::NodeStatus;
use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// `<dest>.temp`, next to the destination.
fn temp_path(dest: &Path) -> PathBuf {
    let mut path = dest.as_os_str().to_os_string();
    path.push(".temp");
    path.into()
}

/// Run `write` against the destination, going through `<dest>.temp` plus a
/// delete-and-rename when the destination already exists. On any failure the
/// partial output file is removed and the existing destination is untouched.
fn write_destination<F>(dest: &Path, write: F) -> anyhow::Result<NodeStatus>
where
    F: FnOnce(&mut dyn Write) -> anyhow::Result<NodeStatus>,
{
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }

    let is_temporary = dest.exists();
    let write_path = if is_temporary {
        temp_path(dest)
    } else {
        dest.to_path_buf()
    };

    let result = (|| {
        let file = File::create(&write_path)
            .with_context(|| format!("failed to create output file: {}", write_path.display()))?;
        let mut writer = BufWriter::new(file);

        let status = write(&mut writer)?;
        writer.flush()?;

        Ok(status)
    })();

    match result {
        Ok(status) => {
            if is_temporary {
                let replace = fs::remove_file(dest)
                    .and_then(|_| fs::rename(&write_path, dest))
                    .with_context(|| {
                        format!("failed to replace destination: {}", dest.display())
                    });

                if let Err(error) = replace {
                    let _ = fs::remove_file(&write_path);
                    return Err(error);
                }
            }

            Ok(status)
        }
        Err(error) => {
            let _ = fs::remove_file(&write_path);
            Err(error)
        }
    }
}

/// Merged files land in the output directory under their own file name, or
/// replace `in_place` when no output directory is configured.
fn destination_path(
    output_dir: Option<&Path>,
    in_place: &Path,
) -> anyhow::Result<PathBuf> {
    match output_dir {
        Some(dir) => {
            let name = in_place
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("path has no file name: {}", in_place.display()))?;
            Ok(dir.join(name))
        }
        None => Ok(in_place.to_path_buf()),
    }
}
