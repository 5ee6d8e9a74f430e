use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, info, warn};

use crate::filesystem::access::{is_readable, is_writable};
use crate::filesystem::tree::{DirTreeError, ExclusionSet, walk_paths};

/// Tells whether `dir` and every directory below it are readable and
/// writable by the caller. With `check_only_directories` unset, files are
/// checked too.
///
/// Stops at the first item that fails the check. With `ignore_errors`, a
/// missing `dir` gives `false` instead of an error.
pub fn is_writable_recursive(
    dir: &str,
    check_only_directories: bool,
    ignore_errors: bool,
) -> Result<bool, DirTreeError> {
    let (directories, files) = walk_paths(dir, &ExclusionSet::none(), ignore_errors)?;
    if directories.is_empty() {
        return Ok(false);
    }

    let mut items = directories;
    if !check_only_directories {
        items.extend(files);
    }
    let dir = PathBuf::from(dir);
    if !items.contains(&dir) {
        items.push(dir);
    }

    let denied = items
        .iter()
        .find(|item| !(is_readable(item) && is_writable(item)));
    match denied {
        Some(item) => {
            debug!("`{}` is not both readable and writable", item.display());
            Ok(false)
        }
        None => Ok(true),
    }
}

/// Removes every file below `dir`, leaving the directories in place.
///
/// With `ignore_errors`, a missing `dir` or a failed removal gives `false`
/// instead of an error.
pub fn unlink_recursive(
    dir: &str,
    exclusions: &ExclusionSet,
    ignore_errors: bool,
) -> Result<bool, UnlinkError> {
    match remove_files(dir, exclusions) {
        Ok(removed) => {
            info!("Removed {} files below `{}`", removed, dir);
            Ok(true)
        }
        Err(
            err @ (UnlinkError::WalkError {
                source: DirTreeError::DirectoryNotFoundError { .. },
            }
            | UnlinkError::RemoveFileError { .. }),
        ) if ignore_errors => {
            warn!("Ignoring failure while removing files: {}", err);
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

fn remove_files(dir: &str, exclusions: &ExclusionSet) -> Result<usize, UnlinkError> {
    let (_, files) = walk_paths(dir, exclusions, false).context(WalkSnafu)?;

    for file in &files {
        fs::remove_file(file).context(RemoveFileSnafu { path: file })?;
    }

    Ok(files.len())
}

/// Removes `dir` together with everything below it.
///
/// Returns `false` without touching anything if `dir` is not an existing
/// directory.
pub fn rmdir_recursive(dir: &str) -> Result<bool, RemoveDirError> {
    let path = Path::new(dir);
    if !path.is_dir() {
        debug!("`{}` is not a directory, nothing to remove", dir);
        return Ok(false);
    }

    fs::remove_dir_all(path).context(RemoveDirSnafu { path: dir })?;
    info!("Removed directory `{}`", dir);
    Ok(true)
}

#[derive(Debug, Snafu)]
pub enum UnlinkError {
    #[snafu(display("Failed to list the files to remove"))]
    WalkError { source: DirTreeError },
    #[snafu(display("Failed to remove file `{}`", path.display()))]
    RemoveFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Snafu)]
#[snafu(display("Failed to remove directory `{}`", path))]
pub struct RemoveDirError {
    path: String,
    source: std::io::Error,
}
