use std::env;
use std::fs::{self, DirBuilder};
use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, warn};

use crate::config::FsConfig;
use crate::ext::PathStringExt;

/// Mode for directories created on the way to a new file, before the umask
pub const DEFAULT_DIRECTORY_MODE: u32 = 0o777;
pub const DEFAULT_TMP_PREFIX: &str = "tmp";

/// Writes `data` to `filename`, creating missing parent directories with
/// `directory_mode` first. An existing file is overwritten.
///
/// Returns the filename. With `ignore_errors`, an I/O failure gives an empty
/// string instead of an error.
pub fn create_file(
    filename: &str,
    data: impl AsRef<[u8]>,
    directory_mode: u32,
    ignore_errors: bool,
) -> Result<String, CreateFileError> {
    match write_with_parents(Path::new(filename), data.as_ref(), directory_mode) {
        Ok(()) => {
            debug!("Created file `{}`", filename);
            Ok(filename.to_string())
        }
        Err(err) if ignore_errors => {
            warn!("Ignoring failure while creating a file: {}", err);
            Ok(String::new())
        }
        Err(err) => Err(err),
    }
}

/// Creates a file with a unique name and writes `data` to it.
///
/// The file goes to `directory` if given, otherwise to the configured
/// temporary directory, otherwise to the system one.
pub fn create_tmp_file(
    data: impl AsRef<[u8]>,
    directory: Option<&Path>,
    prefix: Option<&str>,
    config: &FsConfig,
) -> Result<String, TmpFileError> {
    let directory = directory
        .or_else(|| config.tmp_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(env::temp_dir);

    let filename = unique_filename(&directory, prefix.unwrap_or(DEFAULT_TMP_PREFIX))
        .context(NameGenerationSnafu {
            directory: directory.to_path_string(),
        })?;

    create_file(
        &filename.to_path_string(),
        data,
        DEFAULT_DIRECTORY_MODE,
        false,
    )
    .context(CreateSnafu)
}

fn unique_filename(directory: &Path, prefix: &str) -> io::Result<PathBuf> {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempfile_in(directory)?
        .into_temp_path()
        .keep()
        .map_err(io::Error::from)
}

fn write_with_parents(
    path: &Path,
    data: &[u8],
    directory_mode: u32,
) -> Result<(), CreateFileError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        directory_builder(directory_mode)
            .create(parent)
            .context(CreateParentSnafu {
                path: parent.to_path_string(),
            })?;
    }

    fs::write(path, data).context(WriteSnafu {
        path: path.to_path_string(),
    })
}

#[cfg_attr(not(unix), allow(unused_variables))]
fn directory_builder(mode: u32) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    std::os::unix::fs::DirBuilderExt::mode(&mut builder, mode);
    builder
}

#[derive(Debug, Snafu)]
pub enum CreateFileError {
    #[snafu(display("Failed to create directory `{}`", path))]
    CreateParentError { path: String, source: io::Error },
    #[snafu(display("Failed to write file `{}`", path))]
    WriteError { path: String, source: io::Error },
}

#[derive(Debug, Snafu)]
pub enum TmpFileError {
    #[snafu(display("It is not possible to create a temporary file in `{}`", directory))]
    NameGenerationError {
        directory: String,
        source: io::Error,
    },
    #[snafu(display("Failed to write the temporary file"))]
    CreateError { source: CreateFileError },
}
