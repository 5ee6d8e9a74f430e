use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use treetools::checks::Check;
use treetools::config::FsConfig;
use treetools::filesystem::{
    self, CreateFileError, DirTreeError, RemoveDirError, TmpFileError, UnlinkError,
};
use treetools::path::{self, PathError};

use crate::application::RuntimeConfig;
use crate::application::output::Output;
use crate::cli::Command;

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Running with configuration: {:?}", app_config);

        let output = Self::execute(app_config.command, &app_config.fs_config)?;
        print!("{output}");

        Ok(())
    }

    fn execute(command: Command, fs_config: &FsConfig) -> Result<Output, ApplicationError> {
        let output = match command {
            Command::Tree {
                dir,
                exclusions,
                ignore_errors,
            } => Output::Tree(
                filesystem::walk(&dir, &exclusions.into(), ignore_errors).context(TreeSnafu)?,
            ),
            Command::Writable {
                dir,
                files,
                ignore_errors,
            } => Output::Flag(
                filesystem::is_writable_recursive(&dir, !files, ignore_errors)
                    .context(TreeSnafu)?,
            ),
            Command::Unlink {
                dir,
                exclusions,
                ignore_errors,
            } => Output::Flag(
                filesystem::unlink_recursive(&dir, &exclusions.into(), ignore_errors)
                    .context(UnlinkSnafu)?,
            ),
            Command::Rmdir { dir } => {
                Output::Flag(filesystem::rmdir_recursive(&dir).context(RemoveDirSnafu)?)
            }
            Command::Create {
                file,
                data,
                mode,
                ignore_errors,
            } => Output::Path(
                filesystem::create_file(&file, data, mode, ignore_errors)
                    .context(CreateFileSnafu)?,
            ),
            Command::Tmp { data, dir, prefix } => Output::Path(
                filesystem::create_tmp_file(data, dir.as_deref(), Some(prefix.as_str()), fs_config)
                    .context(TmpFileSnafu)?,
            ),
            Command::Ext { filename } => Output::Extension(path::get_extension(&filename)),
            Command::Normalize { path } => Output::Path(path::normalize(&path)),
            Command::Relative { end, start } => {
                Output::Path(path::make_relative(&end, &start).context(PathSnafu)?)
            }
            Command::Absolute { end, start } => {
                Output::Path(path::make_absolute(&end, &start).context(PathSnafu)?)
            }
            Command::Rtr { path } => Output::Path(path::rtr(&path, fs_config).context(PathSnafu)?),
            Command::Check { name, path } => {
                let check = Check::from_name(&name).context(UnknownCheckSnafu {
                    name: name.clone(),
                    expected: Check::all()
                        .map(|check| check.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                })?;
                Output::Flag(check.evaluate(&path))
            }
        };

        Ok(output)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to walk the directory tree"))]
    TreeError { source: DirTreeError },
    #[snafu(display("Failed to remove files"))]
    UnlinkError { source: UnlinkError },
    #[snafu(display("Failed to remove the directory"))]
    RemoveDirError { source: RemoveDirError },
    #[snafu(display("Failed to create the file"))]
    CreateFileError { source: CreateFileError },
    #[snafu(display("Failed to create a temporary file"))]
    TmpFileError { source: TmpFileError },
    #[snafu(display("Invalid path"))]
    PathError { source: PathError },
    #[snafu(display("Unknown check '{}', expected one of: {}", name, expected))]
    UnknownCheckError { name: String, expected: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use treetools::ext::PathStringExt;

    use crate::cli::ExclusionArgs;

    #[test]
    fn tree_command_walks_the_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".env"), "").unwrap();
        fs::write(temp_dir.path().join("main.rs"), "").unwrap();
        let dir = temp_dir.path().to_path_string();

        let output = Application::execute(
            Command::Tree {
                dir: dir.clone(),
                exclusions: ExclusionArgs {
                    hidden: true,
                    exclude: vec![],
                },
                ignore_errors: false,
            },
            &FsConfig::new(),
        )
        .unwrap();

        let Output::Tree(tree) = output else {
            panic!("Expected a tree");
        };
        assert_eq!(tree.directories, vec![dir]);
        assert_eq!(tree.files.len(), 1);
        assert!(tree.files[0].ends_with("main.rs"));
    }

    #[test]
    fn missing_directory_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("missing").to_path_string();

        let result = Application::execute(
            Command::Tree {
                dir,
                exclusions: ExclusionArgs::default(),
                ignore_errors: false,
            },
            &FsConfig::new(),
        );

        assert!(matches!(
            result,
            Err(ApplicationError::TreeError {
                source: DirTreeError::DirectoryNotFoundError { .. }
            })
        ));
    }

    #[test]
    fn tmp_command_uses_configured_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = FsConfig::new().with_tmp_dir(temp_dir.path());

        let output = Application::execute(
            Command::Tmp {
                data: "payload".into(),
                dir: None,
                prefix: "job".into(),
            },
            &config,
        )
        .unwrap();

        let Output::Path(created) = output else {
            panic!("Expected a path");
        };
        assert!(created.starts_with(&temp_dir.path().to_path_string()));
        assert_eq!(fs::read_to_string(created).unwrap(), "payload");
    }

    #[test]
    fn unknown_check_lists_the_known_ones() {
        let result = Application::execute(
            Command::Check {
                name: "shiny".into(),
                path: ".".into(),
            },
            &FsConfig::new(),
        );

        let err = result.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("shiny"));
        assert!(message.contains("writable_recursive"));
    }

    #[test]
    fn path_commands_print_paths() {
        let config = FsConfig::new().with_root("/srv/app");

        let output = Application::execute(
            Command::Rtr {
                path: "/srv/app/logs/".into(),
            },
            &config,
        )
        .unwrap();
        assert_eq!(output, Output::Path("logs".into()));

        let result = Application::execute(
            Command::Absolute {
                end: "x".into(),
                start: "relative".into(),
            },
            &config,
        );
        assert!(matches!(
            result,
            Err(ApplicationError::PathError {
                source: PathError::NotAbsoluteError { .. }
            })
        ));
    }
}
