use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use treetools::filesystem::{DEFAULT_TMP_PREFIX, ExclusionSet};

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Walk directory trees and manipulate files safely")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,

    /// Root path used by `rtr`, overrides the `ROOT` environment variable
    #[clap(long, global = true)]
    pub root: Option<PathBuf>,

    /// Directory for temporary files, overrides the `TMP` environment variable
    #[clap(long, global = true)]
    pub tmp_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExclusionArgs {
    /// Skip entries whose name starts with a dot
    #[clap(long)]
    pub hidden: bool,

    /// Name to exclude, can be repeated
    #[clap(long, short)]
    pub exclude: Vec<String>,
}

impl From<ExclusionArgs> for ExclusionSet {
    fn from(args: ExclusionArgs) -> Self {
        ExclusionSet::from_names(args.exclude).with_hidden(args.hidden)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the directories and files below a directory
    Tree {
        dir: String,
        #[command(flatten)]
        exclusions: ExclusionArgs,
        #[clap(long)]
        ignore_errors: bool,
    },
    /// Tell whether a directory and everything below it is writable
    Writable {
        dir: String,
        /// Check files as well as directories
        #[clap(long)]
        files: bool,
        #[clap(long)]
        ignore_errors: bool,
    },
    /// Remove every file below a directory, keeping the directories
    Unlink {
        dir: String,
        #[command(flatten)]
        exclusions: ExclusionArgs,
        #[clap(long)]
        ignore_errors: bool,
    },
    /// Remove a directory and everything below it
    Rmdir { dir: String },
    /// Write a file, creating its parent directories
    Create {
        file: String,
        #[clap(long, default_value = "")]
        data: String,
        /// Octal mode for created directories
        #[clap(long, default_value = "777", value_parser = parse_octal_mode)]
        mode: u32,
        #[clap(long)]
        ignore_errors: bool,
    },
    /// Write a file with a unique name
    Tmp {
        #[clap(long, default_value = "")]
        data: String,
        #[clap(long)]
        dir: Option<PathBuf>,
        #[clap(long, default_value = DEFAULT_TMP_PREFIX)]
        prefix: String,
    },
    /// Print the extension of a filename or url
    Ext { filename: String },
    /// Print a path with canonical separators
    Normalize { path: String },
    /// Print the path leading from `start` to `end`
    Relative { end: String, start: String },
    /// Print `end` made absolute against `start`
    Absolute { end: String, start: String },
    /// Print a path relative to the root path
    Rtr { path: String },
    /// Evaluate a named check against a path
    Check { name: String, path: PathBuf },
}

fn parse_octal_mode(value: &str) -> Result<u32, std::num::ParseIntError> {
    u32::from_str_radix(value.trim_start_matches("0o"), 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use treetools::filesystem::DEFAULT_DIRECTORY_MODE;

    #[test]
    fn parses_tree_with_exclusions() {
        let cli = Cli::parse_from([
            "treetools", "tree", "/srv", "--hidden", "-e", "target", "-e", "vendor",
        ]);

        let Command::Tree {
            dir,
            exclusions,
            ignore_errors,
        } = cli.command
        else {
            panic!("Expected the tree command");
        };
        assert_eq!(dir, "/srv");
        assert!(!ignore_errors);

        let exclusions = ExclusionSet::from(exclusions);
        assert!(exclusions.skips_hidden());
        assert_eq!(exclusions.names().collect::<Vec<_>>(), vec!["target", "vendor"]);
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let cli = Cli::parse_from(["treetools", "rtr", "/srv/app/x", "--root", "/srv/app"]);
        assert_eq!(cli.root, Some(PathBuf::from("/srv/app")));
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[rstest]
    #[case("755", 0o755)]
    #[case("0o700", 0o700)]
    #[case("0777", 0o777)]
    fn parses_octal_modes(#[case] value: &str, #[case] expected: u32) {
        assert_eq!(parse_octal_mode(value).unwrap(), expected);
    }

    #[test]
    fn create_defaults_to_open_mode() {
        let cli = Cli::parse_from(["treetools", "create", "out/file.txt"]);
        assert!(matches!(
            cli.command,
            Command::Create { mode, ignore_errors: false, .. } if mode == DEFAULT_DIRECTORY_MODE
        ));
    }

    #[test]
    fn rejects_invalid_modes() {
        let result = Cli::try_parse_from(["treetools", "create", "f", "--mode", "999"]);
        assert!(result.is_err());
    }
}
