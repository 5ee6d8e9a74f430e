use std::fmt::{self, Display};

use colored::Colorize;
use treetools::filesystem::DirTree;

/// What a command prints on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Tree(DirTree),
    Flag(bool),
    Path(String),
    Extension(Option<String>),
}

impl Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Tree(tree) => {
                for directory in &tree.directories {
                    writeln!(f, "{}", directory.blue().bold())?;
                }
                for file in &tree.files {
                    writeln!(f, "{}", file)?;
                }
                Ok(())
            }
            Output::Flag(true) => writeln!(f, "{}", "true".green()),
            Output::Flag(false) => writeln!(f, "{}", "false".red()),
            Output::Path(path) => writeln!(f, "{}", path),
            Output::Extension(Some(extension)) => writeln!(f, "{}", extension),
            Output::Extension(None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_lists_directories_before_files() {
        let output = Output::Tree(DirTree {
            directories: vec!["/srv".into(), "/srv/a".into()],
            files: vec!["/srv/a/file.txt".into()],
        })
        .to_string();

        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("/srv"));
        assert!(lines[1].contains("/srv/a"));
        assert_eq!(lines[2], "/srv/a/file.txt");
    }

    #[test]
    fn missing_extension_prints_nothing() {
        assert_eq!(Output::Extension(None).to_string(), "");
        assert_eq!(
            Output::Extension(Some("tar.gz".into())).to_string(),
            "tar.gz\n"
        );
    }

    #[test]
    fn flags_print_their_value() {
        assert!(Output::Flag(true).to_string().contains("true"));
        assert!(Output::Flag(false).to_string().contains("false"));
    }
}
