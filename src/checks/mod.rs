//! Named predicates over paths.
//!
//! Each [`Check`] maps to a plain `fn(&Path) -> bool` through a fixed table,
//! so callers such as the `check` subcommand can look a predicate up by name.

use std::path::Path;

use derive_more::Display;

use crate::ext::PathStringExt;
use crate::filesystem::{is_executable, is_readable, is_writable, is_writable_recursive};
use crate::path::get_extension;

pub type Predicate = fn(&Path) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Check {
    #[display("dir")]
    Dir,
    #[display("file")]
    File,
    #[display("symlink")]
    Symlink,
    #[display("readable")]
    Readable,
    #[display("writable")]
    Writable,
    #[display("executable")]
    Executable,
    #[display("writable_recursive")]
    WritableRecursive,
}

const PREDICATES: &[(Check, Predicate)] = &[
    (Check::Dir, Path::is_dir),
    (Check::File, Path::is_file),
    (Check::Symlink, Path::is_symlink),
    (Check::Readable, is_readable),
    (Check::Writable, is_accessible),
    (Check::Executable, is_executable),
    (Check::WritableRecursive, is_accessible_tree),
];

fn is_accessible(path: &Path) -> bool {
    is_readable(path) && is_writable(path)
}

// Files included, missing directories count as not writable
fn is_accessible_tree(path: &Path) -> bool {
    is_writable_recursive(&path.to_path_string(), false, true).unwrap_or(false)
}

impl Check {
    pub fn all() -> impl Iterator<Item = Check> {
        PREDICATES.iter().map(|(check, _)| *check)
    }

    pub fn from_name(name: &str) -> Option<Check> {
        Self::all().find(|check| check.to_string() == name)
    }

    pub fn predicate(self) -> Option<Predicate> {
        PREDICATES
            .iter()
            .find(|(check, _)| *check == self)
            .map(|(_, predicate)| *predicate)
    }

    pub fn evaluate(self, path: &Path) -> bool {
        self.predicate().is_some_and(|predicate| predicate(path))
    }
}

/// Tells whether the extension of `filename` is one of `expected`.
pub fn has_extension<S: AsRef<str>>(expected: &[S], filename: &str) -> bool {
    get_extension(filename).is_some_and(|extension| {
        expected
            .iter()
            .any(|candidate| candidate.as_ref().to_lowercase() == extension)
    })
}
