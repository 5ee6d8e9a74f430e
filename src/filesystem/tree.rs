use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use regex::Regex;
use snafu::{ResultExt, Snafu};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::ext::PathStringExt;
use crate::path;

/// Passing this name as an exclusion asks for dot entries to be skipped
pub const HIDDEN_SENTINEL: &str = ".";

/// Names a walk leaves out.
///
/// Directory names are matched exactly and take their whole subtree with
/// them. File names are matched against an unanchored alternation of the
/// names, so a file is left out as soon as its name contains one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    skip_hidden: bool,
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// Excludes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Excludes every entry whose name starts with a dot
    pub fn hidden() -> Self {
        Self {
            skip_hidden: true,
            names: BTreeSet::new(),
        }
    }

    /// Excludes the given names. A literal [`HIDDEN_SENTINEL`] among them
    /// turns on dot-entry skipping instead of being matched as a name.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        let skip_hidden = names.remove(HIDDEN_SENTINEL);
        Self { skip_hidden, names }
    }

    /// Also skips dot entries when `skip` is set. Never turns skipping off.
    pub fn with_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden |= skip;
        self
    }

    pub fn skips_hidden(&self) -> bool {
        self.skip_hidden
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        !self.skip_hidden && self.names.is_empty()
    }

    fn excludes_directory(&self, name: &str) -> bool {
        (self.skip_hidden && is_hidden(name)) || self.names.contains(name)
    }

    fn file_pattern(&self) -> Result<Option<Regex>, regex::Error> {
        if self.names.is_empty() {
            return Ok(None);
        }

        let alternation = self
            .names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!("({alternation})")).map(Some)
    }
}

impl From<bool> for ExclusionSet {
    fn from(skip_hidden: bool) -> Self {
        if skip_hidden { Self::hidden() } else { Self::none() }
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(names: I) -> Self {
        Self::from_names(names)
    }
}

/// Directories and files found below a root, both sorted by path.
///
/// `directories` starts with the root itself whenever the walk succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirTree {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl DirTree {
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.directories, self.files)
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

/// Lists every directory and file below `root`.
///
/// Unreadable directories are treated as empty. With `ignore_errors`, a
/// missing root gives an empty [`DirTree`] instead of an error. A path that
/// is not valid UTF-8 fails the walk with
/// [`DirTreeError::NonUtf8PathError`].
///
/// The result is a best-effort snapshot: entries changed by someone else
/// during the walk may or may not show up.
pub fn walk(
    root: &str,
    exclusions: &ExclusionSet,
    ignore_errors: bool,
) -> Result<DirTree, DirTreeError> {
    let (directories, files) = walk_paths(root, exclusions, ignore_errors)?;

    Ok(DirTree {
        directories: into_strings(directories)?,
        files: into_strings(files)?,
    })
}

/// Same listing as [`walk`], kept as on-disk paths so that callers acting on
/// the entries never go through a string conversion.
pub(crate) fn walk_paths(
    root: &str,
    exclusions: &ExclusionSet,
    ignore_errors: bool,
) -> Result<(Vec<PathBuf>, Vec<PathBuf>), DirTreeError> {
    let root = path::strip_trailing_separators(&path::normalize(root));

    if !Path::new(&root).is_dir() {
        if ignore_errors {
            warn!("Directory `{}` does not exist, nothing to walk", root);
            return Ok((Vec::new(), Vec::new()));
        }
        return DirectoryNotFoundSnafu { path: root }.fail();
    }

    let file_pattern = exclusions.file_pattern().context(ExclusionPatternSnafu)?;
    debug!("Walking `{}` excluding {:?}", root, exclusions);

    let mut directories = Vec::new();
    let mut files = Vec::new();

    let entries = WalkDir::new(&root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            !(is_directory(entry) && exclusions.excludes_directory(&name_of(entry)))
        });

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if is_directory(&entry) {
            directories.push(entry.into_path());
            continue;
        }

        // Dangling links, sockets and fifos are neither files nor directories
        if !entry.path().is_file() {
            debug!("Skipping `{}`, not a regular file", entry.path().display());
            continue;
        }

        let name = name_of(&entry);
        let excluded = (exclusions.skips_hidden() && is_hidden(&name))
            || file_pattern
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(&name));
        if !excluded {
            files.push(entry.into_path());
        }
    }

    // Byte order of the whole path, not component order
    directories.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    directories.insert(0, PathBuf::from(root));

    debug!(
        "Found {} directories and {} files",
        directories.len(),
        files.len()
    );
    Ok((directories, files))
}

fn into_strings(paths: Vec<PathBuf>) -> Result<Vec<String>, DirTreeError> {
    paths
        .into_iter()
        .map(|path| {
            path.into_os_string().into_string().map_err(|raw| {
                NonUtf8PathSnafu {
                    path: PathBuf::from(raw),
                }
                .build()
            })
        })
        .collect()
}

fn name_of(entry: &DirEntry) -> String {
    entry.file_name().to_path_string()
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

// Symlinks to directories are listed as directories but never descended into
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

#[derive(Debug, Snafu)]
pub enum DirTreeError {
    #[snafu(display("Directory `{}` does not exist", path))]
    DirectoryNotFoundError { path: String },
    #[snafu(display("Failed to build the file exclusion pattern"))]
    ExclusionPatternError { source: regex::Error },
    #[snafu(display("Path `{}` is not valid UTF-8", path.display()))]
    NonUtf8PathError { path: PathBuf },
}
