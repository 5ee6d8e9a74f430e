use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::DirEntry;

/// Lossy conversion of filesystem paths into the plain strings the rest of
/// the crate works with.
fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

pub trait PathStringExt {
    fn to_path_string(&self) -> String;
}

impl PathStringExt for Path {
    fn to_path_string(&self) -> String {
        path_string(self)
    }
}

impl PathStringExt for PathBuf {
    fn to_path_string(&self) -> String {
        path_string(self)
    }
}

impl PathStringExt for OsStr {
    fn to_path_string(&self) -> String {
        path_string(Path::new(self))
    }
}

impl PathStringExt for DirEntry {
    fn to_path_string(&self) -> String {
        path_string(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_paths_and_names() {
        let path = PathBuf::from("/tmp/some dir/file.txt");
        assert_eq!(path.to_path_string(), "/tmp/some dir/file.txt");
        assert_eq!(path.as_path().to_path_string(), "/tmp/some dir/file.txt");
        assert_eq!(
            path.file_name().map(OsStr::to_path_string),
            Some("file.txt".to_string())
        );
    }
}
