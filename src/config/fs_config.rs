use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable holding the application root path
pub const ROOT_ENV: &str = "ROOT";
/// Environment variable holding the directory for temporary files
pub const TMP_ENV: &str = "TMP";

/// Process-wide settings the path and file operations depend on.
///
/// Nothing reads the environment behind the caller's back: build one with
/// [`FsConfig::from_env`] or the `with_*` methods and pass it along.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FsConfig {
    root: Option<PathBuf>,
    tmp_dir: Option<PathBuf>,
}

impl FsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `ROOT` and `TMP` from the environment. Empty values count as unset.
    pub fn from_env() -> Self {
        let config = Self {
            root: read_env_path(ROOT_ENV),
            tmp_dir: read_env_path(TMP_ENV),
        };
        debug!("Configuration from environment: {:?}", config);
        config
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_tmp_dir(mut self, tmp_dir: impl Into<PathBuf>) -> Self {
        self.tmp_dir = Some(tmp_dir.into());
        self
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn tmp_dir(&self) -> Option<&Path> {
        self.tmp_dir.as_deref()
    }
}

fn read_env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_is_empty() {
        let config = FsConfig::new();
        assert_eq!(config.root(), None);
        assert_eq!(config.tmp_dir(), None);
    }

    #[test]
    fn builder_sets_paths() {
        let config = FsConfig::new()
            .with_root("/srv/app")
            .with_tmp_dir("/srv/app/tmp");
        assert_eq!(config.root(), Some(Path::new("/srv/app")));
        assert_eq!(config.tmp_dir(), Some(Path::new("/srv/app/tmp")));
    }

    #[test]
    fn missing_environment_variable_is_unset() {
        assert_eq!(read_env_path("TREETOOLS_SURELY_UNSET_VARIABLE"), None);
    }
}
