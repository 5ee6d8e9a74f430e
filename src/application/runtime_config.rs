use treetools::config::FsConfig;

use crate::cli::{Cli, Command};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub command: Command,
    pub fs_config: FsConfig,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        let mut fs_config = FsConfig::from_env();
        if let Some(root) = cli.root {
            fs_config = fs_config.with_root(root);
        }
        if let Some(tmp_dir) = cli.tmp_dir {
            fs_config = fs_config.with_tmp_dir(tmp_dir);
        }

        Self {
            command: cli.command,
            fs_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;
    use std::path::Path;

    #[test]
    fn cli_paths_override_the_environment() {
        let cli = Cli::parse_from([
            "treetools",
            "tmp",
            "--root",
            "/srv/app",
            "--tmp-dir",
            "/srv/app/tmp",
        ]);

        let config = RuntimeConfig::from(cli);

        assert_eq!(config.fs_config.root(), Some(Path::new("/srv/app")));
        assert_eq!(config.fs_config.tmp_dir(), Some(Path::new("/srv/app/tmp")));
    }
}
