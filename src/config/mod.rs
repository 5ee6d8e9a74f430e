mod fs_config;

pub use fs_config::{FsConfig, ROOT_ENV, TMP_ENV};
