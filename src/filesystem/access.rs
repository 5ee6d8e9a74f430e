//! Access checks for the calling process.
//!
//! On unix these ask the kernel through `access(2)`, so ownership, group
//! membership and read-only mounts are all taken into account. Elsewhere
//! they fall back to what the file metadata says.

use std::path::Path;

#[cfg(unix)]
use nix::unistd::{AccessFlags, access};

pub fn is_readable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        access(path, AccessFlags::R_OK).is_ok()
    }
    #[cfg(not(unix))]
    {
        if path.is_dir() {
            std::fs::read_dir(path).is_ok()
        } else {
            std::fs::File::open(path).is_ok()
        }
    }
}

pub fn is_writable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        access(path, AccessFlags::W_OK).is_ok()
    }
    #[cfg(not(unix))]
    {
        std::fs::metadata(path).is_ok_and(|metadata| !metadata.permissions().readonly())
    }
}

/// Tells whether the caller may execute `path`, or enter it for a directory.
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        access(path, AccessFlags::X_OK).is_ok()
    }
    #[cfg(not(unix))]
    {
        path.is_dir()
            || (path.is_file()
                && path.extension().is_some_and(|extension| {
                    ["exe", "bat", "cmd", "com"]
                        .iter()
                        .any(|known| extension.eq_ignore_ascii_case(known))
                }))
    }
}
