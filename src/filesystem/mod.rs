//! Directory trees and the recursive operations built on top of them.
//!
//! [`walk`] lists a subtree as two sorted sequences of paths, directories
//! and files. Removal, writability checks and file creation reuse it, and
//! all of them share the same `ignore_errors` convention: a missing directory
//! or an I/O failure becomes a sentinel value (empty tree, `false`, empty
//! string) instead of an error. Everything here runs synchronously on the
//! calling thread and takes no locks.

mod access;
mod create;
mod recursive;
mod tree;

pub use access::{is_executable, is_readable, is_writable};
pub use create::{
    CreateFileError, DEFAULT_DIRECTORY_MODE, DEFAULT_TMP_PREFIX, TmpFileError, create_file,
    create_tmp_file,
};
pub use recursive::{
    RemoveDirError, UnlinkError, is_writable_recursive, rmdir_recursive, unlink_recursive,
};
pub use tree::{DirTree, DirTreeError, ExclusionSet, HIDDEN_SENTINEL, walk};
