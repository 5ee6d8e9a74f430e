//! String-level path handling.
//!
//! Paths are treated as plain strings here so that both separator styles can
//! be accepted on every platform. Nothing in this module touches the
//! filesystem.

mod extension;
mod normalizer;

pub use extension::get_extension;
pub use normalizer::{
    PathError, SEPARATOR, add_trailing_separator, concatenate, is_absolute, is_separator,
    make_absolute, make_relative, normalize, rtr, strip_trailing_separators,
};
