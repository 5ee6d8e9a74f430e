//! Directory tree walking, path normalization and guarded recursive file
//! operations.
//!
//! Paths are handled as strings so that `/` and `\` can both be accepted as
//! separators; see [`path::normalize`] for the canonical form.

#![allow(clippy::enum_variant_names)]

pub mod checks;
pub mod config;
pub mod ext;
pub mod filesystem;
pub mod path;
