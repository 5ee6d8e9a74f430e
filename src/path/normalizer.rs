use snafu::{OptionExt, Snafu, ensure};
use tracing::debug;

use crate::config::FsConfig;
use crate::ext::PathStringExt;

/// The separator every normalized path uses on this platform
pub const SEPARATOR: char = std::path::MAIN_SEPARATOR;

const PARENT_DIR: &str = "..";
const CURRENT_DIR: &str = ".";

/// Both `/` and `\` are accepted as separators regardless of platform.
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Replaces every `/` and `\` with [`SEPARATOR`].
pub fn normalize(path: &str) -> String {
    path.chars()
        .map(|c| if is_separator(c) { SEPARATOR } else { c })
        .collect()
}

/// Appends [`SEPARATOR`] unless the path already ends with one of the
/// accepted separators.
///
/// # Panics
///
/// Panics if `path` is empty. Callers must guard against empty input.
pub fn add_trailing_separator(path: &str) -> String {
    assert!(
        !path.is_empty(),
        "cannot add a trailing separator to an empty path"
    );

    if path.ends_with(is_separator) {
        path.to_string()
    } else {
        format!("{path}{SEPARATOR}")
    }
}

/// Joins the segments, giving every segment but the last a trailing
/// separator. The last segment is appended exactly as passed.
///
/// # Panics
///
/// Panics if any segment other than the last is empty.
pub fn concatenate<S: AsRef<str>>(paths: &[S]) -> String {
    let Some((last, init)) = paths.split_last() else {
        return String::new();
    };

    let mut joined: String = init
        .iter()
        .map(|segment| add_trailing_separator(segment.as_ref()))
        .collect();
    joined.push_str(last.as_ref());
    joined
}

pub fn is_absolute(path: &str) -> bool {
    if path.starts_with(is_separator) {
        return true;
    }
    cfg!(windows) && split_drive(path).0.is_some()
}

/// Strips every trailing separator, keeping a lone root separator intact.
pub fn strip_trailing_separators(path: &str) -> String {
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() && !path.is_empty() {
        SEPARATOR.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Makes `end` absolute by prefixing it with `start`.
///
/// An `end` that is already absolute is returned unchanged.
pub fn make_absolute(end: &str, start: &str) -> Result<String, PathError> {
    ensure!(is_absolute(start), NotAbsoluteSnafu { path: start });

    if is_absolute(end) {
        return Ok(end.to_string());
    }
    Ok(concatenate(&[start, end]))
}

/// Computes the path leading from `start` to `end`.
///
/// Both paths must be absolute. `.` and `..` components are resolved before
/// comparing, and the result never carries a trailing separator. Identical
/// paths give `.`.
pub fn make_relative(end: &str, start: &str) -> Result<String, PathError> {
    ensure!(is_absolute(start), NotAbsoluteSnafu { path: start });
    ensure!(is_absolute(end), NotAbsoluteSnafu { path: end });

    let (end_drive, end_rest) = split_drive(end);
    let (start_drive, start_rest) = split_drive(start);
    let end_components = components(end_rest);
    let start_components = components(start_rest);

    if let (Some(end_drive), Some(start_drive)) = (end_drive, start_drive) {
        if end_drive != start_drive {
            // No relative path exists across drives
            let mut other_drive = format!("{end_drive}:{SEPARATOR}");
            other_drive.push_str(&end_components.join(&SEPARATOR.to_string()));
            return Ok(strip_trailing_separators(&other_drive));
        }
    }

    let shared = start_components
        .iter()
        .zip(end_components.iter())
        .take_while(|(start, end)| start == end)
        .count();

    let relative = std::iter::repeat_n(PARENT_DIR, start_components.len() - shared)
        .chain(end_components[shared..].iter().copied())
        .collect::<Vec<_>>();

    if relative.is_empty() {
        return Ok(CURRENT_DIR.to_string());
    }
    Ok(normalize(&relative.join(&SEPARATOR.to_string())))
}

/// Returns `path` relative to the configured root path.
///
/// Relative paths, and absolute paths outside the root, are returned as
/// given. Trailing separators are stripped in every case.
pub fn rtr(path: &str, config: &FsConfig) -> Result<String, PathError> {
    let mut path = path.to_string();

    if is_absolute(&path) {
        let root = config
            .root()
            .context(RootNotConfiguredSnafu)?
            .to_path_string();
        if path.starts_with(&root) {
            path = normalize(&make_relative(&path, &root)?);
        } else {
            debug!("`{path}` is outside of the root path `{root}`");
        }
    }

    Ok(path.trim_end_matches(SEPARATOR).to_string())
}

/// Splits a leading `X:` drive off a path of the form `X:/...` or `X:\...`.
fn split_drive(path: &str) -> (Option<char>, &str) {
    let mut chars = path.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(':'), Some(separator))
            if letter.is_ascii_alphabetic() && is_separator(separator) =>
        {
            (Some(letter.to_ascii_uppercase()), &path[2..])
        }
        _ => (None, path),
    }
}

fn components(path: &str) -> Vec<&str> {
    path.split(is_separator)
        .fold(Vec::new(), |mut components, segment| {
            match segment {
                PARENT_DIR => {
                    components.pop();
                }
                CURRENT_DIR | "" => {}
                _ => components.push(segment),
            }
            components
        })
}

#[derive(Debug, Snafu)]
pub enum PathError {
    #[snafu(display("The path `{path}` is not absolute"))]
    NotAbsoluteError { path: String },
    #[snafu(display(
        "No root path has been set, use the `ROOT` environment variable or the `--root` option"
    ))]
    RootNotConfiguredError,
}
