//! Root-set naming from the hosting executable.

use std::io;
use std::path::{Path, PathBuf};

/// Final path segment with a trailing `.exe` removed (case-sensitive).
pub fn strip_exe_ext(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(".exe") {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}

/// Root name derived from the path returned by `query`.
///
/// # Panics
/// Without an executable path there is no name to print usage under, so a
/// failing `query` aborts instead of returning an error.
pub fn root_name_from<F>(query: F) -> String
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    match query() {
        Ok(exe) => strip_exe_ext(&exe),
        Err(e) => panic!("failed to obtain executable name: {e}"),
    }
}

/// Root name of the running process.
pub fn root_name() -> String {
    root_name_from(std::env::current_exe)
}
