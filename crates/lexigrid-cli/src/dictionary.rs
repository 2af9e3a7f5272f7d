//! Dictionary file loading.

use std::{fs, io, path::Path};

/// Loads the dictionary at `path`.
///
/// Each line yields one word: lines are trimmed and lowercased, blank lines
/// are skipped, and file order is preserved.
///
/// # Errors
///
/// Returns any I/O error from reading the file.
pub fn load(path: &Path) -> io::Result<Vec<String>> {
    Ok(parse(&fs::read_to_string(path)?))
}

fn parse(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}
