use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::model::HandicapIndex;
use crate::model::MAX_PLAYERS;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// The directory may not exist yet, as long as its parent is a writable
/// directory.
///
/// # Errors
///
/// Will return `Err` if the path is a file or the directory is not writable
pub fn check_writable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    let existing = if path.exists() {
        path.clone()
    } else {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        }
    };
    match fs::metadata(&existing) {
        Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => Ok(path),
        Ok(meta) if !meta.is_dir() => Err(format!("'{}' is not a directory.", existing.display())),
        Ok(_) => Err(format!("The directory '{}' is not writable.", existing.display())),
        Err(e) => Err(format!("The directory '{}' is not usable: {e}", existing.display())),
    }
}

/// Blank text means "not entered yet".
///
/// # Errors
///
/// Will return `Err` if the text is neither blank nor a number
pub fn check_handicap_index(text: &str) -> Result<HandicapIndex, String> {
    HandicapIndex::parse(text).map_err(|e| e.to_string())
}

fn parse_in_group(text: &str, what: &str) -> Result<usize, String> {
    let value = text
        .parse::<usize>()
        .map_err(|e| format!("{what} '{text}': {e}"))?;
    if (1..=MAX_PLAYERS).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{what} must be 1 to {MAX_PLAYERS}, got {value}"))
    }
}

/// # Errors
///
/// Will return `Err` if the count is not 1 to 4
pub fn check_player_count(text: &str) -> Result<usize, String> {
    parse_in_group(text, "player count")
}

/// One-based, so player 1 is the first player of the group.
///
/// # Errors
///
/// Will return `Err` if the number is not 1 to 4
pub fn check_player_number(text: &str) -> Result<usize, String> {
    parse_in_group(text, "player number")
}
