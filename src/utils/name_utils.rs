//! Naming helpers for display names and archive entries

use std::collections::HashSet;
use std::path::Path;

/// Derive a display name from a file name by dropping the extension
///
/// Falls back to `image` when nothing usable remains, so archive
/// folder names are never empty.
pub fn strip_extension(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("");

    if stem.is_empty() {
        "image".to_string()
    } else {
        stem.to_string()
    }
}

/// Archive file name for one quadrant of a folder
///
/// # Arguments
/// * `folder` - The (already disambiguated) folder name
/// * `number` - One-based quadrant file number
pub fn quadrant_file_name(folder: &str, number: usize) -> String {
    format!("{}_quad_{}.png", folder, number)
}

/// Assign each display name a unique folder name
///
/// The first occurrence keeps the bare name; later duplicates get a
/// numeric suffix (`name_2`, `name_3`, ...), skipping candidates an
/// earlier folder already took. Output order matches input order.
pub fn disambiguate_folders<'a, I>(names: I) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let mut taken = HashSet::new();
    let mut folders = Vec::new();

    for name in names {
        let mut candidate = name.to_string();
        let mut suffix = 2;
        while !taken.insert(candidate.clone()) {
            candidate = format!("{}_{}", name, suffix);
            suffix += 1;
        }
        folders.push(candidate);
    }

    folders
}
