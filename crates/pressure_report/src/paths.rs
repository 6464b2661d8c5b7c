//! Input/output file name handling.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

pub const JSON_EXT: &str = ".json";
pub const JSONL_EXT: &str = ".jsonl";
pub const CSV_EXT: &str = ".csv";

pub const MISSING_FILE_MESSAGE: &str = "\
The entered filename does not exist in the current folder.

Potential solutions include:
\t* ensure that the desired file is in the same directory the tool is run from
\t* copy-paste the filename (including extension/file format) exactly

Please fix the filename and try again!";

/// A file name picked from user input, or the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    /// True when the user's value was missing or rejected
    pub fell_back: bool,
}

impl Selection {
    fn given(name: String) -> Self {
        Self {
            name,
            fell_back: false,
        }
    }

    fn fallback(default: &str) -> Self {
        Self {
            name: default.to_string(),
            fell_back: true,
        }
    }
}

/// Accept `given` if it ends in `extension` and has a stem.
pub fn select_input(given: Option<&str>, extension: &str, default: &str) -> Selection {
    match given.map(str::trim) {
        Some(name) if name.len() > extension.len() && name.ends_with(extension) => {
            Selection::given(name.to_string())
        }
        _ => Selection::fallback(default),
    }
}

/// `given` is a report name without extension; `.csv` is appended.
pub fn select_output(given: Option<&str>, default: &str) -> Selection {
    match given.map(str::trim) {
        Some(name) if name.len() > CSV_EXT.len() && !name.ends_with(CSV_EXT) => {
            Selection::given(format!("{}{}", name, CSV_EXT))
        }
        _ => Selection::fallback(default),
    }
}

/// Resolve `name` against `dir` and make sure it is an existing file.
pub fn existing_file(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if !path.is_file() {
        bail!("File not found: {}\n\n{}", path.display(), MISSING_FILE_MESSAGE);
    }
    Ok(path)
}
