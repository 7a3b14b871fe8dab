//! Post-generation consistency check: every entry's filename must match its
//! declared `id`.
//!
//! Violations are collected across the whole scan and reported together in
//! one aggregate error, so a broken tree shows every offending file in a
//! single run.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;
use walkdir::WalkDir;

use crate::errors::{CvError, CvResult};

/// Directory names never scanned for CV entries.
///
/// Dot directories are always skipped in addition to these.
pub const DEFAULT_SKIP_DIRS: [&str; 2] = ["scripts", "target"];

/// A single filename/id violation.
#[derive(Debug, Clone)]
pub struct Violation {
    pub path: PathBuf,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone)]
pub enum ViolationKind {
    /// The file has no `id` field.
    MissingId,
    /// The declared `id` differs from the filename stem.
    IdMismatch { declared: String },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ViolationKind::MissingId => write!(f, "{}: no id field", self.path.display()),
            ViolationKind::IdMismatch { declared } => {
                write!(f, "{}: id `{declared}` does not match filename", self.path.display())
            }
        }
    }
}

/// Check every JSON entry one level below each top-level vocabulary
/// directory under `root`.
///
/// Directories whose name starts with `.` or appears in `skip_dirs` are not
/// scanned. Files that cannot be read or parsed are logged and skipped;
/// they are a source problem, not an id violation. Returns the number of
/// entries checked, or an aggregate [`CvError::ConsistencyCheck`] listing
/// every violation found.
pub fn check_entry_filenames(root: &Path, skip_dirs: &[String]) -> CvResult<usize> {
    let mut violations = Vec::new();
    let mut checked = 0;

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || skip_dirs.iter().any(|skip| *skip == name) {
            continue;
        }

        for file in WalkDir::new(entry.path()).min_depth(1).max_depth(1) {
            let file = file.map_err(std::io::Error::from)?;
            let path = file.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                checked += 1;
                if let Some(violation) = check_entry(path) {
                    violations.push(violation);
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(checked)
    } else {
        Err(CvError::ConsistencyCheck { violations })
    }
}

fn check_entry(path: &Path) -> Option<Violation> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            warn!(path = %path.display(), %error, "skipping unreadable entry");
            return None;
        }
    };
    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(error) => {
            warn!(path = %path.display(), %error, "skipping malformed entry");
            return None;
        }
    };

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match value.get("id").and_then(Value::as_str) {
        None => Some(Violation {
            path: path.to_path_buf(),
            kind: ViolationKind::MissingId,
        }),
        Some(id) if id != stem => Some(Violation {
            path: path.to_path_buf(),
            kind: ViolationKind::IdMismatch {
                declared: id.to_string(),
            },
        }),
        Some(_) => None,
    }
}
