//! Generator configuration.
//!
//! A small optional TOML file (`cvgen.toml` by convention) supplies default
//! output roots and checker exclusions. Command-line flags take precedence
//! over the file; built-in defaults apply when neither is given.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::{CvError, CvResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenConfig {
    /// Root of the universe vocabulary tree.
    pub universe_root: Option<PathBuf>,
    /// Root of the project (CMIP7) vocabulary tree.
    pub project_root: Option<PathBuf>,
    /// Directory names the consistency checker skips.
    pub skip_dirs: Option<Vec<String>>,
}

impl GenConfig {
    /// Load configuration from `path`.
    pub fn load(path: &Path) -> CvResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| CvError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_if_present(path: &Path) -> CvResult<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(CvError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no configuration file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }
}
