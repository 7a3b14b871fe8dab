use std::path::PathBuf;

use thiserror::Error;

use crate::check::Violation;

/// Error type for invalid vocabulary operations.
#[derive(Error, Debug)]
pub enum CvError {
    #[error("no activity `{activity}` is defined (required by experiment `{experiment}`)")]
    UnknownActivity {
        experiment: String,
        activity: String,
    },
    #[error("duplicate {entity} id `{id}`")]
    DuplicateId { entity: &'static str, id: String },
    #[error("experiment `{experiment}`: expected parent experiment `{expected}`, found {found}")]
    UnexpectedParent {
        experiment: String,
        expected: String,
        found: String,
    },
    #[error("experiment `{experiment}` has no end timestamp to derive an extension from")]
    MissingEndTimestamp { experiment: String },
    #[error("unknown base scenario `{id}` referenced by `{referrer}`")]
    UnknownScenario { id: String, referrer: String },
    #[error(
        "filename/id consistency check failed for {} entries:\n{}",
        .violations.len(),
        format_violations(.violations)
    )]
    ConsistencyCheck { violations: Vec<Violation> },
    #[error("invalid configuration file `{path}`")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialise entry `{id}`")]
    Serialise {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type for `Result<T, CvError>`.
pub type CvResult<T> = Result<T, CvError>;

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}
