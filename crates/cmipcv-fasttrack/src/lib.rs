//! CMIP7 fast-track vocabulary definitions.
//!
//! Not all experiments, rather those listed in
//! [Dunne et al., 2025](https://doi.org/10.5194/gmd-18-6671-2025) for the
//! CMIP7 fast track, plus the ScenarioMIP pathways and the experiments
//! derived from them.
//!
//! # Module organisation
//!
//! Each experiment family lives in its own module under [`families`] as a
//! pure builder returning immutable record values. [`build_fast_track`]
//! composes them into a single [`CvCollection`], linking every project
//! experiment into its activity and collecting every family failure so a
//! broken configuration is reported in full in one run.

pub mod activities;
pub mod families;

use cmipcv_core::{CvCollection, CvError, CvResult, ExperimentProject, ExperimentUniverse};
use tracing::debug;

/// The records produced by one experiment-family builder.
#[derive(Debug, Clone, Default)]
pub struct FamilySet {
    pub universe: Vec<ExperimentUniverse>,
    pub project: Vec<ExperimentProject>,
}

impl FamilySet {
    /// Add a universe/project record pair for one experiment.
    pub fn push(&mut self, universe: ExperimentUniverse, project: ExperimentProject) {
        self.universe.push(universe);
        self.project.push(project);
    }
}

/// A failure raised while building or linking one experiment family.
#[derive(Debug)]
pub struct FamilyError {
    pub family: &'static str,
    pub error: CvError,
}

impl std::fmt::Display for FamilyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.family, self.error)
    }
}

impl std::error::Error for FamilyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Build the complete fast-track collection.
///
/// Every family builder runs even when an earlier one fails; the result is
/// either the fully linked collection or the list of every failure across
/// all families.
pub fn build_fast_track() -> Result<CvCollection, Vec<FamilyError>> {
    let mut collection = match CvCollection::with_activities(activities::fast_track_activities()) {
        Ok(collection) => collection,
        Err(error) => {
            return Err(vec![FamilyError {
                family: "activities",
                error,
            }])
        }
    };

    // The chemistry and geoengineering variants are derived from the base
    // scenario records, so the scenario family is built first and its
    // universe records shared with the dependent builders.
    let scenario = families::scenario::build();
    let scenario_bases: Vec<ExperimentUniverse> = scenario
        .as_ref()
        .map(|set| set.universe.clone())
        .unwrap_or_default();

    let results: Vec<(&'static str, CvResult<FamilySet>)> = vec![
        ("control", families::control::build()),
        ("historical", families::historical::build()),
        ("amip", families::amip::build()),
        ("co2-ramp", families::co2_ramp::build()),
        ("abrupt", families::abrupt::build()),
        ("flat-emissions", families::flat10::build()),
        ("attribution", families::attribution::build()),
        ("paleo", families::paleo::build()),
        ("scenario", scenario),
        ("chemistry", families::chemistry::build(&scenario_bases)),
        (
            "geoengineering",
            families::geoengineering::build(&scenario_bases),
        ),
    ];

    let mut failures = Vec::new();
    for (family, result) in results {
        match result {
            Ok(set) => {
                debug!(family, experiments = set.universe.len(), "built family");
                for experiment in set.universe {
                    if let Err(error) = collection.insert_universe(experiment) {
                        failures.push(FamilyError { family, error });
                    }
                }
                for experiment in set.project {
                    if let Err(error) = collection.insert_project(experiment) {
                        failures.push(FamilyError { family, error });
                    }
                }
            }
            Err(error) => failures.push(FamilyError { family, error }),
        }
    }

    if failures.is_empty() {
        Ok(collection)
    } else {
        Err(failures)
    }
}
