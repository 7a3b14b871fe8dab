//! Geoengineering experiments layered on top of the scenarios.

use cmipcv_core::{
    CvError, CvRecord, CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent,
};

use super::{ymd, CMIP7_ERA};
use crate::FamilySet;

/// The scenario the intervention is applied to.
const BASE_SCENARIO: &str = "scen7-h";

/// Build the stratospheric aerosol injection experiment.
///
/// The experiment branches from the high pathway in 2035 and holds global
/// mean temperature near 1.5 K above pre-industrial; its end date follows
/// the base scenario's. A missing base scenario is a configuration error.
pub fn build(scenarios: &[ExperimentUniverse]) -> CvResult<FamilySet> {
    let base = scenarios
        .iter()
        .find(|s| s.id() == BASE_SCENARIO)
        .ok_or_else(|| CvError::UnknownScenario {
            id: BASE_SCENARIO.to_string(),
            referrer: "g7-1p5k-sai".to_string(),
        })?;

    let universe = ExperimentUniverse {
        drs_name: "g7-1p5k-sai".to_string(),
        description: format!(
            "Stratospheric aerosol injection applied on top of the \
             `{BASE_SCENARIO}` scenario, holding global mean temperature near \
             1.5 K above pre-industrial."
        ),
        activity: "geomip".to_string(),
        required_model_components: vec![ModelComponent::Aogcm],
        additional_allowed_model_components: vec![
            ModelComponent::Aer,
            ModelComponent::Chem,
            ModelComponent::Bgc,
        ],
        min_ensemble_size: 3,
        branch_information: Field::Value(format!("Branch from `{BASE_SCENARIO}` at 2035-01-01")),
        parent_activity: Field::Value("scenariomip".to_string()),
        parent_experiment: Field::Value(BASE_SCENARIO.to_string()),
        start_timestamp: Field::Value(ymd(2035, 1, 1)),
        end_timestamp: base.end_timestamp.clone(),
        tier: Field::Value(1),
        ..ExperimentUniverse::default()
    };

    let mut project = ExperimentProject::for_universe(&universe, 1);
    project.min_number_yrs_per_sim = Field::Value(66.0);
    project.parent_mip_era = Field::Value(CMIP7_ERA.to_string());

    let mut set = FamilySet::default();
    set.push(universe, project);
    Ok(set)
}
