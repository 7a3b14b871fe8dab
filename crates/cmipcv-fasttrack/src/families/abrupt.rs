//! Abrupt CO2 forcing experiments.

use cmipcv_core::{CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent};

use super::{CMIP7_ERA, PICONTROL_BRANCH};
use crate::FamilySet;

pub fn build() -> CvResult<FamilySet> {
    let mut set = FamilySet::default();

    for (drs_name, description_start, activity) in [
        (
            "abrupt-4xCO2",
            "Abrupt quadrupling of atmospheric carbon dioxide levels.",
            "cmip",
        ),
        (
            "abrupt-2xCO2",
            "Abrupt doubling of atmospheric carbon dioxide levels.",
            "cfmip",
        ),
        (
            "abrupt-0p5xCO2",
            "Abrupt halving of atmospheric carbon dioxide levels.",
            "cfmip",
        ),
    ] {
        let universe = ExperimentUniverse {
            drs_name: drs_name.to_string(),
            description: format!(
                "{description_start} All other conditions are kept the same as piControl."
            ),
            activity: activity.to_string(),
            required_model_components: vec![ModelComponent::Aogcm],
            additional_allowed_model_components: vec![
                ModelComponent::Aer,
                ModelComponent::Chem,
                ModelComponent::Bgc,
            ],
            min_ensemble_size: 1,
            branch_information: Field::Value(PICONTROL_BRANCH.to_string()),
            parent_activity: Field::Value("cmip".to_string()),
            parent_experiment: Field::Value("picontrol".to_string()),
            start_timestamp: Field::Null,
            end_timestamp: Field::Null,
            tier: Field::Value(1),
            ..ExperimentUniverse::default()
        };

        let mut project = ExperimentProject::for_universe(&universe, 1);
        project.min_number_yrs_per_sim = Field::Value(300.0);
        project.parent_mip_era = Field::Value(CMIP7_ERA.to_string());

        set.push(universe, project);
    }

    Ok(set)
}
