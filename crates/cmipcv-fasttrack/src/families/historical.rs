//! Historical simulations of the recent past.

use cmipcv_core::{CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent};

use super::{ymd, CMIP7_ERA, PICONTROL_BRANCH};
use crate::FamilySet;

pub fn build() -> CvResult<FamilySet> {
    let mut set = FamilySet::default();

    let historical = ExperimentUniverse {
        drs_name: "historical".to_string(),
        description: "Concentration-driven simulation of the recent past, with all \
                      forcings evolving as observed, 1850 to 2021."
            .to_string(),
        activity: "cmip".to_string(),
        required_model_components: vec![ModelComponent::Aogcm],
        additional_allowed_model_components: vec![
            ModelComponent::Aer,
            ModelComponent::Chem,
            ModelComponent::Bgc,
        ],
        min_ensemble_size: 3,
        branch_information: Field::Value(PICONTROL_BRANCH.to_string()),
        parent_activity: Field::Value("cmip".to_string()),
        parent_experiment: Field::Value("picontrol".to_string()),
        start_timestamp: Field::Value(ymd(1850, 1, 1)),
        end_timestamp: Field::Value(ymd(2021, 12, 31)),
        tier: Field::Value(1),
        ..ExperimentUniverse::default()
    };

    let esm_hist = ExperimentUniverse {
        drs_name: "esm-hist".to_string(),
        description: "Emissions-driven simulation of the recent past, with \
                      atmospheric carbon dioxide calculated interactively from \
                      observed emissions, 1850 to 2021."
            .to_string(),
        activity: "cmip".to_string(),
        required_model_components: vec![ModelComponent::Aogcm, ModelComponent::Bgc],
        additional_allowed_model_components: vec![ModelComponent::Aer, ModelComponent::Chem],
        min_ensemble_size: 3,
        branch_information: Field::Value(
            "Branch from `esm-piControl` at a time of your choosing".to_string(),
        ),
        parent_activity: Field::Value("cmip".to_string()),
        parent_experiment: Field::Value("esm-picontrol".to_string()),
        start_timestamp: Field::Value(ymd(1850, 1, 1)),
        end_timestamp: Field::Value(ymd(2021, 12, 31)),
        tier: Field::Value(1),
        ..ExperimentUniverse::default()
    };

    for universe in [historical, esm_hist] {
        let mut project = ExperimentProject::for_universe(&universe, 1);
        project.min_number_yrs_per_sim = Field::Value(172.0);
        project.parent_mip_era = Field::Value(CMIP7_ERA.to_string());
        set.push(universe, project);
    }

    Ok(set)
}
