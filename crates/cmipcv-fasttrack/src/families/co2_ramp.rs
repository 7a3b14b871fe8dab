//! The 1% per year CO2 increase experiments and their biogeochemically and
//! radiatively coupled variants.

use cmipcv_core::{CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent};

use super::{CMIP7_ERA, PICONTROL_BRANCH};
use crate::FamilySet;

const RAMP_DESCRIPTION: &str = "1% per year increase in atmospheric carbon dioxide levels. \
     All other conditions are kept the same as piControl.";

pub fn build() -> CvResult<FamilySet> {
    let mut set = FamilySet::default();

    for (drs_name, description_start, activity, required, additional) in [
        (
            "1pctCO2",
            "",
            "cmip",
            vec![ModelComponent::Aogcm],
            vec![ModelComponent::Aer, ModelComponent::Chem, ModelComponent::Bgc],
        ),
        (
            "1pctCO2-bgc",
            "Biogeochemically coupled simulation (i.e. the carbon cycle only \
             'sees' the increase in atmospheric carbon dioxide, not any change \
             in temperature) of a ",
            "c4mip",
            vec![ModelComponent::Aogcm, ModelComponent::Bgc],
            vec![ModelComponent::Aer, ModelComponent::Chem],
        ),
        (
            "1pctCO2-rad",
            "Radiatively coupled simulation (i.e. the carbon cycle only 'sees' \
             the increase in temperature, not any change in atmospheric carbon \
             dioxide) of a ",
            "c4mip",
            vec![ModelComponent::Aogcm, ModelComponent::Bgc],
            vec![ModelComponent::Aer, ModelComponent::Chem],
        ),
    ] {
        let universe = ExperimentUniverse {
            drs_name: drs_name.to_string(),
            description: format!("{description_start}{RAMP_DESCRIPTION}"),
            activity: activity.to_string(),
            required_model_components: required,
            additional_allowed_model_components: additional,
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
        project.min_number_yrs_per_sim = Field::Value(150.0);
        project.parent_mip_era = Field::Value(CMIP7_ERA.to_string());

        set.push(universe, project);
    }

    Ok(set)
}
