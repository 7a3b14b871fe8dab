//! Detection and attribution experiments: historical simulations driven by
//! individual forcing groups.

use cmipcv_core::{CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent};

use super::{ymd, CMIP7_ERA, PICONTROL_BRANCH};
use crate::FamilySet;

pub fn build() -> CvResult<FamilySet> {
    let mut set = FamilySet::default();

    for (drs_name, forcing) in [
        (
            "hist-nat",
            "natural forcings only (solar irradiance and volcanic aerosol)",
        ),
        ("hist-GHG", "well-mixed greenhouse gas changes only"),
        ("hist-aer", "anthropogenic aerosol changes only"),
    ] {
        let universe = ExperimentUniverse {
            drs_name: drs_name.to_string(),
            description: format!(
                "Simulation of the recent past driven by {forcing}, with all \
                 other forcings held at pre-industrial conditions, 1850 to 2021."
            ),
            activity: "damip".to_string(),
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

        let mut project = ExperimentProject::for_universe(&universe, 1);
        project.min_number_yrs_per_sim = Field::Value(172.0);
        project.parent_mip_era = Field::Value(CMIP7_ERA.to_string());

        set.push(universe, project);
    }

    Ok(set)
}
