//! Paleoclimate experiments: simulations of well-documented past states.

use cmipcv_core::{CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent};

use super::{ymd, CMIP7_ERA, PICONTROL_BRANCH};
use crate::FamilySet;

pub fn build() -> CvResult<FamilySet> {
    let mut set = FamilySet::default();

    for (drs_name, description, tier, min_yrs) in [
        (
            "midHolocene",
            "Simulation of the mid-Holocene (6,000 years before present), with \
             orbital parameters and greenhouse gas concentrations of the period.",
            1,
            200.0,
        ),
        (
            "lig127k",
            "Simulation of the Last Interglacial (127,000 years before present), \
             with orbital parameters and greenhouse gas concentrations of the \
             period.",
            1,
            200.0,
        ),
        (
            "lgm",
            "Simulation of the Last Glacial Maximum (21,000 years before \
             present), with ice sheets, orbital parameters and greenhouse gas \
             concentrations of the period.",
            2,
            100.0,
        ),
        (
            "past1000",
            "Transient simulation of the last millennium, 850 to 1849, driven by \
             reconstructed solar, volcanic and land use forcing.",
            2,
            1000.0,
        ),
    ] {
        let transient = drs_name == "past1000";
        let universe = ExperimentUniverse {
            drs_name: drs_name.to_string(),
            description: description.to_string(),
            activity: "pmip".to_string(),
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
            start_timestamp: if transient {
                Field::Value(ymd(850, 1, 1))
            } else {
                Field::Null
            },
            end_timestamp: if transient {
                Field::Value(ymd(1849, 12, 31))
            } else {
                Field::Null
            },
            tier: Field::Value(tier),
            ..ExperimentUniverse::default()
        };

        let mut project = ExperimentProject::for_universe(&universe, tier);
        project.min_number_yrs_per_sim = Field::Value(min_yrs);
        project.parent_mip_era = Field::Value(CMIP7_ERA.to_string());

        set.push(universe, project);
    }

    Ok(set)
}
