//! Idealised flat-emission experiments.
//!
//! The flat10 family prescribes constant carbon dioxide emissions of
//! 10 PgC per year, with cessation and removal variants branching after
//! 100 years (1000 PgC cumulative emissions).

use cmipcv_core::{CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent};

use super::CMIP7_ERA;
use crate::FamilySet;

pub fn build() -> CvResult<FamilySet> {
    let mut set = FamilySet::default();

    for (drs_name, description, parent, parent_activity, branch, tier, min_yrs) in [
        (
            "esm-flat10",
            "Emissions-driven simulation with constant carbon dioxide \
             emissions of 10 PgC per year."
                .to_string(),
            "esm-picontrol",
            "cmip",
            "Branch from `esm-piControl` at a time of your choosing".to_string(),
            1,
            100.0,
        ),
        (
            "esm-flat10-zec",
            "Zero emissions commitment simulation: carbon dioxide emissions \
             cease after 100 years of esm-flat10 (1000 PgC cumulative \
             emissions)."
                .to_string(),
            "esm-flat10",
            "c4mip",
            "Branch from `esm-flat10` at the start of year 100".to_string(),
            1,
            200.0,
        ),
        (
            "esm-flat10-cdr",
            "Carbon dioxide removal simulation: emissions decline linearly \
             from 10 PgC per year to -10 PgC per year over 100 years, \
             branching from esm-flat10 at year 100."
                .to_string(),
            "esm-flat10",
            "c4mip",
            "Branch from `esm-flat10` at the start of year 100".to_string(),
            2,
            300.0,
        ),
    ] {
        let universe = ExperimentUniverse {
            drs_name: drs_name.to_string(),
            description,
            activity: "c4mip".to_string(),
            required_model_components: vec![ModelComponent::Aogcm, ModelComponent::Bgc],
            additional_allowed_model_components: vec![ModelComponent::Aer, ModelComponent::Chem],
            min_ensemble_size: 1,
            branch_information: Field::Value(branch),
            parent_activity: Field::Value(parent_activity.to_string()),
            parent_experiment: Field::Value(parent.to_string()),
            start_timestamp: Field::Null,
            end_timestamp: Field::Null,
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
