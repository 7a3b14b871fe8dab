//! Pre-industrial control simulations.

use cmipcv_core::{CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent};

use super::CMIP7_ERA;
use crate::FamilySet;

pub fn build() -> CvResult<FamilySet> {
    let mut set = FamilySet::default();

    let picontrol = ExperimentUniverse {
        drs_name: "piControl".to_string(),
        description: "Control simulation under non-evolving pre-industrial (1850) \
                      forcing conditions."
            .to_string(),
        activity: "cmip".to_string(),
        required_model_components: vec![ModelComponent::Aogcm],
        additional_allowed_model_components: vec![
            ModelComponent::Aer,
            ModelComponent::Chem,
            ModelComponent::Bgc,
        ],
        min_ensemble_size: 1,
        // The control has no parent in the CV sense
        parent_activity: Field::Null,
        parent_experiment: Field::Null,
        start_timestamp: Field::Null,
        end_timestamp: Field::Null,
        tier: Field::Value(1),
        ..ExperimentUniverse::default()
    };

    let esm_picontrol = ExperimentUniverse {
        drs_name: "esm-piControl".to_string(),
        description: "Emissions-driven control simulation under non-evolving \
                      pre-industrial (1850) forcing conditions, with atmospheric \
                      carbon dioxide calculated interactively."
            .to_string(),
        activity: "cmip".to_string(),
        required_model_components: vec![ModelComponent::Aogcm, ModelComponent::Bgc],
        additional_allowed_model_components: vec![ModelComponent::Aer, ModelComponent::Chem],
        min_ensemble_size: 1,
        parent_activity: Field::Null,
        parent_experiment: Field::Null,
        start_timestamp: Field::Null,
        end_timestamp: Field::Null,
        tier: Field::Value(1),
        ..ExperimentUniverse::default()
    };

    for universe in [picontrol, esm_picontrol] {
        let mut project = ExperimentProject::for_universe(&universe, 1);
        project.min_number_yrs_per_sim = Field::Value(500.0);
        project.parent_mip_era = Field::Value(CMIP7_ERA.to_string());
        set.push(universe, project);
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_have_no_parent() {
        let set = build().unwrap();
        assert_eq!(set.universe.len(), 2);
        for universe in &set.universe {
            assert_eq!(universe.parent_experiment, Field::Null);
            assert_eq!(universe.parent_activity, Field::Null);
        }
    }

    #[test]
    fn test_emissions_driven_control_requires_bgc() {
        let set = build().unwrap();
        let esm = set
            .universe
            .iter()
            .find(|u| u.drs_name == "esm-piControl")
            .unwrap();
        assert!(esm.required_model_components.contains(&ModelComponent::Bgc));
    }

    #[test]
    fn test_controls_run_at_least_500_years() {
        for project in build().unwrap().project {
            assert_eq!(project.min_number_yrs_per_sim.as_value(), Some(&500.0));
        }
    }
}
