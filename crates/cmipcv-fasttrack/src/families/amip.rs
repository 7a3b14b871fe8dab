//! Atmosphere-only simulations with prescribed ocean surface conditions.

use cmipcv_core::{CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent};

use super::{ymd, CMIP7_ERA};
use crate::FamilySet;

pub fn build() -> CvResult<FamilySet> {
    let mut set = FamilySet::default();

    let universe = ExperimentUniverse {
        drs_name: "amip".to_string(),
        description: "Atmosphere-only simulation driven by observed sea surface \
                      temperatures and sea ice concentrations, 1979 to 2021."
            .to_string(),
        activity: "cmip".to_string(),
        required_model_components: vec![ModelComponent::Agcm],
        additional_allowed_model_components: vec![ModelComponent::Aer, ModelComponent::Chem],
        min_ensemble_size: 1,
        // Initialised from observations rather than a parent simulation
        parent_activity: Field::Null,
        parent_experiment: Field::Null,
        start_timestamp: Field::Value(ymd(1979, 1, 1)),
        end_timestamp: Field::Value(ymd(2021, 12, 31)),
        tier: Field::Value(1),
        ..ExperimentUniverse::default()
    };

    let mut project = ExperimentProject::for_universe(&universe, 1);
    project.min_number_yrs_per_sim = Field::Value(43.0);
    project.parent_mip_era = Field::Value(CMIP7_ERA.to_string());

    set.push(universe, project);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amip_is_atmosphere_only() {
        let set = build().unwrap();
        assert_eq!(set.universe.len(), 1);
        assert_eq!(
            set.universe[0].required_model_components,
            vec![ModelComponent::Agcm]
        );
    }

    #[test]
    fn test_amip_has_no_parent() {
        let set = build().unwrap();
        assert_eq!(set.universe[0].parent_experiment, Field::Null);
    }

    #[test]
    fn test_amip_covers_the_satellite_era() {
        let set = build().unwrap();
        assert_eq!(
            set.universe[0].start_timestamp.as_value(),
            Some(&ymd(1979, 1, 1))
        );
    }
}
