//! Interactive-chemistry variants of selected scenarios.

use cmipcv_core::{
    CvError, CvRecord, CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent,
};

use super::CMIP7_ERA;
use crate::FamilySet;

/// Base scenarios that get an interactive-chemistry variant.
const CHEMISTRY_BASES: [&str; 2] = ["scen7-m", "scen7-h"];

/// Build the chemistry variants from the base scenario records.
///
/// Each variant reruns its base pathway with atmospheric chemistry
/// calculated interactively; timing and parentage are inherited from the
/// base. A missing base scenario is a configuration error.
pub fn build(scenarios: &[ExperimentUniverse]) -> CvResult<FamilySet> {
    let mut set = FamilySet::default();

    for base_id in CHEMISTRY_BASES {
        let base = scenarios
            .iter()
            .find(|s| s.id() == base_id)
            .ok_or_else(|| CvError::UnknownScenario {
                id: base_id.to_string(),
                referrer: format!("{base_id}-chem"),
            })?;

        let universe = ExperimentUniverse {
            drs_name: format!("{}-chem", base.drs_name),
            description: format!(
                "Variant of the `{base_id}` scenario with atmospheric chemistry \
                 calculated interactively."
            ),
            activity: "aerchemmip".to_string(),
            required_model_components: vec![ModelComponent::Aogcm, ModelComponent::Chem],
            additional_allowed_model_components: vec![ModelComponent::Aer, ModelComponent::Bgc],
            min_ensemble_size: 1,
            branch_information: base.branch_information.clone(),
            parent_activity: base.parent_activity.clone(),
            parent_experiment: base.parent_experiment.clone(),
            start_timestamp: base.start_timestamp.clone(),
            end_timestamp: base.end_timestamp.clone(),
            tier: Field::Value(2),
            ..ExperimentUniverse::default()
        };

        let mut project = ExperimentProject::for_universe(&universe, 2);
        project.min_number_yrs_per_sim = Field::Value(79.0);
        project.parent_mip_era = Field::Value(CMIP7_ERA.to_string());

        set.push(universe, project);
    }

    Ok(set)
}
