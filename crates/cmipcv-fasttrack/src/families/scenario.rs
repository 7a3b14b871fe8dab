//! ScenarioMIP pathways and the experiments derived from them.
//!
//! Each concentration-driven pathway `scen7-<base>` yields three derived
//! experiments: an emissions-driven sibling (`esm-scen7-<base>`) and
//! post-2100 extensions of both (`-ext`).

use chrono::Datelike;
use cmipcv_core::{
    CvError, CvRecord, CvResult, ExperimentProject, ExperimentUniverse, Field, ModelComponent,
};

use super::{ymd, CMIP7_ERA};
use crate::FamilySet;

/// First year covered by the scenarios (the year after `historical` ends).
const SCENARIO_START_YEAR: i32 = 2022;

/// Last year covered by the 21st-century pathways.
const SCENARIO_END_YEAR: i32 = 2100;

/// Last year covered by the extensions.
const EXTENSION_END_YEAR: i32 = 2500;

/// One ScenarioMIP pathway.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioSpec {
    /// Pathway suffix in the DRS name (`scen7-<suffix>`).
    pub suffix: &'static str,
    /// Short label used in the description.
    pub label: &'static str,
    /// One-phrase characterisation of the emission trajectory.
    pub detail: &'static str,
}

/// The fast-track pathways, ordered from lowest to highest forcing.
pub fn scenario_specs() -> Vec<ScenarioSpec> {
    vec![
        ScenarioSpec {
            suffix: "vl",
            label: "very low",
            detail: "emissions decline rapidly to net zero around mid-century, \
                     followed by sustained net-negative emissions",
        },
        ScenarioSpec {
            suffix: "ln",
            label: "low overshoot",
            detail: "emissions reach the low pathway late, with substantial \
                     net-negative deployment in the second half of the century",
        },
        ScenarioSpec {
            suffix: "l",
            label: "low",
            detail: "emissions decline steadily to net zero in the second half \
                     of the century",
        },
        ScenarioSpec {
            suffix: "ml",
            label: "medium-low",
            detail: "emissions decline gradually through the century without \
                     reaching net zero",
        },
        ScenarioSpec {
            suffix: "m",
            label: "medium",
            detail: "emissions remain close to current levels through the \
                     century",
        },
        ScenarioSpec {
            suffix: "hl",
            label: "high then declining",
            detail: "emissions rise to mid-century before declining",
        },
        ScenarioSpec {
            suffix: "h",
            label: "high",
            detail: "emissions continue to rise throughout the century",
        },
    ]
}

/// Priority tier for a scenario experiment.
///
/// TODO: split tiers once the ScenarioMIP priority ranking is confirmed;
/// until then every branch yields the headline tier and the branching only
/// records the intended classification axes.
#[allow(clippy::if_same_then_else)]
pub fn scenario_tier(drs_name: &str) -> u32 {
    if drs_name.starts_with("esm-") {
        // emissions-driven siblings
        1
    } else if drs_name.ends_with("-ext") {
        // post-2100 extensions
        1
    } else if drs_name.ends_with("-vl") || drs_name.ends_with("-h") {
        // bracketing pathways
        1
    } else {
        1
    }
}

/// The concentration-driven experiment for one pathway.
fn concentration_scenario(spec: &ScenarioSpec) -> ExperimentUniverse {
    let drs_name = format!("scen7-{}", spec.suffix);
    let tier = scenario_tier(&drs_name);
    ExperimentUniverse {
        drs_name,
        description: format!(
            "Concentration-driven simulation of the {} scenario ({}).",
            spec.label, spec.detail
        ),
        activity: "scenariomip".to_string(),
        required_model_components: vec![ModelComponent::Aogcm],
        additional_allowed_model_components: vec![
            ModelComponent::Aer,
            ModelComponent::Chem,
            ModelComponent::Bgc,
        ],
        min_ensemble_size: 1,
        branch_information: Field::Value("Branch from the end of `historical`".to_string()),
        parent_activity: Field::Value("cmip".to_string()),
        parent_experiment: Field::Value("historical".to_string()),
        start_timestamp: Field::Value(ymd(SCENARIO_START_YEAR, 1, 1)),
        end_timestamp: Field::Value(ymd(SCENARIO_END_YEAR, 12, 31)),
        tier: Field::Value(tier),
        ..ExperimentUniverse::default()
    }
}

/// Derive the emissions-driven sibling of a concentration-driven scenario.
///
/// The derivation only makes sense for scenarios that continue
/// `historical`; anything else is a configuration error.
pub fn scenario_esm(base: &ExperimentUniverse) -> CvResult<ExperimentUniverse> {
    match base.parent_experiment.as_value() {
        Some(parent) if parent == "historical" => {}
        _ => {
            return Err(CvError::UnexpectedParent {
                experiment: base.drs_name.clone(),
                expected: "historical".to_string(),
                found: base.parent_experiment.describe(),
            })
        }
    }

    let drs_name = format!("esm-{}", base.drs_name);
    let tier = scenario_tier(&drs_name);
    Ok(ExperimentUniverse {
        drs_name,
        description: base
            .description
            .replace("Concentration-driven", "Emissions-driven"),
        activity: base.activity.clone(),
        required_model_components: vec![ModelComponent::Aogcm, ModelComponent::Bgc],
        additional_allowed_model_components: vec![ModelComponent::Aer, ModelComponent::Chem],
        min_ensemble_size: base.min_ensemble_size,
        branch_information: base
            .branch_information
            .clone()
            .map(|info| info.replace("historical", "esm-hist")),
        min_number_yrs_per_sim: base.min_number_yrs_per_sim.clone(),
        parent_activity: base.parent_activity.clone(),
        parent_experiment: Field::Value("esm-hist".to_string()),
        parent_mip_era: base.parent_mip_era.clone(),
        start_timestamp: base.start_timestamp.clone(),
        end_timestamp: base.end_timestamp.clone(),
        tier: Field::Value(tier),
    })
}

/// Derive the post-2100 extension of a scenario.
///
/// The extension starts on January 1 of the year after the base ends and
/// runs to the fixed extension horizon; branch and parent metadata point at
/// the base.
pub fn scenario_extension(base: &ExperimentUniverse) -> CvResult<ExperimentUniverse> {
    let base_end = base
        .end_timestamp
        .as_value()
        .copied()
        .ok_or_else(|| CvError::MissingEndTimestamp {
            experiment: base.drs_name.clone(),
        })?;

    let base_id = base.id();
    let drs_name = format!("{}-ext", base.drs_name);
    let tier = scenario_tier(&drs_name);
    Ok(ExperimentUniverse {
        drs_name,
        description: format!(
            "Extension of the `{base_id}` scenario from {} to {EXTENSION_END_YEAR}.",
            base_end.year() + 1
        ),
        activity: base.activity.clone(),
        required_model_components: base.required_model_components.clone(),
        additional_allowed_model_components: base.additional_allowed_model_components.clone(),
        min_ensemble_size: base.min_ensemble_size,
        branch_information: Field::Value(format!("Branch from the end of `{base_id}`")),
        parent_activity: Field::Value(base.activity.clone()),
        parent_experiment: Field::Value(base_id),
        parent_mip_era: base.parent_mip_era.clone(),
        start_timestamp: Field::Value(ymd(base_end.year() + 1, 1, 1)),
        end_timestamp: Field::Value(ymd(EXTENSION_END_YEAR, 12, 31)),
        tier: Field::Value(tier),
        ..ExperimentUniverse::default()
    })
}

fn project_for(universe: &ExperimentUniverse, min_yrs: f64) -> ExperimentProject {
    let tier = universe.tier.as_value().copied().unwrap_or(1);
    let mut project = ExperimentProject::for_universe(universe, tier);
    project.min_number_yrs_per_sim = Field::Value(min_yrs);
    project.parent_mip_era = Field::Value(CMIP7_ERA.to_string());
    project
}

pub fn build() -> CvResult<FamilySet> {
    let mut set = FamilySet::default();
    let century_yrs = (SCENARIO_END_YEAR - SCENARIO_START_YEAR + 1) as f64;
    let extension_yrs = (EXTENSION_END_YEAR - SCENARIO_END_YEAR) as f64;

    for spec in scenario_specs() {
        let base = concentration_scenario(&spec);
        let esm = scenario_esm(&base)?;
        let base_ext = scenario_extension(&base)?;
        let esm_ext = scenario_extension(&esm)?;

        for universe in [base, esm] {
            let project = project_for(&universe, century_yrs);
            set.push(universe, project);
        }
        for universe in [base_ext, esm_ext] {
            let project = project_for(&universe, extension_yrs);
            set.push(universe, project);
        }
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(suffix: &str) -> ExperimentUniverse {
        let spec = scenario_specs()
            .into_iter()
            .find(|s| s.suffix == suffix)
            .unwrap();
        concentration_scenario(&spec)
    }

    #[test]
    fn test_four_experiments_per_pathway() {
        let set = build().unwrap();
        assert_eq!(set.universe.len(), scenario_specs().len() * 4);
        assert_eq!(set.project.len(), set.universe.len());
    }

    #[test]
    fn test_extension_rewrites_time_bounds() {
        let extension = scenario_extension(&base("vl")).unwrap();
        assert_eq!(extension.drs_name, "scen7-vl-ext");
        assert_eq!(
            extension.start_timestamp.as_value(),
            Some(&ymd(2101, 1, 1))
        );
        assert_eq!(
            extension.end_timestamp.as_value(),
            Some(&ymd(2500, 12, 31))
        );
    }

    #[test]
    fn test_extension_points_at_its_base() {
        let extension = scenario_extension(&base("m")).unwrap();
        assert_eq!(
            extension.parent_experiment.as_value().map(String::as_str),
            Some("scen7-m")
        );
        assert_eq!(
            extension.branch_information.as_value().map(String::as_str),
            Some("Branch from the end of `scen7-m`")
        );
    }

    #[test]
    fn test_extension_requires_an_end_timestamp() {
        let mut unbounded = base("l");
        unbounded.end_timestamp = Field::Null;
        let err = scenario_extension(&unbounded).unwrap_err();
        assert!(matches!(err, CvError::MissingEndTimestamp { .. }));
    }

    #[test]
    fn test_esm_swaps_component_lists() {
        let esm = scenario_esm(&base("h")).unwrap();
        assert_eq!(esm.drs_name, "esm-scen7-h");
        assert_eq!(
            esm.required_model_components,
            vec![ModelComponent::Aogcm, ModelComponent::Bgc]
        );
        assert_eq!(
            esm.additional_allowed_model_components,
            vec![ModelComponent::Aer, ModelComponent::Chem]
        );
    }

    #[test]
    fn test_esm_rewrites_driving_phrase_and_parent() {
        let esm = scenario_esm(&base("vl")).unwrap();
        assert!(esm.description.starts_with("Emissions-driven"));
        assert!(!esm.description.contains("Concentration-driven"));
        assert_eq!(
            esm.parent_experiment.as_value().map(String::as_str),
            Some("esm-hist")
        );
        assert_eq!(
            esm.branch_information.as_value().map(String::as_str),
            Some("Branch from the end of `esm-hist`")
        );
    }

    #[test]
    fn test_esm_requires_historical_parent() {
        let mut orphan = base("m");
        orphan.parent_experiment = Field::Value("picontrol".to_string());
        let err = scenario_esm(&orphan).unwrap_err();
        match err {
            CvError::UnexpectedParent {
                experiment,
                expected,
                found,
            } => {
                assert_eq!(experiment, "scen7-m");
                assert_eq!(expected, "historical");
                assert_eq!(found, "`picontrol`");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_esm_of_extension_is_rejected() {
        // Extensions descend from their base scenario, not historical,
        // so deriving an emissions-driven sibling from one must fail.
        let extension = scenario_extension(&base("h")).unwrap();
        assert!(scenario_esm(&extension).is_err());
    }

    #[test]
    fn test_tier_is_provisionally_uniform() {
        for name in ["scen7-vl", "esm-scen7-m", "scen7-h-ext", "scen7-ml"] {
            assert_eq!(scenario_tier(name), 1, "{name}");
        }
    }
}
