//! Experiment records at universe and project scope.
//!
//! Universe records hold the domain-general definition of an experiment;
//! project records hold the CMIP7-specific refinements of the same
//! experiment (timing, ensemble size, tier, parentage). The two are written
//! to different vocabulary roots but share the same id, derived by
//! lower-casing the experiment's DRS name.

use chrono::NaiveDate;
use serde::Serialize;

use crate::component::ModelComponent;
use crate::document::{CvDocument, CvRecord};
use crate::errors::CvResult;
use crate::field::Field;

/// An experiment definition at universe scope.
///
/// Identity is the lower-cased [`drs_name`](Self::drs_name).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExperimentUniverse {
    pub drs_name: String,
    pub description: String,
    pub activity: String,
    pub required_model_components: Vec<ModelComponent>,
    pub additional_allowed_model_components: Vec<ModelComponent>,
    pub min_ensemble_size: u32,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub branch_information: Field<String>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub min_number_yrs_per_sim: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub parent_activity: Field<String>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub parent_experiment: Field<String>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub parent_mip_era: Field<String>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub start_timestamp: Field<NaiveDate>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub end_timestamp: Field<NaiveDate>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub tier: Field<u32>,
}

impl CvRecord for ExperimentUniverse {
    fn entity_type(&self) -> &'static str {
        "experiment"
    }

    fn id(&self) -> String {
        self.drs_name.to_lowercase()
    }

    fn document(&self) -> CvResult<CvDocument> {
        CvDocument::from_record(self.entity_type(), self.id(), self)
    }
}

/// A project-scope refinement of a universe experiment.
///
/// The `activity` field links the experiment into its activity's membership
/// list; it is not written on the experiment document itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExperimentProject {
    pub id: String,
    #[serde(skip)]
    pub activity: String,
    pub tier: u32,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub branch_information: Field<String>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub start_timestamp: Field<NaiveDate>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub end_timestamp: Field<NaiveDate>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub min_number_yrs_per_sim: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub min_ensemble_size: Field<u32>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub parent_activity: Field<String>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub parent_experiment: Field<String>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub parent_mip_era: Field<String>,
}

impl ExperimentProject {
    /// Start a project record for a universe experiment, inheriting its id
    /// and activity.
    pub fn for_universe(universe: &ExperimentUniverse, tier: u32) -> Self {
        Self {
            id: universe.id(),
            activity: universe.activity.clone(),
            tier,
            ..Self::default()
        }
    }
}

impl CvRecord for ExperimentProject {
    fn entity_type(&self) -> &'static str {
        "experiment"
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn document(&self) -> CvResult<CvDocument> {
        CvDocument::from_record(self.entity_type(), self.id(), self)
    }
}
