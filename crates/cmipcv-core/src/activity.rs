//! Activity records: named collections of related experiments (MIPs).

use serde::Serialize;

use crate::document::{CvDocument, CvRecord};
use crate::errors::CvResult;
use crate::field::Field;

/// An activity and its member experiments.
///
/// Membership insertion order is irrelevant; `experiments` and `urls` are
/// serialised sorted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Activity {
    pub id: String,
    pub experiments: Vec<String>,
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_omit")]
    pub drs_name: Field<String>,
}

impl Activity {
    pub fn new(id: impl Into<String>, urls: Vec<&str>) -> Self {
        Self {
            id: id.into(),
            experiments: Vec::new(),
            urls: urls.into_iter().map(String::from).collect(),
            ..Self::default()
        }
    }

    /// Record an experiment as a member, ignoring repeat insertions.
    pub fn add_experiment(&mut self, experiment_id: &str) {
        if !self.experiments.iter().any(|e| e == experiment_id) {
            self.experiments.push(experiment_id.to_string());
        }
    }
}

impl CvRecord for Activity {
    fn entity_type(&self) -> &'static str {
        "activity"
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn document(&self) -> CvResult<CvDocument> {
        let mut sorted = self.clone();
        sorted.experiments.sort();
        sorted.urls.sort();
        CvDocument::from_record(self.entity_type(), self.id(), &sorted)
    }
}
