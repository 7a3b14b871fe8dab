//! The in-memory collection of CV records built during a generation pass.

use std::path::{Path, PathBuf};

use crate::activity::Activity;
use crate::document::CvRecord;
use crate::errors::{CvError, CvResult};
use crate::experiment::{ExperimentProject, ExperimentUniverse};

/// All records for one generation run.
///
/// Records are constructed in memory, linked, then written once; there is no
/// update or delete. Regeneration overwrites the output files.
#[derive(Debug, Clone, Default)]
pub struct CvCollection {
    activities: Vec<Activity>,
    experiments_universe: Vec<ExperimentUniverse>,
    experiments_project: Vec<ExperimentProject>,
}

impl CvCollection {
    /// Create a collection seeded with the known activities.
    pub fn with_activities(activities: Vec<Activity>) -> CvResult<Self> {
        let mut collection = Self::default();
        for activity in activities {
            if collection.activity(&activity.id).is_some() {
                return Err(CvError::DuplicateId {
                    entity: "activity",
                    id: activity.id,
                });
            }
            collection.activities.push(activity);
        }
        Ok(collection)
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn experiments_universe(&self) -> &[ExperimentUniverse] {
        &self.experiments_universe
    }

    pub fn experiments_project(&self) -> &[ExperimentProject] {
        &self.experiments_project
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Add a universe-scope experiment, rejecting duplicate ids.
    pub fn insert_universe(&mut self, experiment: ExperimentUniverse) -> CvResult<()> {
        let id = experiment.id();
        if self.experiments_universe.iter().any(|e| e.id() == id) {
            return Err(CvError::DuplicateId {
                entity: "universe experiment",
                id,
            });
        }
        self.experiments_universe.push(experiment);
        Ok(())
    }

    /// Add a project-scope experiment and link it into its activity.
    ///
    /// The experiment's activity must already exist; membership is
    /// idempotent, so linking the same experiment twice still yields a
    /// single entry in the activity's list.
    pub fn insert_project(&mut self, experiment: ExperimentProject) -> CvResult<()> {
        if self
            .experiments_project
            .iter()
            .any(|e| e.id == experiment.id)
        {
            return Err(CvError::DuplicateId {
                entity: "project experiment",
                id: experiment.id,
            });
        }

        let activity = self
            .activities
            .iter_mut()
            .find(|a| a.id == experiment.activity)
            .ok_or_else(|| CvError::UnknownActivity {
                experiment: experiment.id.clone(),
                activity: experiment.activity.clone(),
            })?;
        activity.add_experiment(&experiment.id);

        self.experiments_project.push(experiment);
        Ok(())
    }

    /// Write every record: universe experiments under `universe_root`,
    /// project experiments and activities under `project_root`.
    ///
    /// The `experiment/` and `activity/` sub-directories must already exist.
    /// Returns the written paths in write order.
    pub fn write_all(&self, universe_root: &Path, project_root: &Path) -> CvResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        for experiment in &self.experiments_universe {
            written.push(experiment.document()?.write_to(universe_root)?);
        }
        for experiment in &self.experiments_project {
            written.push(experiment.document()?.write_to(project_root)?);
        }
        for activity in &self.activities {
            written.push(activity.document()?.write_to(project_root)?);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ModelComponent;
    use crate::field::Field;

    fn seeded() -> CvCollection {
        CvCollection::with_activities(vec![
            Activity::new("cmip", vec!["https://doi.org/10.5194/gmd-18-6671-2025"]),
            Activity::new("cfmip", vec!["https://doi.org/10.5194/gmd-10-359-2017"]),
        ])
        .unwrap()
    }

    fn universe(drs_name: &str, activity: &str) -> ExperimentUniverse {
        ExperimentUniverse {
            drs_name: drs_name.to_string(),
            description: format!("Test entry for {drs_name}"),
            activity: activity.to_string(),
            required_model_components: vec![ModelComponent::Aogcm],
            min_ensemble_size: 1,
            tier: Field::Value(1),
            ..ExperimentUniverse::default()
        }
    }

    #[test]
    fn test_duplicate_activity_rejected() {
        let err = CvCollection::with_activities(vec![
            Activity::new("cmip", vec![]),
            Activity::new("cmip", vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, CvError::DuplicateId { entity: "activity", .. }));
    }

    #[test]
    fn test_duplicate_universe_experiment_rejected() {
        let mut collection = seeded();
        collection.insert_universe(universe("amip", "cmip")).unwrap();
        let err = collection.insert_universe(universe("AMIP", "cmip")).unwrap_err();
        assert!(matches!(
            err,
            CvError::DuplicateId { entity: "universe experiment", .. }
        ));
    }

    #[test]
    fn test_project_links_into_activity() {
        let mut collection = seeded();
        let experiment = ExperimentProject::for_universe(&universe("abrupt-2xCO2", "cfmip"), 1);
        collection.insert_project(experiment).unwrap();

        let activity = collection.activity("cfmip").unwrap();
        assert_eq!(activity.experiments, vec!["abrupt-2xco2"]);
    }

    #[test]
    fn test_unknown_activity_is_fatal() {
        let mut collection = seeded();
        let experiment = ExperimentProject::for_universe(&universe("ssp585", "scenariomip"), 1);
        let err = collection.insert_project(experiment).unwrap_err();
        match err {
            CvError::UnknownActivity { experiment, activity } => {
                assert_eq!(experiment, "ssp585");
                assert_eq!(activity, "scenariomip");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_membership_unique_even_when_linked_twice() {
        let mut collection = seeded();
        let first = ExperimentProject::for_universe(&universe("amip", "cmip"), 1);
        collection.insert_project(first).unwrap();

        // A second experiment with a distinct id but pre-linked membership
        collection
            .activities
            .iter_mut()
            .find(|a| a.id == "cmip")
            .unwrap()
            .add_experiment("amip");

        let activity = collection.activity("cmip").unwrap();
        assert_eq!(
            activity.experiments.iter().filter(|e| *e == "amip").count(),
            1
        );
    }

    #[test]
    fn test_write_all_places_records_by_scope() {
        let universe_dir = tempfile::tempdir().unwrap();
        let project_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(universe_dir.path().join("experiment")).unwrap();
        std::fs::create_dir(project_dir.path().join("experiment")).unwrap();
        std::fs::create_dir(project_dir.path().join("activity")).unwrap();

        let mut collection = seeded();
        let entry = universe("amip", "cmip");
        let project = ExperimentProject::for_universe(&entry, 1);
        collection.insert_universe(entry).unwrap();
        collection.insert_project(project).unwrap();

        let written = collection
            .write_all(universe_dir.path(), project_dir.path())
            .unwrap();
        // one universe experiment, one project experiment, two activities
        assert_eq!(written.len(), 4);
        assert!(universe_dir
            .path()
            .join("experiment")
            .join("amip.json")
            .exists());
        assert!(project_dir
            .path()
            .join("experiment")
            .join("amip.json")
            .exists());
        assert!(project_dir
            .path()
            .join("activity")
            .join("cmip.json")
            .exists());
    }
}
