//! The activities (MIPs) participating in the CMIP7 fast track.

use cmipcv_core::{Activity, Field};

/// All fast-track activities with their reference papers.
///
/// Membership lists start empty; experiments are linked in as their
/// project records are inserted into the collection.
pub fn fast_track_activities() -> Vec<Activity> {
    let mut activities = vec![
        activity(
            "cmip",
            "CMIP",
            "DECK and historical simulations, the common basis required of all \
             models participating in CMIP7.",
            vec!["https://doi.org/10.5194/gmd-18-6671-2025"],
        ),
        activity(
            "c4mip",
            "C4MIP",
            "Coupled Climate-Carbon Cycle Model Intercomparison Project. \
             Quantification of carbon cycle feedbacks and carbon dioxide \
             removal responses.",
            vec![
                "https://doi.org/10.5194/gmd-17-8141-2024",
                "https://doi.org/10.5194/egusphere-2024-3356",
                "https://doi.org/10.5194/gmd-9-2853-2016",
            ],
        ),
        activity(
            "cfmip",
            "CFMIP",
            "Cloud Feedback Model Intercomparison Project. Assessment of cloud \
             feedbacks and cloud adjustments under idealised forcing.",
            vec!["https://doi.org/10.5194/gmd-10-359-2017"],
        ),
        activity(
            "damip",
            "DAMIP",
            "Detection and Attribution Model Intercomparison Project. \
             Historical simulations with individual forcings for attribution \
             of observed change.",
            vec!["https://doi.org/10.5194/gmd-9-3685-2016"],
        ),
        activity(
            "pmip",
            "PMIP",
            "Paleoclimate Modelling Intercomparison Project. Simulation of \
             well-documented past climate states.",
            vec!["https://doi.org/10.5194/gmd-11-1033-2018"],
        ),
        activity(
            "scenariomip",
            "ScenarioMIP",
            "Future scenario experiments. Exploration of the future climate \
             under a (selected) range of possible boundary conditions",
            vec!["https://doi.org/10.5194/egusphere-2024-3765"],
        ),
        activity(
            "aerchemmip",
            "AerChemMIP",
            "Aerosols and Chemistry Model Intercomparison Project. Scenario \
             variants with interactive atmospheric chemistry.",
            vec!["https://doi.org/10.5194/gmd-10-585-2017"],
        ),
        activity(
            "geomip",
            "GeoMIP",
            "Geoengineering Model Intercomparison Project. Climate response \
             to proposed radiation management interventions.",
            vec!["https://doi.org/10.5194/gmd-8-3379-2015"],
        ),
    ];
    activities.sort_by(|a, b| a.id.cmp(&b.id));
    activities
}

fn activity(id: &str, drs_name: &str, description: &str, urls: Vec<&str>) -> Activity {
    let mut activity = Activity::new(id, urls);
    activity.drs_name = Field::Value(drs_name.to_string());
    activity.description = Field::Value(description.to_string());
    activity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_ids_unique() {
        let activities = fast_track_activities();
        for activity in &activities {
            assert_eq!(
                activities.iter().filter(|a| a.id == activity.id).count(),
                1,
                "duplicate activity id {}",
                activity.id
            );
        }
    }

    #[test]
    fn test_every_activity_has_reference_urls() {
        for activity in fast_track_activities() {
            assert!(
                !activity.urls.is_empty(),
                "activity {} has no reference URLs",
                activity.id
            );
            for url in &activity.urls {
                assert!(url.starts_with("https://doi.org/"), "non-DOI url {url}");
            }
        }
    }

    #[test]
    fn test_ids_are_lowercased_drs_names() {
        for activity in fast_track_activities() {
            let drs_name = activity.drs_name.as_value().unwrap();
            assert_eq!(activity.id, drs_name.to_lowercase());
        }
    }
}
