//! Experiment-family builders.
//!
//! One module per family; each exposes a pure `build` function returning
//! the family's records. Shared mutable state between families is avoided
//! on purpose: the orchestrator in the crate root owns composition and
//! linking.

pub mod abrupt;
pub mod amip;
pub mod attribution;
pub mod chemistry;
pub mod co2_ramp;
pub mod control;
pub mod flat10;
pub mod geoengineering;
pub mod historical;
pub mod paleo;
pub mod scenario;

use chrono::NaiveDate;

/// Branch guidance shared by the idealised experiments starting from the
/// pre-industrial control state.
pub(crate) const PICONTROL_BRANCH: &str =
    "Branch from `piControl` at a time of your choosing";

/// The `parent_mip_era` written on project records.
pub(crate) const CMIP7_ERA: &str = "cmip7";

/// Shorthand for literal calendar dates in the experiment tables.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
