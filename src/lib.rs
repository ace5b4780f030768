//! Incident-response reports (MTTA/MTTR) from Opsgenie alert history.
//!
//! Pipeline: [`fetch`] pages alerts out of the API, [`hours`] optionally splits
//! them into business-hours and after-hours cohorts, and [`report`] aggregates
//! and renders each cohort. [`runner::generate_report`] wires the three.

pub mod cli;
pub mod duration_fmt;
pub mod fetch;
pub mod genie;
pub mod hours;
pub mod model;
pub mod report;
pub mod runner;
pub mod util;
