use crate::schedule::ScheduleResult;
use crate::trip::TripLabels;
use serde::{Deserialize, Serialize};

pub mod file;

pub use file::{
    load_plan_from_json, load_trip_from_json, load_trips_from_csv, save_plan_to_csv,
    save_plan_to_json, write_plan_csv,
};

/// A computed plan together with the labels it was shown with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    #[serde(default)]
    pub labels: TripLabels,
    pub result: ScheduleResult,
}

impl PlanSnapshot {
    pub fn new(labels: TripLabels, result: ScheduleResult) -> Self {
        Self { labels, result }
    }
}
