pub mod batch;
pub mod calculations;
pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod input;
pub mod logging;
pub mod render;
pub mod schedule;
pub mod trip;
pub mod wizard;

pub use batch::{BatchOutcome, BatchSummary, compute_batch};
pub use calculations::SCHEDULE_DAYS;
pub use config::PlannerConfig;
pub use error::{ConfigError, InputError, PlannerError, PlannerResult};
pub use export::{
    PlanSnapshot, load_plan_from_json, load_trip_from_json, load_trips_from_csv,
    save_plan_to_csv, save_plan_to_json, write_plan_csv,
};
pub use input::{RawDays, TripRequest};
pub use render::{format_clock, format_day_label, render_plan};
pub use schedule::{Direction, ScheduleDay, ScheduleResult, compute};
pub use trip::{AdjustmentStrategy, TripInput, TripLabels};
pub use wizard::{Wizard, WizardStep};
