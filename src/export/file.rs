use super::PlanSnapshot;
use crate::error::{PlannerError, PlannerResult};
use crate::input::{RawDays, TripRequest};
use crate::render::{format_clock, format_day_label};
use crate::schedule::ScheduleResult;
use crate::trip::TripLabels;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn save_plan_to_json<P: AsRef<Path>>(
    result: &ScheduleResult,
    labels: &TripLabels,
    path: P,
) -> PlannerResult<()> {
    let snapshot = PlanSnapshot::new(labels.clone(), result.clone());
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    info!(path = %path.as_ref().display(), "plan written as json");
    Ok(())
}

pub fn load_plan_from_json<P: AsRef<Path>>(path: P) -> PlannerResult<PlanSnapshot> {
    let file = File::open(path)?;
    let snapshot: PlanSnapshot = serde_json::from_reader(file)?;
    Ok(snapshot)
}

#[derive(Debug, Serialize)]
struct PlanCsvRecord {
    day: String,
    date: String,
    bedtime: String,
    wake_time: String,
    shift_minutes: i64,
}

pub fn save_plan_to_csv<P: AsRef<Path>>(result: &ScheduleResult, path: P) -> PlannerResult<()> {
    let file = File::create(path.as_ref())?;
    write_plan_csv(result, file)?;
    info!(path = %path.as_ref().display(), rows = result.days.len(), "plan written as csv");
    Ok(())
}

/// One CSV row per day, with a header.
pub fn write_plan_csv<W: Write>(result: &ScheduleResult, out: W) -> PlannerResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    for day in &result.days {
        writer.serialize(PlanCsvRecord {
            day: format_day_label(day.date),
            date: day.date.to_string(),
            bedtime: format_clock(day.bedtime),
            wake_time: format_clock(day.wake_time),
            shift_minutes: day.shift_minutes,
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_trip_from_json<P: AsRef<Path>>(path: P) -> PlannerResult<TripRequest> {
    let file = File::open(path)?;
    let request: TripRequest = serde_json::from_reader(file)?;
    Ok(request)
}

#[derive(Debug, Default, Deserialize)]
struct TripCsvRecord {
    departure: String,
    arrival: String,
    #[serde(default)]
    strategy: String,
    #[serde(default)]
    days_before: String,
    #[serde(default)]
    bedtime: String,
    #[serde(default)]
    wake_time: String,
    #[serde(default)]
    departure_city: String,
    #[serde(default)]
    arrival_city: String,
}

impl From<TripCsvRecord> for TripRequest {
    fn from(record: TripCsvRecord) -> Self {
        TripRequest {
            departure: record.departure,
            arrival: record.arrival,
            strategy: optional(record.strategy),
            days_before: optional(record.days_before).map(RawDays::Text),
            bedtime: optional(record.bedtime),
            wake_time: optional(record.wake_time),
            departure_city: optional(record.departure_city),
            arrival_city: optional(record.arrival_city),
        }
    }
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Read trips from a CSV file with a header row. Columns other than
/// `departure` and `arrival` may be omitted or left blank.
pub fn load_trips_from_csv<P: AsRef<Path>>(path: P) -> PlannerResult<Vec<TripRequest>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;
    let mut trips = Vec::new();
    for (idx, record) in reader.deserialize::<TripCsvRecord>().enumerate() {
        let record = record.map_err(|err| {
            PlannerError::InvalidData(format!("trip row {}: {err}", idx + 1))
        })?;
        trips.push(TripRequest::from(record));
    }
    info!(path = %path.as_ref().display(), trips = trips.len(), "trips loaded from csv");
    Ok(trips)
}
