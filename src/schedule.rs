use crate::calculations::{
    SCHEDULE_DAYS, cumulative_shift_minutes, shift_per_day_hours, start_date,
    time_zone_difference_hours,
};
use crate::calendar::{at_clock, consecutive_days, date_to_epoch_days, shift_by_minutes};
use crate::render::{format_clock, format_day_label};
use crate::trip::TripInput;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Which way the destination clock sits relative to the origin clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ahead,
    Behind,
}

impl Direction {
    /// A difference of exactly zero is reported as `Behind`.
    pub fn from_difference(hours: i64) -> Self {
        if hours > 0 {
            Direction::Ahead
        } else {
            Direction::Behind
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ahead => "ahead",
            Direction::Behind => "behind",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// Row label; the shifted clock values below may land on a neighbouring date.
    pub date: NaiveDate,
    pub bedtime: NaiveDateTime,
    pub wake_time: NaiveDateTime,
    pub shift_minutes: i64,
}

impl ScheduleDay {
    pub fn bedtime_clock(&self) -> NaiveTime {
        self.bedtime.time()
    }

    pub fn wake_time_clock(&self) -> NaiveTime {
        self.wake_time.time()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub time_zone_difference_hours: i64,
    pub shift_per_day_hours: f64,
    pub direction: Direction,
    pub days: Vec<ScheduleDay>,
}

/// Build the five-day sleep plan for a trip.
pub fn compute(input: &TripInput) -> ScheduleResult {
    let tz_diff = time_zone_difference_hours(input.departure, input.arrival);
    let per_day = shift_per_day_hours(tz_diff);
    let start = start_date(input);

    let days = consecutive_days(start, SCHEDULE_DAYS)
        .into_iter()
        .enumerate()
        .map(|(idx, date)| {
            let shift_minutes = cumulative_shift_minutes(per_day, idx);
            ScheduleDay {
                date,
                bedtime: shift_by_minutes(at_clock(date, input.usual_bedtime), shift_minutes),
                wake_time: shift_by_minutes(
                    at_clock(date, input.usual_wake_time),
                    shift_minutes,
                ),
                shift_minutes,
            }
        })
        .collect();

    debug!(
        tz_diff,
        per_day,
        %start,
        strategy = %input.strategy,
        "computed sleep schedule"
    );

    ScheduleResult {
        time_zone_difference_hours: tz_diff,
        shift_per_day_hours: per_day,
        direction: Direction::from_difference(tz_diff),
        days,
    }
}

impl ScheduleResult {
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    /// Signed hour offset with its direction, e.g. `+10h (ahead)`.
    pub fn difference_label(&self) -> String {
        format!(
            "{:+}h ({})",
            self.time_zone_difference_hours, self.direction
        )
    }

    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("tz_diff={:+}h", self.time_zone_difference_hours));
        parts.push(format!("direction={}", self.direction));
        parts.push(format!("shift/day={:+.2}h", self.shift_per_day_hours));
        if let (Some(first), Some(last)) = (self.days.first(), self.days.last()) {
            parts.push(format!("days={}..{}", first.date, last.date));
        }
        parts.join(", ")
    }

    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(5);

        let labels: Vec<String> = self.days.iter().map(|d| format_day_label(d.date)).collect();
        columns.push(Series::new(PlSmallStr::from_static("day"), labels).into_column());

        let dates: Vec<i32> = self
            .days
            .iter()
            .map(|d| date_to_epoch_days(d.date))
            .collect();
        columns.push(
            Series::new(PlSmallStr::from_static("date"), dates)
                .cast(&DataType::Date)?
                .into_column(),
        );

        let bedtimes: Vec<String> = self.days.iter().map(|d| format_clock(d.bedtime)).collect();
        columns.push(Series::new(PlSmallStr::from_static("bedtime"), bedtimes).into_column());

        let wake_times: Vec<String> = self
            .days
            .iter()
            .map(|d| format_clock(d.wake_time))
            .collect();
        columns.push(Series::new(PlSmallStr::from_static("wake_time"), wake_times).into_column());

        let shifts: Vec<i64> = self.days.iter().map(|d| d.shift_minutes).collect();
        columns.push(
            Series::new(PlSmallStr::from_static("shift_minutes"), shifts).into_column(),
        );

        DataFrame::new(columns)
    }
}
