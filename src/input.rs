use crate::calculations::SCHEDULE_DAYS;
use crate::config::PlannerConfig;
use crate::error::InputError;
use crate::trip::{AdjustmentStrategy, TripInput, TripLabels};
use chrono::{Days, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

const CLOCK_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Parse a trip date-time. Dates too close to the end of the calendar for a
/// whole plan of consecutive days are rejected.
pub fn parse_date_time(field: &'static str, raw: &str) -> Result<NaiveDateTime, InputError> {
    let value = raw.trim();
    let parsed = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| InputError::InvalidDateTime {
            field,
            value: value.to_string(),
        })?;
    if parsed
        .date()
        .checked_add_days(Days::new(SCHEDULE_DAYS as u64))
        .is_none()
    {
        return Err(InputError::OutOfRange {
            field,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

pub fn parse_clock_time(field: &'static str, raw: &str) -> Result<NaiveTime, InputError> {
    let value = raw.trim();
    CLOCK_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| InputError::InvalidClockTime {
            field,
            value: value.to_string(),
        })
}

/// Day count for the before-departure strategy. Anything that is not a
/// non-negative integer (absent, blank, negative, free text) becomes `0`.
pub fn parse_days_before(raw: Option<&str>) -> u32 {
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        debug!("days_before not supplied, using 0");
        return 0;
    };
    match text.parse::<u32>() {
        Ok(days) => days,
        Err(_) => {
            debug!(value = text, "days_before is not a non-negative integer, using 0");
            0
        }
    }
}

/// A day count as it arrives from JSON: a number, free text, or anything else a form sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDays {
    Count(i64),
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawDays {
    fn resolve(&self) -> u32 {
        match self {
            RawDays::Count(n) => u32::try_from(*n).unwrap_or_else(|_| {
                debug!(value = n, "days_before out of range, using 0");
                0
            }),
            RawDays::Number(n)
                if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(n) =>
            {
                *n as u32
            }
            RawDays::Number(n) => {
                debug!(value = n, "days_before is not a whole count, using 0");
                0
            }
            RawDays::Text(text) => parse_days_before(Some(text.as_str())),
            RawDays::Other(value) => {
                debug!(%value, "days_before is not a whole number, using 0");
                0
            }
        }
    }
}

/// Unparsed trip as collected from a form, a request body, or a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub departure: String,
    pub arrival: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_before: Option<RawDays>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wake_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_city: Option<String>,
}

impl TripRequest {
    pub fn new(departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        Self {
            departure: departure.into(),
            arrival: arrival.into(),
            ..Self::default()
        }
    }

    pub fn parse(&self) -> Result<(TripInput, TripLabels), InputError> {
        self.parse_with_defaults(&PlannerConfig::default())
    }

    /// Blank bed/wake times fall back to the configured defaults; a blank strategy means after-arrival.
    pub fn parse_with_defaults(
        &self,
        config: &PlannerConfig,
    ) -> Result<(TripInput, TripLabels), InputError> {
        if self.departure.trim().is_empty() {
            return Err(InputError::Missing("departure"));
        }
        if self.arrival.trim().is_empty() {
            return Err(InputError::Missing("arrival"));
        }
        let departure = parse_date_time("departure", &self.departure)?;
        let arrival = parse_date_time("arrival", &self.arrival)?;

        let strategy = match non_blank(&self.strategy) {
            Some(raw) => raw.parse::<AdjustmentStrategy>()?,
            None => AdjustmentStrategy::default(),
        };
        let days = self.days_before.as_ref().map_or(0, RawDays::resolve);
        let strategy = strategy.with_days_before(days);

        let usual_bedtime = match non_blank(&self.bedtime) {
            Some(raw) => parse_clock_time("bedtime", raw)?,
            None => config.default_bedtime,
        };
        let usual_wake_time = match non_blank(&self.wake_time) {
            Some(raw) => parse_clock_time("wake", raw)?,
            None => config.default_wake_time,
        };

        let input = TripInput::new(departure, arrival, strategy, usual_bedtime, usual_wake_time);
        let labels = TripLabels::new(self.departure_city.clone(), self.arrival_city.clone());
        Ok((input, labels))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
