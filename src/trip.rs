use crate::error::InputError;
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When the traveler starts moving their sleep toward the destination clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdjustmentStrategy {
    #[default]
    AfterArrival,
    OnPlane,
    BeforeDeparture {
        #[serde(default)]
        days_before: u32,
    },
}

impl AdjustmentStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentStrategy::AfterArrival => "after-arrival",
            AdjustmentStrategy::OnPlane => "on-plane",
            AdjustmentStrategy::BeforeDeparture { .. } => "before-departure",
        }
    }

    pub fn variants() -> &'static [(&'static str, &'static str)] {
        &[
            ("after-arrival", "Start after arriving"),
            ("on-plane", "Start after leaving (on the plane)"),
            (
                "before-departure",
                "Start up to X days before departing",
            ),
        ]
    }

    /// Replaces the day count of a `BeforeDeparture` strategy; other variants are returned as-is.
    pub fn with_days_before(self, days_before: u32) -> Self {
        match self {
            AdjustmentStrategy::BeforeDeparture { .. } => {
                AdjustmentStrategy::BeforeDeparture { days_before }
            }
            other => other,
        }
    }

    pub fn days_before(&self) -> Option<u32> {
        match self {
            AdjustmentStrategy::BeforeDeparture { days_before } => Some(*days_before),
            _ => None,
        }
    }
}

impl fmt::Display for AdjustmentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjustmentStrategy::BeforeDeparture { days_before } => {
                write!(f, "{} ({} days)", self.as_str(), days_before)
            }
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

impl FromStr for AdjustmentStrategy {
    type Err = InputError;

    /// Parses the strategy key only; a `before-departure` result carries zero days until
    /// [`with_days_before`](Self::with_days_before) is applied.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "after-arrival" => Ok(AdjustmentStrategy::AfterArrival),
            "on-plane" => Ok(AdjustmentStrategy::OnPlane),
            "before-departure" => Ok(AdjustmentStrategy::BeforeDeparture { days_before: 0 }),
            _ => Err(InputError::UnknownStrategy(s.trim().to_string())),
        }
    }
}

/// Everything the calculator needs about one trip. Both instants are naive wall-clock
/// values as read off the departure and arrival clocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripInput {
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub strategy: AdjustmentStrategy,
    pub usual_bedtime: NaiveTime,
    pub usual_wake_time: NaiveTime,
}

impl TripInput {
    pub fn new(
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        strategy: AdjustmentStrategy,
        usual_bedtime: NaiveTime,
        usual_wake_time: NaiveTime,
    ) -> Self {
        Self {
            departure,
            arrival,
            strategy,
            usual_bedtime,
            usual_wake_time,
        }
    }
}

/// Display-only city names attached to a trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_city: Option<String>,
}

impl TripLabels {
    pub fn new(departure_city: Option<String>, arrival_city: Option<String>) -> Self {
        Self {
            departure_city: non_blank(departure_city),
            arrival_city: non_blank(arrival_city),
        }
    }

    pub fn route(&self) -> Option<String> {
        match (&self.departure_city, &self.arrival_city) {
            (Some(from), Some(to)) => Some(format!("{from} -> {to}")),
            (Some(from), None) => Some(format!("from {from}")),
            (None, Some(to)) => Some(format!("to {to}")),
            (None, None) => None,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
