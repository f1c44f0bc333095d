//! Step-by-step collection of a trip, one answer per step.
//!
//! The wizard owns only navigation and the answers gathered so far. The
//! schedule itself is computed once, when the last answer is accepted.

use crate::config::PlannerConfig;
use crate::error::InputError;
use crate::input::{parse_clock_time, parse_date_time, parse_days_before};
use crate::schedule::{ScheduleResult, compute};
use crate::trip::{AdjustmentStrategy, TripInput, TripLabels};
use chrono::{NaiveDateTime, NaiveTime};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Landing,
    DepartureCity,
    ArrivalCity,
    DepartureTime,
    ArrivalTime,
    Strategy,
    DaysBefore,
    Bedtime,
    WakeTime,
    Results,
}

impl WizardStep {
    /// Step that follows this one. `DaysBefore` is only visited for the before-departure strategy.
    pub fn next(self, strategy: Option<AdjustmentStrategy>) -> Self {
        match self {
            WizardStep::Landing => WizardStep::DepartureCity,
            WizardStep::DepartureCity => WizardStep::ArrivalCity,
            WizardStep::ArrivalCity => WizardStep::DepartureTime,
            WizardStep::DepartureTime => WizardStep::ArrivalTime,
            WizardStep::ArrivalTime => WizardStep::Strategy,
            WizardStep::Strategy => match strategy {
                Some(AdjustmentStrategy::BeforeDeparture { .. }) => WizardStep::DaysBefore,
                _ => WizardStep::Bedtime,
            },
            WizardStep::DaysBefore => WizardStep::Bedtime,
            WizardStep::Bedtime => WizardStep::WakeTime,
            WizardStep::WakeTime | WizardStep::Results => WizardStep::Results,
        }
    }

    pub fn previous(self, strategy: Option<AdjustmentStrategy>) -> Self {
        match self {
            WizardStep::Landing | WizardStep::DepartureCity => WizardStep::Landing,
            WizardStep::ArrivalCity => WizardStep::DepartureCity,
            WizardStep::DepartureTime => WizardStep::ArrivalCity,
            WizardStep::ArrivalTime => WizardStep::DepartureTime,
            WizardStep::Strategy => WizardStep::ArrivalTime,
            WizardStep::DaysBefore => WizardStep::Strategy,
            WizardStep::Bedtime => match strategy {
                Some(AdjustmentStrategy::BeforeDeparture { .. }) => WizardStep::DaysBefore,
                _ => WizardStep::Strategy,
            },
            WizardStep::WakeTime => WizardStep::Bedtime,
            WizardStep::Results => WizardStep::WakeTime,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            WizardStep::Landing => "Plan your sleep to beat jet lag. Press enter to start",
            WizardStep::DepartureCity => "Departure city (optional)",
            WizardStep::ArrivalCity => "Arrival city (optional)",
            WizardStep::DepartureTime => "Departure date & time (YYYY-MM-DDTHH:MM)",
            WizardStep::ArrivalTime => "Arrival date & time (YYYY-MM-DDTHH:MM)",
            WizardStep::Strategy => {
                "When do you want to start adjusting? [1] after arriving [2] on the plane [3] days before departing"
            }
            WizardStep::DaysBefore => "How many days before departing?",
            WizardStep::Bedtime => "Usual bedtime (HH:MM, blank for default)",
            WizardStep::WakeTime => "Usual wake-up time (HH:MM, blank for default)",
            WizardStep::Results => "Your 5-day jet lag plan",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    config: PlannerConfig,
    departure_city: Option<String>,
    arrival_city: Option<String>,
    departure: Option<NaiveDateTime>,
    arrival: Option<NaiveDateTime>,
    strategy: Option<AdjustmentStrategy>,
    bedtime: Option<NaiveTime>,
    wake_time: Option<NaiveTime>,
    result: Option<ScheduleResult>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl Wizard {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            step: WizardStep::Landing,
            config,
            departure_city: None,
            arrival_city: None,
            departure: None,
            arrival: None,
            strategy: None,
            bedtime: None,
            wake_time: None,
            result: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn result(&self) -> Option<&ScheduleResult> {
        self.result.as_ref()
    }

    pub fn labels(&self) -> TripLabels {
        TripLabels::new(self.departure_city.clone(), self.arrival_city.clone())
    }

    /// Record `answer` for the current step and move on. A rejected answer
    /// leaves the wizard on the same step.
    pub fn advance(&mut self, answer: &str) -> Result<WizardStep, InputError> {
        let answer = answer.trim();
        match self.step {
            WizardStep::Landing | WizardStep::Results => {}
            WizardStep::DepartureCity => self.departure_city = Some(answer.to_string()),
            WizardStep::ArrivalCity => self.arrival_city = Some(answer.to_string()),
            WizardStep::DepartureTime => {
                self.departure = Some(parse_date_time("departure", answer)?);
            }
            WizardStep::ArrivalTime => {
                self.arrival = Some(parse_date_time("arrival", answer)?);
            }
            WizardStep::Strategy => self.strategy = Some(parse_strategy_choice(answer)?),
            WizardStep::DaysBefore => {
                let days = parse_days_before(Some(answer));
                self.strategy = self.strategy.map(|s| s.with_days_before(days));
            }
            WizardStep::Bedtime => {
                self.bedtime = Some(if answer.is_empty() {
                    self.config.default_bedtime
                } else {
                    parse_clock_time("bedtime", answer)?
                });
            }
            WizardStep::WakeTime => {
                self.wake_time = Some(if answer.is_empty() {
                    self.config.default_wake_time
                } else {
                    parse_clock_time("wake", answer)?
                });
                self.result = Some(compute(&self.trip_input()?));
            }
        }

        let next = self.step.next(self.strategy);
        debug!(from = ?self.step, to = ?next, "wizard advanced");
        self.step = next;
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        if self.step == WizardStep::Results {
            self.result = None;
        }
        self.step = self.step.previous(self.strategy);
        self.step
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.config.clone());
    }

    fn trip_input(&self) -> Result<TripInput, InputError> {
        Ok(TripInput::new(
            self.departure.ok_or(InputError::Missing("departure"))?,
            self.arrival.ok_or(InputError::Missing("arrival"))?,
            self.strategy.unwrap_or_default(),
            self.bedtime.ok_or(InputError::Missing("bedtime"))?,
            self.wake_time.ok_or(InputError::Missing("wake time"))?,
        ))
    }
}

/// Accepts the menu number or the strategy key.
fn parse_strategy_choice(answer: &str) -> Result<AdjustmentStrategy, InputError> {
    match answer {
        "" | "1" => Ok(AdjustmentStrategy::AfterArrival),
        "2" => Ok(AdjustmentStrategy::OnPlane),
        "3" => Ok(AdjustmentStrategy::BeforeDeparture { days_before: 0 }),
        other => other.parse(),
    }
}
