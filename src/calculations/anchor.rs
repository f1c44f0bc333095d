use crate::calendar::days_earlier;
use crate::trip::{AdjustmentStrategy, TripInput};
use chrono::NaiveDate;

/// First calendar day of the plan for the trip's strategy.
pub fn start_date(input: &TripInput) -> NaiveDate {
    match input.strategy {
        AdjustmentStrategy::AfterArrival => input.arrival.date(),
        AdjustmentStrategy::OnPlane => input.departure.date(),
        AdjustmentStrategy::BeforeDeparture { days_before } => {
            days_earlier(input.departure.date(), days_before)
        }
    }
}
