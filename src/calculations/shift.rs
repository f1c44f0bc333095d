use super::rounding::{round_half_up, round_to_hundredths};
use chrono::NaiveDateTime;

/// Length of every generated plan, independent of strategy or trip length.
pub const SCHEDULE_DAYS: usize = 5;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Destination clock minus origin clock, in whole hours.
///
/// The two readings carry no zone information, so flight time is folded into the result.
pub fn time_zone_difference_hours(departure: NaiveDateTime, arrival: NaiveDateTime) -> i64 {
    let elapsed_ms = (arrival - departure).num_milliseconds() as f64;
    round_half_up(elapsed_ms / MILLIS_PER_HOUR) as i64
}

pub fn shift_per_day_hours(time_zone_difference_hours: i64) -> f64 {
    round_to_hundredths(time_zone_difference_hours as f64 / SCHEDULE_DAYS as f64)
}

/// Minutes added to the usual clock times on `day_index` (0-based).
///
/// The multiplier is `day_index + 1`, so the first day already carries one full increment.
pub fn cumulative_shift_minutes(shift_per_day_hours: f64, day_index: usize) -> i64 {
    round_half_up(shift_per_day_hours * 60.0 * (day_index + 1) as f64) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn difference_rounds_half_hours_up() {
        assert_eq!(
            time_zone_difference_hours(dt(2024, 3, 1, 22, 0), dt(2024, 3, 2, 8, 0)),
            10
        );
        assert_eq!(
            time_zone_difference_hours(dt(2024, 3, 1, 10, 0), dt(2024, 3, 1, 15, 30)),
            6
        );
        assert_eq!(
            time_zone_difference_hours(dt(2024, 3, 1, 15, 30), dt(2024, 3, 1, 10, 0)),
            -5
        );
        assert_eq!(
            time_zone_difference_hours(dt(2024, 3, 1, 10, 0), dt(2024, 3, 1, 10, 29)),
            0
        );
    }

    #[test]
    fn per_day_shift_keeps_two_decimals() {
        assert_eq!(shift_per_day_hours(10), 2.0);
        assert_eq!(shift_per_day_hours(-5), -1.0);
        assert_eq!(shift_per_day_hours(7), 1.4);
        assert_eq!(shift_per_day_hours(0), 0.0);
    }

    #[test]
    fn cumulative_shift_compounds_from_one() {
        let minutes: Vec<i64> = (0..SCHEDULE_DAYS)
            .map(|i| cumulative_shift_minutes(1.4, i))
            .collect();
        assert_eq!(minutes, vec![84, 168, 252, 336, 420]);
        assert_eq!(cumulative_shift_minutes(-1.0, 0), -60);
    }
}
