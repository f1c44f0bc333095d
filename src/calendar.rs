use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// `count` consecutive calendar days beginning at `start` (inclusive).
pub fn consecutive_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(count);
    let mut current = start;
    for _ in 0..count {
        days.push(current);
        current = current.succ_opt().unwrap_or(current);
    }
    days
}

/// The date `n` days earlier, saturating at the earliest representable date.
pub fn days_earlier(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(n)))
        .unwrap_or(NaiveDate::MIN)
}

/// Place a wall-clock time on a calendar day.
pub fn at_clock(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Move a date-time by a signed number of minutes, carrying across midnight.
pub fn shift_by_minutes(at: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    Duration::try_minutes(minutes)
        .and_then(|delta| at.checked_add_signed(delta))
        .unwrap_or(if minutes < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}

/// Days since 1970-01-01, the physical representation of a polars `Date`.
pub fn date_to_epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

pub fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn epoch_round_trip() {
        assert_eq!(date_to_epoch_days(d(1970, 1, 1)), 0);
        assert_eq!(date_to_epoch_days(d(1970, 1, 2)), 1);
        assert_eq!(date_from_epoch_days(19_784), Some(d(2024, 3, 2)));
    }

    #[test]
    fn days_earlier_crosses_month_boundary() {
        assert_eq!(days_earlier(d(2024, 3, 1), 1), d(2024, 2, 29));
        assert_eq!(days_earlier(d(2024, 3, 10), 0), d(2024, 3, 10));
    }
}
