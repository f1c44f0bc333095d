pub mod anchor;
pub mod rounding;
pub mod shift;

pub use anchor::start_date;
pub use rounding::{round_half_up, round_to_hundredths};
pub use shift::{
    SCHEDULE_DAYS, cumulative_shift_minutes, shift_per_day_hours, time_zone_difference_hours,
};
