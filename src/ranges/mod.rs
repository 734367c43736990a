pub mod generator;

pub use generator::{
    default_all_time_start, last_day_of_month, local_today, monday_of_week, sunday_of_week,
    PeriodRangeGenerator, DEFAULT_MONTH_OPTIONS, DEFAULT_WEEK_OPTIONS,
};
