pub mod format;

pub use format::{
    format_date, format_number, month_label, truncate_address, week_label,
    DAILY_DISTRIBUTION_LABEL,
};
