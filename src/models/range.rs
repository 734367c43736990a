use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A selectable week or month window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRangeOption {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRangeOption {
    /// Monday through the following Sunday.
    pub fn is_week(&self) -> bool {
        self.start.weekday() == Weekday::Mon && self.end == self.start + Duration::days(6)
    }

    /// First through last calendar day of a single month.
    pub fn is_month(&self) -> bool {
        self.start.day() == 1
            && self.end.year() == self.start.year()
            && self.end.month() == self.start.month()
            && self.end.succ_opt().map(|d| d.day() == 1).unwrap_or(false)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
