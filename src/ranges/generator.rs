use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::{
    config::LeaderboardSettings,
    models::{DateRangeOption, Period},
    utils::{month_label, week_label},
};

pub const DEFAULT_WEEK_OPTIONS: usize = 8;
pub const DEFAULT_MONTH_OPTIONS: usize = 12;

/// Start of the all-time window.
pub fn default_all_time_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Today on the host's local calendar.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Monday of the week containing `date`. A Sunday belongs to the week that
/// ends on it.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let back = if weekday == 0 { 6 } else { weekday - 1 };
    date - Duration::days(back)
}

pub fn sunday_of_week(date: NaiveDate) -> NaiveDate {
    monday_of_week(date) + Duration::days(6)
}

/// Day 0 of the following month.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Produces the selectable week and month windows for one "today" anchor.
#[derive(Debug, Clone)]
pub struct PeriodRangeGenerator {
    today: NaiveDate,
    week_count: usize,
    month_count: usize,
    all_time_start: NaiveDate,
}

impl PeriodRangeGenerator {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            week_count: DEFAULT_WEEK_OPTIONS,
            month_count: DEFAULT_MONTH_OPTIONS,
            all_time_start: default_all_time_start(),
        }
    }

    pub fn from_settings(settings: &LeaderboardSettings, today: NaiveDate) -> Self {
        Self {
            today,
            week_count: settings.week_options,
            month_count: settings.month_options,
            all_time_start: settings.all_time_start,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Same option counts and all-time start, anchored on another day.
    pub fn with_today(&self, today: NaiveDate) -> Self {
        Self {
            today,
            ..self.clone()
        }
    }

    /// Most recent week first.
    pub fn week_options(&self) -> Vec<DateRangeOption> {
        (0..self.week_count)
            .map(|i| {
                let anchor = self.today - Duration::days(7 * i as i64);
                let monday = monday_of_week(anchor);
                DateRangeOption {
                    label: week_label(monday),
                    start: monday,
                    end: sunday_of_week(anchor),
                }
            })
            .collect()
    }

    /// Most recent month first, current month included.
    pub fn month_options(&self) -> Vec<DateRangeOption> {
        let current = self.today.year() * 12 + self.today.month0() as i32;

        (0..self.month_count)
            .filter_map(|i| {
                let index = current - i as i32;
                let year = index.div_euclid(12);
                let month = index.rem_euclid(12) as u32 + 1;
                let start = NaiveDate::from_ymd_opt(year, month, 1)?;
                let end = last_day_of_month(year, month)?;
                Some(DateRangeOption {
                    label: month_label(start),
                    start,
                    end,
                })
            })
            .collect()
    }

    pub fn options_for(&self, period: Period) -> Vec<DateRangeOption> {
        match period {
            Period::Weekly => self.week_options(),
            Period::Monthly => self.month_options(),
            Period::AllTime => Vec::new(),
        }
    }

    /// Keeps `current` when it has the shape of `period`, otherwise falls back
    /// to the most recent option. All-time never has a range.
    pub fn resolve_active_range(
        &self,
        period: Period,
        current: Option<&DateRangeOption>,
    ) -> Option<DateRangeOption> {
        match (period, current) {
            (Period::AllTime, _) => None,
            (Period::Weekly, Some(selected)) if selected.is_week() => Some(selected.clone()),
            (Period::Monthly, Some(selected)) if selected.is_month() => Some(selected.clone()),
            (period, _) => self.options_for(period).into_iter().next(),
        }
    }

    /// `[start, end]` of the active range, or `[all_time_start, today]`.
    pub fn effective_bounds(&self, active: Option<&DateRangeOption>) -> (NaiveDate, NaiveDate) {
        match active {
            Some(range) => (range.start, range.end),
            None => (self.all_time_start, self.today),
        }
    }
}
