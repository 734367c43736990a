use chrono::NaiveDate;

use crate::{
    leaderboard::{FetchTicket, ViewState},
    models::{DateRangeOption, LeaderboardSnapshot, Period},
    ranges::PeriodRangeGenerator,
};

pub struct App {
    pub period: Period,
    pub active_range: Option<DateRangeOption>,
    pub view: ViewState,
    pub scroll: usize,
    pub should_quit: bool,
    generator: PeriodRangeGenerator,
    week_options: Vec<DateRangeOption>,
    month_options: Vec<DateRangeOption>,
}

impl App {
    pub fn new(generator: PeriodRangeGenerator) -> Self {
        let period = Period::default();
        let active_range = generator.resolve_active_range(period, None);

        Self {
            period,
            active_range,
            view: ViewState::new(),
            scroll: 0,
            should_quit: false,
            week_options: generator.week_options(),
            month_options: generator.month_options(),
            generator,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.generator.today()
    }

    /// Re-anchors the generator and option lists when the calendar day has
    /// moved on. The current selection is kept while it still has the active
    /// period's shape. Returns `true` when the anchor changed.
    pub fn roll_to(&mut self, today: NaiveDate) -> bool {
        if today == self.generator.today() {
            return false;
        }

        self.generator = self.generator.with_today(today);
        self.week_options = self.generator.week_options();
        self.month_options = self.generator.month_options();
        self.active_range = self
            .generator
            .resolve_active_range(self.period, self.active_range.as_ref());
        true
    }

    pub fn range_options(&self) -> &[DateRangeOption] {
        match self.period {
            Period::Weekly => self.week_options.as_slice(),
            Period::Monthly => self.month_options.as_slice(),
            Period::AllTime => &[],
        }
    }

    /// Switches period and resets the range to that period's default.
    /// Returns `true` when a refetch is needed.
    pub fn select_period(&mut self, period: Period) -> bool {
        if period == self.period {
            return false;
        }

        self.period = period;
        self.active_range = self.generator.resolve_active_range(period, None);
        self.scroll = 0;
        true
    }

    pub fn cycle_period(&mut self) -> bool {
        self.select_period(self.period.next())
    }

    /// Moves to the previous (older) week or month.
    pub fn select_older_range(&mut self) -> bool {
        self.step_range(1)
    }

    pub fn select_newer_range(&mut self) -> bool {
        self.step_range(-1)
    }

    fn step_range(&mut self, delta: isize) -> bool {
        let options = self.range_options();
        if options.is_empty() {
            return false;
        }

        let current = self
            .active_range
            .as_ref()
            .and_then(|active| options.iter().position(|o| o == active))
            .unwrap_or(0);
        let target = current as isize + delta;
        if target < 0 || target as usize >= options.len() {
            return false;
        }

        let next = options[target as usize].clone();
        self.active_range = self.generator.resolve_active_range(self.period, Some(&next));
        self.scroll = 0;
        true
    }

    pub fn range_label(&self) -> String {
        match &self.active_range {
            Some(range) => range.label.clone(),
            None => {
                let (start, end) = self.generator.effective_bounds(None);
                format!("{} – {}", start.format("%-d %b %Y"), end.format("%-d %b %Y"))
            }
        }
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.view.begin_fetch()
    }

    pub fn complete_fetch<E>(
        &mut self,
        ticket: FetchTicket,
        result: Result<LeaderboardSnapshot, E>,
    ) -> bool {
        self.view.complete(ticket, result)
    }

    pub fn scroll_down(&mut self) {
        let rows = self.view.data().map(|d| d.entries.len()).unwrap_or(0);
        if self.scroll + 1 < rows {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
