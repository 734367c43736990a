use crate::models::LeaderboardSnapshot;

/// Identifies one in-flight fetch. Only the ticket from the latest
/// [`ViewState::begin_fetch`] may write its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// `data` / `loading` / `error` view state of the leaderboard.
#[derive(Debug, Clone)]
pub struct ViewState {
    data: Option<LeaderboardSnapshot>,
    loading: bool,
    error: bool,
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: false,
            generation: 0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = false;

        FetchTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a fetch result. Returns `false` and leaves the state untouched
    /// when a newer fetch has started since `ticket` was issued.
    pub fn complete<E>(&mut self, ticket: FetchTicket, result: Result<LeaderboardSnapshot, E>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        match result {
            Ok(snapshot) => {
                self.data = Some(snapshot);
                self.error = false;
            }
            Err(_) => {
                self.error = true;
            }
        }
        self.loading = false;
        true
    }

    pub fn data(&self) -> Option<&LeaderboardSnapshot> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;
    use chrono::NaiveDate;

    fn snapshot(points: u64) -> LeaderboardSnapshot {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut snapshot = LeaderboardSnapshot::empty(Period::Weekly, day, day, day);
        snapshot.points_distributed = points;
        snapshot
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ViewState::new();
        assert!(state.is_loading());
        assert!(!state.has_error());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_success_and_failure() {
        let mut state = ViewState::new();

        let ticket = state.begin_fetch();
        assert!(state.complete::<()>(ticket, Ok(snapshot(7))));
        assert!(!state.is_loading());
        assert_eq!(state.data().unwrap().points_distributed, 7);

        let ticket = state.begin_fetch();
        assert!(state.is_loading());
        assert!(state.complete(ticket, Err("network down")));
        assert!(state.has_error());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_retry_clears_error() {
        let mut state = ViewState::new();
        let ticket = state.begin_fetch();
        state.complete(ticket, Err("boom"));
        assert!(state.has_error());

        state.begin_fetch();
        assert!(!state.has_error());
        assert!(state.is_loading());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = ViewState::new();

        let weekly = state.begin_fetch();
        let monthly = state.begin_fetch();

        // the newer request resolves first
        assert!(state.complete::<()>(monthly, Ok(snapshot(2))));
        assert!(!state.complete::<()>(weekly, Ok(snapshot(1))));
        assert_eq!(state.data().unwrap().points_distributed, 2);

        // a stale failure must not flip the error flag either
        let latest = state.begin_fetch();
        assert!(!state.complete(monthly, Err("late")));
        assert!(!state.has_error());
        assert!(state.is_loading());
        assert!(state.complete::<()>(latest, Ok(snapshot(3))));
        assert_eq!(state.generation(), latest.generation());
    }
}
