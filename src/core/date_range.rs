use crate::domain::model::DateRange;
use chrono::{Days, NaiveDate};

/// Owns the queried date interval and decides fetch-worthiness. The current
/// time is always injected by the caller; the controller never reads a clock.
#[derive(Debug, Clone, Default)]
pub struct DateRangeController {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRangeController {
    /// Default filter: the trailing 7-day window ending at `today`.
    pub fn trailing_window(today: NaiveDate) -> Self {
        Self::trailing_window_of(today, 7)
    }

    pub fn trailing_window_of(today: NaiveDate, days: u32) -> Self {
        let start = today.checked_sub_days(Days::new(days as u64));
        Self {
            start,
            end: Some(today),
        }
    }

    // Plain mutation. Calendar ordering is not checked here; an inverted
    // range is passed through to the provider untouched.
    pub fn set_start(&mut self, date: Option<NaiveDate>) {
        self.start = date;
    }

    pub fn set_end(&mut self, date: Option<NaiveDate>) {
        self.end = date;
    }

    /// The sole gate for triggering a fetch: both ends must be set.
    pub fn is_ready(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        }
    }
}
