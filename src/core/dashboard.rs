use crate::core::date_range::DateRangeController;
use crate::core::lifecycle::{Commit, FetchLifecycle, FetchPhase, RequestToken};
use crate::core::stats;
use crate::domain::model::{AggregateSummary, ConsultantRecord, DateRange};
use crate::domain::ports::EffectuationProvider;

/// Outcome of a refresh attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The filter is incomplete; no request was issued.
    NotReady,
    /// A request ran and its result was committed.
    Completed,
    /// A request ran but a newer one had been issued meanwhile.
    Superseded,
}

/// Ties the date-range controller, the fetch lifecycle and a provider
/// together. All provider errors are converted to the Failure phase here;
/// `refresh` itself never returns an error.
pub struct DashboardEngine<P: EffectuationProvider> {
    provider: P,
    range: DateRangeController,
    lifecycle: FetchLifecycle,
    target: f64,
}

impl<P: EffectuationProvider> DashboardEngine<P> {
    pub fn new(provider: P, range: DateRangeController, target: f64) -> Self {
        Self {
            provider,
            range,
            lifecycle: FetchLifecycle::new(),
            target,
        }
    }

    pub fn set_start(&mut self, date: Option<chrono::NaiveDate>) {
        self.range.set_start(date);
    }

    pub fn set_end(&mut self, date: Option<chrono::NaiveDate>) {
        self.range.set_end(date);
    }

    pub fn is_ready(&self) -> bool {
        self.range.is_ready()
    }

    pub fn phase(&self) -> FetchPhase {
        self.lifecycle.phase()
    }

    pub fn records(&self) -> &[ConsultantRecord] {
        self.lifecycle.records()
    }

    pub fn error(&self) -> Option<&str> {
        self.lifecycle.error()
    }

    /// Totals over the currently held records against the configured target.
    pub fn summary(&self) -> AggregateSummary {
        stats::aggregate_summary(self.lifecycle.records(), self.target)
    }

    /// Runs one fetch for the current range, if the filter is complete, and
    /// commits the outcome. Failures surface as the Failure phase with a
    /// user-facing message; the previously fetched records are kept either
    /// way. Retry is always caller-driven, never automatic.
    pub async fn refresh(&mut self) -> Refresh {
        let Some(range) = self.range.range() else {
            tracing::debug!("refresh skipped, date filter incomplete");
            return Refresh::NotReady;
        };

        let token = self.lifecycle.begin_request();
        self.resolve(token, range).await
    }

    /// Issues a request token without resolving it. Paired with `resolve`,
    /// this lets a caller overlap requests; the lifecycle guarantees only
    /// the most recently issued one commits.
    pub fn begin_request(&mut self) -> Option<(RequestToken, DateRange)> {
        let range = self.range.range()?;
        Some((self.lifecycle.begin_request(), range))
    }

    pub async fn resolve(&mut self, token: RequestToken, range: DateRange) -> Refresh {
        tracing::info!(start = %range.start, end = %range.end, "fetching effectuations");

        let commit = match self.provider.fetch_effectuations(range).await {
            Ok(records) => {
                tracing::info!(count = records.len(), "fetch succeeded");
                self.lifecycle.commit_success(token, records)
            }
            Err(e) => {
                tracing::error!(error = %e, "fetch failed");
                self.lifecycle.commit_failure(token, e.user_message())
            }
        };

        match commit {
            Commit::Applied => Refresh::Completed,
            Commit::Stale => Refresh::Superseded,
        }
    }
}
