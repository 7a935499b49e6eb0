use crate::domain::model::ConsultantRecord;

/// Fetch phase as seen by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// Handle for one issued request. Carries the sequence number checked at
/// commit time; a token that is no longer the latest is stale and its result
/// is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    seq: u64,
}

/// Outcome of committing a response to the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Applied,
    Stale,
}

/// State machine `Idle -> Loading -> {Success, Failure}`, re-entering
/// Loading on any new request.
///
/// Two invariants drive every transition:
/// - previously held records stay visible through Loading and Failure; only
///   a committed Success replaces them,
/// - of overlapping requests, only the most recently issued one may commit.
#[derive(Debug, Default)]
pub struct FetchLifecycle {
    phase: FetchPhase,
    records: Vec<ConsultantRecord>,
    error: Option<String>,
    latest_seq: u64,
}

impl FetchLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn records(&self) -> &[ConsultantRecord] {
        &self.records
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enters Loading and issues the token for this request. Any stored
    /// error is cleared so a stale message cannot survive a retry; the held
    /// records are kept so the view does not flash to empty.
    pub fn begin_request(&mut self) -> RequestToken {
        self.latest_seq += 1;
        self.phase = FetchPhase::Loading;
        self.error = None;
        RequestToken {
            seq: self.latest_seq,
        }
    }

    /// Commits a successful response. Superseded tokens are rejected without
    /// touching any state.
    pub fn commit_success(
        &mut self,
        token: RequestToken,
        records: Vec<ConsultantRecord>,
    ) -> Commit {
        if token.seq != self.latest_seq {
            tracing::debug!(seq = token.seq, latest = self.latest_seq, "discarding stale response");
            return Commit::Stale;
        }
        self.phase = FetchPhase::Success;
        self.records = records;
        self.error = None;
        Commit::Applied
    }

    /// Commits a failed response. The previously held record list is
    /// preserved unchanged; only the message and phase move.
    pub fn commit_failure(&mut self, token: RequestToken, message: String) -> Commit {
        if token.seq != self.latest_seq {
            tracing::debug!(seq = token.seq, latest = self.latest_seq, "discarding stale failure");
            return Commit::Stale;
        }
        self.phase = FetchPhase::Failure;
        self.error = Some(message);
        Commit::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, accepted_count: u64, total_prize: f64) -> ConsultantRecord {
        ConsultantRecord {
            name: name.to_string(),
            accepted_count,
            total_prize,
        }
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let lifecycle = FetchLifecycle::new();

        assert_eq!(lifecycle.phase(), FetchPhase::Idle);
        assert!(lifecycle.records().is_empty());
        assert!(lifecycle.error().is_none());
    }

    #[test]
    fn test_success_replaces_records() {
        let mut lifecycle = FetchLifecycle::new();

        let token = lifecycle.begin_request();
        assert_eq!(lifecycle.phase(), FetchPhase::Loading);

        let commit = lifecycle.commit_success(token, vec![record("A", 4, 4000.0)]);
        assert_eq!(commit, Commit::Applied);
        assert_eq!(lifecycle.phase(), FetchPhase::Success);
        assert_eq!(lifecycle.records().len(), 1);
    }

    #[test]
    fn test_failure_retains_prior_records() {
        let mut lifecycle = FetchLifecycle::new();

        let token = lifecycle.begin_request();
        lifecycle.commit_success(token, vec![record("X", 2, 500.0)]);

        let token = lifecycle.begin_request();
        let commit = lifecycle.commit_failure(token, "boom".to_string());

        assert_eq!(commit, Commit::Applied);
        assert_eq!(lifecycle.phase(), FetchPhase::Failure);
        assert_eq!(lifecycle.error(), Some("boom"));
        // The data from the earlier success stays on screen.
        assert_eq!(lifecycle.records(), &[record("X", 2, 500.0)]);
    }

    #[test]
    fn test_begin_request_clears_error_keeps_records() {
        let mut lifecycle = FetchLifecycle::new();

        let token = lifecycle.begin_request();
        lifecycle.commit_success(token, vec![record("X", 2, 500.0)]);
        let token = lifecycle.begin_request();
        lifecycle.commit_failure(token, "boom".to_string());

        lifecycle.begin_request();

        assert_eq!(lifecycle.phase(), FetchPhase::Loading);
        assert!(lifecycle.error().is_none());
        assert_eq!(lifecycle.records().len(), 1);
    }

    #[test]
    fn test_late_response_from_superseded_request_is_discarded() {
        let mut lifecycle = FetchLifecycle::new();

        // R1 issued first, R2 second; R2 resolves before R1.
        let r1 = lifecycle.begin_request();
        let r2 = lifecycle.begin_request();

        assert_eq!(
            lifecycle.commit_success(r2, vec![record("B", 1, 100.0)]),
            Commit::Applied
        );
        assert_eq!(
            lifecycle.commit_success(r1, vec![record("A", 9, 900.0)]),
            Commit::Stale
        );

        // Final state reflects R2, the most recently issued request.
        assert_eq!(lifecycle.phase(), FetchPhase::Success);
        assert_eq!(lifecycle.records(), &[record("B", 1, 100.0)]);
    }

    #[test]
    fn test_stale_failure_cannot_overwrite_newer_success() {
        let mut lifecycle = FetchLifecycle::new();

        let r1 = lifecycle.begin_request();
        let r2 = lifecycle.begin_request();

        lifecycle.commit_success(r2, vec![record("B", 1, 100.0)]);
        assert_eq!(
            lifecycle.commit_failure(r1, "late error".to_string()),
            Commit::Stale
        );

        assert_eq!(lifecycle.phase(), FetchPhase::Success);
        assert!(lifecycle.error().is_none());
    }
}
