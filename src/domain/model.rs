use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One consultant's effectuation totals for the queried period, as returned
/// by the provider. Read-only to the core; `name` is a display key and is
/// not assumed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultantRecord {
    pub name: String,
    pub accepted_count: u64,
    pub total_prize: f64,
}

/// Per-consultant derived values. Computed on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedStats {
    pub total: f64,
    pub average: f64,
}

/// Totals over the whole record list, compared against a configured target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub total_accepted_count: u64,
    pub total_prize_sum: f64,
    pub target: f64,
}

/// Queried date interval. `start <= end` is intentionally not enforced; the
/// provider is the authority on range validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
