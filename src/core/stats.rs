use crate::domain::model::{AggregateSummary, ConsultantRecord, DerivedStats};

/// Per-consultant derived values. A consultant with zero effectuations has an
/// average of exactly 0.0; division by zero never reaches the caller as
/// NaN/infinity or as an error.
pub fn derived_stats(record: &ConsultantRecord) -> DerivedStats {
    let average = if record.accepted_count > 0 {
        record.total_prize / record.accepted_count as f64
    } else {
        0.0
    };

    DerivedStats {
        total: record.total_prize,
        average,
    }
}

/// Totals over the full record list. An empty list yields zero totals. The
/// target is injected configuration, never derived from the data.
pub fn aggregate_summary(records: &[ConsultantRecord], target: f64) -> AggregateSummary {
    let total_accepted_count = records.iter().map(|r| r.accepted_count).sum();
    let total_prize_sum = records.iter().map(|r| r.total_prize).sum();

    AggregateSummary {
        total_accepted_count,
        total_prize_sum,
        target,
    }
}
