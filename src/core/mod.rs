pub mod dashboard;
pub mod date_range;
pub mod lifecycle;
pub mod stats;

pub use crate::domain::model::{AggregateSummary, ConsultantRecord, DateRange, DerivedStats};
pub use crate::domain::ports::{ConfigProvider, EffectuationProvider};
pub use crate::utils::error::Result;
