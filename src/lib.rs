pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpEffectuationProvider;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::dashboard::{DashboardEngine, Refresh};
pub use core::date_range::DateRangeController;
pub use core::lifecycle::{Commit, FetchLifecycle, FetchPhase, RequestToken};
pub use domain::model::{AggregateSummary, ConsultantRecord, DateRange, DerivedStats};
pub use domain::ports::{ConfigProvider, EffectuationProvider};
pub use utils::error::{DashboardError, Result};
