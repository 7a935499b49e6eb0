pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_negative, validate_positive_number, validate_url, Validate,
};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_TARGET: f64 = 20_000_000.0;
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, Parser)]
#[command(name = "prizeboard")]
#[command(about = "Per-consultant effectuation totals for a date range")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3000/api/propostas_efetivadas/get")]
    pub endpoint: String,

    /// Period start (YYYY-MM-DD); defaults to the trailing window start
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Period end (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Width of the default trailing window in days
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window_days: u32,

    /// Prize target the aggregate totals are compared against
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    pub target: f64,

    /// Load endpoint/filter/goal settings from a TOML file instead
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn target(&self) -> f64 {
        self.target
    }

    fn window_days(&self) -> u32 {
        self.window_days
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_positive_number("window_days", self.window_days, 1)?;
        validate_non_negative("target", self.target)?;
        Ok(())
    }
}
