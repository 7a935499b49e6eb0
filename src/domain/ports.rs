use crate::domain::model::{ConsultantRecord, DateRange};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of effectuation data for a date range. Implemented by the HTTP
/// adapter in production and by in-memory fakes in tests.
#[async_trait]
pub trait EffectuationProvider: Send + Sync {
    async fn fetch_effectuations(&self, range: DateRange) -> Result<Vec<ConsultantRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn target(&self) -> f64;
    fn window_days(&self) -> u32;
}
