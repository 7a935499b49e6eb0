use crate::domain::model::{ConsultantRecord, DateRange};
use crate::domain::ports::EffectuationProvider;
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// The provider speaks `YYYY/MM/DD` date strings and Portuguese field names.
/// That wire format is confined to this adapter; the rest of the crate only
/// sees `NaiveDate` and `ConsultantRecord`.
#[derive(Debug, Serialize)]
struct EffectuationRequest {
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "endDate")]
    end_date: String,
}

#[derive(Debug, Deserialize)]
struct EffectuationResponse {
    efetivacoes: Vec<WireConsultant>,
}

#[derive(Debug, Deserialize)]
struct WireConsultant {
    nome_consultor: String,
    quantidade_efetivacoes: u64,
    soma_total_premios: f64,
}

impl From<WireConsultant> for ConsultantRecord {
    fn from(wire: WireConsultant) -> Self {
        ConsultantRecord {
            name: wire.nome_consultor,
            accepted_count: wire.quantidade_efetivacoes,
            total_prize: wire.soma_total_premios,
        }
    }
}

fn wire_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

pub struct HttpEffectuationProvider {
    endpoint: String,
    client: Client,
}

impl HttpEffectuationProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl EffectuationProvider for HttpEffectuationProvider {
    async fn fetch_effectuations(&self, range: DateRange) -> Result<Vec<ConsultantRecord>> {
        let body = EffectuationRequest {
            start_date: wire_date(range.start),
            end_date: wire_date(range.end),
        };

        tracing::debug!(endpoint = %self.endpoint, "requesting effectuations");
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        tracing::debug!(status = %status, "provider response");
        if !status.is_success() {
            return Err(DashboardError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        // Fail closed on shape mismatch: a payload without the expected
        // record list, or with wrongly typed fields, is a fetch failure, not
        // a partial result.
        let payload: EffectuationResponse =
            response
                .json()
                .await
                .map_err(|e| DashboardError::MalformedResponse {
                    message: e.to_string(),
                })?;

        Ok(payload.efetivacoes.into_iter().map(Into::into).collect())
    }
}
