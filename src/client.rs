//! Transport client for the report backend.
//!
//! Three operations, one HTTP round trip each, no retries. The client holds
//! no session state and is safe to call concurrently with itself; ordering
//! policy belongs to the session, not here.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::error::{AdrepError, Result};
use crate::model::{HistoryEntry, ProcessedReport};

/// Connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Whole-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to a fixed backend origin.
#[derive(Debug, Clone)]
pub struct ReportClient {
    origin: String,
    client: Client,
}

impl ReportClient {
    /// Build a client for the given origin (e.g. `http://127.0.0.1:8000`).
    pub fn new(origin: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("adrep/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AdrepError::Unhandled {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            origin: origin.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The origin this client is bound to.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Submit a draft for classification.
    ///
    /// The text may be empty; the backend is the validation authority.
    pub async fn submit_report(&self, text: &str) -> Result<ProcessedReport> {
        let response = self
            .client
            .post(format!("{}/process-report", self.origin))
            .json(&json!({ "report": text }))
            .send()
            .await?;

        Self::check_status(&response)?;
        response.json::<ProcessedReport>().await.map_err(Into::into)
    }

    /// Fetch the full history list as the backend provides it.
    ///
    /// Truncation to "latest 10" is a view concern, not a transport concern.
    pub async fn fetch_history(&self) -> Result<Vec<HistoryEntry>> {
        let response = self
            .client
            .get(format!("{}/reports", self.origin))
            .send()
            .await?;

        Self::check_status(&response)?;
        response.json::<Vec<HistoryEntry>>().await.map_err(Into::into)
    }

    /// Translate `text` into `lang`.
    ///
    /// `lang` is forwarded verbatim; the backend decides which languages it
    /// supports.
    pub async fn translate(&self, text: &str, lang: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/translate", self.origin))
            .json(&json!({ "text": text, "lang": lang }))
            .send()
            .await?;

        Self::check_status(&response)?;
        let body: serde_json::Value = response.json().await?;
        match body.get("translation").and_then(|t| t.as_str()) {
            Some(translation) => Ok(translation.to_string()),
            None => Err(AdrepError::BadResponse {
                status: 200,
                message: "translate response missing 'translation' field".to_string(),
            }),
        }
    }

    fn check_status(response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AdrepError::BadResponse {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("non-success status")
                    .to_string(),
            })
        }
    }
}
