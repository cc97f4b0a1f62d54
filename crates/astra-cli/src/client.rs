//! Async HTTP client wrapping the Astra JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Connection settings for the Astra API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// A submission as collected by the form. Sent verbatim; the server trims
/// and validates.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
  pub name:       String,
  pub birthday:   String,
  pub birthplace: String,
  pub job_title:  String,
}

/// Success payload of `POST /api/user`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
  pub user_id:       i64,
  pub name:          String,
  pub sun_sign:      String,
  pub hd_type:       String,
  pub chat_response: String,
}

/// Error payload returned by the API.
#[derive(Debug, Deserialize)]
struct ApiMessage {
  message: String,
}

/// Async HTTP client for the Astra JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// `POST /api/user`
  pub async fn submit(
    &self,
    submission: &Submission,
  ) -> Result<SubmissionResult> {
    let resp = self
      .client
      .post(self.url("/user"))
      .json(submission)
      .send()
      .await
      .context("POST /user failed")?;

    if !resp.status().is_success() {
      let status = resp.status();
      let message = resp
        .json::<ApiMessage>()
        .await
        .map(|m| m.message)
        .unwrap_or_else(|_| status.to_string());
      return Err(anyhow!("{message}"));
    }
    resp
      .json()
      .await
      .context("deserialising submission result")
  }
}
