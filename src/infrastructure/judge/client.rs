use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;

use super::{
    error::JudgeError,
    wire::{StatusResponse, SubmissionBody, TokenResponse, QUERY},
    JudgeApi,
};
use crate::{
    domain::execution::{ExecutionResult, SubmissionRequest, SubmissionToken},
    infrastructure::config::JudgeConfig,
};

const HOST_HEADER: &str = "X-RapidAPI-Host";
const KEY_HEADER: &str = "X-RapidAPI-Key";

/// HTTP client for a Judge0-compatible submissions endpoint.
#[derive(Clone)]
pub struct JudgeClient {
    client: Client,
    config: JudgeConfig,
}

impl JudgeClient {
    pub fn new(config: JudgeConfig) -> Result<Self, JudgeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: JudgeConfig) -> Self {
        Self { client, config }
    }

    fn submissions_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Credential headers are only attached when configured, so a self-hosted
    /// judge without a gateway works with an empty host and key.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let mut builder = builder.query(&QUERY);
        if !self.config.host.is_empty() {
            builder = builder.header(HOST_HEADER, &self.config.host);
        }
        let key = self.config.api_key.expose_secret();
        if !key.is_empty() {
            builder = builder.header(KEY_HEADER, key);
        }
        builder
    }
}

async fn error_for_status(resp: Response) -> Result<Response, JudgeError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error body".to_string());
    Err(JudgeError::Http {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl JudgeApi for JudgeClient {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionToken, JudgeError> {
        let encoded = request.encoded_source();
        let body = SubmissionBody {
            language_id: request.language_id,
            source_code: &encoded,
        };

        log::debug!(
            "Submitting {} bytes of source for language {}",
            request.source_code.len(),
            request.language_id
        );

        let resp = self
            .authorize(self.client.post(self.submissions_url()))
            .json(&body)
            .send()
            .await?;

        if resp.status() == StatusCode::TOO_MANY_REQUESTS {
            log::warn!("Judge rejected submission: daily quota exceeded");
            return Err(JudgeError::RateLimited);
        }

        let resp = error_for_status(resp).await?;
        let TokenResponse { token } = resp.json().await?;
        if token.is_empty() {
            return Err(JudgeError::UnexpectedResponse(
                "submission response carried an empty token".to_string(),
            ));
        }

        log::info!("Submission accepted with token {token}");
        Ok(SubmissionToken::new(token))
    }

    async fn fetch_status(&self, token: &SubmissionToken) -> Result<ExecutionResult, JudgeError> {
        let url = format!("{}/{}", self.submissions_url(), token.as_str());
        let resp = self.authorize(self.client.get(url)).send().await?;
        let resp = error_for_status(resp).await?;
        let status: StatusResponse = resp.json().await?;

        status
            .into_result()
            .map_err(|e| JudgeError::UnexpectedResponse(format!("invalid base64 field: {e}")))
    }
}
