use super::decode::{decode_age, decode_generate, decode_stats, normalize_birthdate};
use super::{ApiError, ApiResult, HoroscopeBackend};
use crate::config::ClientConfig;
use crate::types::{AgeCheckRequest, AgeDecision, GenerateRequest, HoroscopeResult, StatRow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: build_client(),
            config,
        }
    }

    /// Response bodies are read whatever the status; error payloads are JSON too.
    async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> ApiResult<String> {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%status, url, "horoscope server replied");
        Ok(text)
    }

    async fn get(&self, url: &str) -> ApiResult<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%status, url, "horoscope server replied");
        Ok(text)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Client {
    // The age gate is a session cookie; the browser keeps it on the web build.
    Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|err| {
            warn!("falling back to a client without cookies: {err}");
            Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> Client {
    Client::new()
}

fn log_failure(context: &str, err: &ApiError) {
    match err {
        ApiError::Rejected(message) => info!("{context} rejected: {message}"),
        other => warn!("{context} failed: {other}"),
    }
}

#[async_trait(?Send)]
impl HoroscopeBackend for HttpBackend {
    async fn generate(&self, request: &GenerateRequest) -> ApiResult<HoroscopeResult> {
        debug!(sign = %request.sign, tone = %request.tone, "requesting horoscope");
        let outcome = match self.post_json(&self.config.generate_url(), request).await {
            Ok(body) => decode_generate(&body),
            Err(err) => Err(err),
        };
        if let Err(err) = &outcome {
            log_failure("generate", err);
        }
        outcome
    }

    async fn verify_age(&self, birthdate: &str) -> ApiResult<AgeDecision> {
        let birthdate = normalize_birthdate(birthdate)?;
        let body = self
            .post_json(
                &self.config.verify_age_url(),
                &AgeCheckRequest {
                    birthdate: &birthdate,
                },
            )
            .await
            .inspect_err(|err| log_failure("verify-age", err))?;
        let decision = decode_age(&body).inspect_err(|err| log_failure("verify-age", err))?;
        info!(?decision, "age gate answered");
        Ok(decision)
    }

    async fn stats(&self) -> ApiResult<Vec<StatRow>> {
        let body = self
            .get(&self.config.stats_url())
            .await
            .inspect_err(|err| log_failure("stats", err))?;
        decode_stats(&body).inspect_err(|err| log_failure("stats", err))
    }
}
