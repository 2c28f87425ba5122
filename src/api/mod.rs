/// Client side of the horoscope server.
///
/// The page only ever talks to three endpoints: `/api/generate` for the
/// horoscope itself, `/verify-age` for the session age gate and
/// `/admin/stats` for the request counters. Everything goes through the
/// [`HoroscopeBackend`] trait so the picker can be driven by a scripted
/// backend in tests.
///
/// # Architecture
///
/// - `client` - reqwest-backed [`HttpBackend`]
/// - `decode` - turns response bodies into results, accepting every error shape
mod client;
mod decode;

pub use client::HttpBackend;
pub use decode::{decode_age, decode_generate, decode_stats, normalize_birthdate};

use crate::locale;
use crate::types::{AgeDecision, GenerateRequest, HoroscopeResult, StatRow};
use async_trait::async_trait;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("incomplete response: missing {0}")]
    Malformed(&'static str),

    /// Structured error sent back by the server (`{"ok":false,"error":...}`).
    #[error("{0}")]
    Rejected(String),

    #[error("invalid birthdate: {0}")]
    InvalidBirthdate(String),
}

impl ApiError {
    /// Text shown on the page for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(message) => locale::error_status(message),
            ApiError::InvalidBirthdate(input) => locale::invalid_birthdate(input),
            _ => locale::UNREACHABLE.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Backend handle shared through the component tree.
pub type SharedBackend = Rc<dyn HoroscopeBackend>;

#[async_trait(?Send)]
pub trait HoroscopeBackend {
    async fn generate(&self, request: &GenerateRequest) -> ApiResult<HoroscopeResult>;

    async fn verify_age(&self, birthdate: &str) -> ApiResult<AgeDecision>;

    async fn stats(&self) -> ApiResult<Vec<StatRow>>;
}
