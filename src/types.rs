use serde::{Deserialize, Serialize};
use serde_json::Number;

pub const DEFAULT_TONE: &str = "light";
pub const FALLBACK_EMOJI: &str = "✨";
pub const FALLBACK_SIGN_NAME: &str = "---";

/// Conversation tone sent along with every generation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tone(String);

impl Tone {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self(DEFAULT_TONE.to_string())
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a sign element in the grid carries. Any part may be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignButton {
    pub data_sign: Option<String>,
    pub label: Option<String>,
    pub emoji: Option<String>,
}

impl SignButton {
    pub fn new(name: &str, emoji: &str) -> Self {
        Self {
            data_sign: Some(name.to_string()),
            label: Some(name.to_string()),
            emoji: Some(emoji.to_string()),
        }
    }

    pub fn display_name(&self) -> String {
        non_empty(self.data_sign.as_deref())
            .or_else(|| non_empty(self.label.as_deref()))
            .unwrap_or(FALLBACK_SIGN_NAME)
            .to_string()
    }

    pub fn display_emoji(&self) -> String {
        non_empty(self.emoji.as_deref())
            .unwrap_or(FALLBACK_EMOJI)
            .to_string()
    }
}

/// A button of the tone toggle.
#[derive(Clone, Debug, PartialEq)]
pub struct ToneButton {
    pub data_tone: Option<String>,
    pub label: String,
}

impl ToneButton {
    pub fn new(data_tone: &str, label: &str) -> Self {
        Self {
            data_tone: Some(data_tone.to_string()),
            label: label.to_string(),
        }
    }

    /// `data-tone` wins; otherwise the visible label, trimmed and lower-cased.
    pub fn tone(&self) -> Tone {
        match non_empty(self.data_tone.as_deref()) {
            Some(value) => Tone::new(value),
            None => Tone::new(self.label.trim().to_lowercase()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub sign: String,
    pub tone: Tone,
}

/// Either response shape of `/api/generate`; both failure variants are accepted.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub sign: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub sarcasm: Option<Number>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoroscopeResult {
    pub sign: String,
    pub text: String,
    pub sarcasm: Number,
}

#[derive(Debug, Serialize)]
pub struct AgeCheckRequest<'a> {
    pub birthdate: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct AgeCheckResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub allowed: Option<bool>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AgeDecision {
    Allowed,
    Denied(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatRow {
    pub sign: String,
    pub tone: String,
    pub cnt: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub stats: Vec<StatRow>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_button_prefers_data_attribute() {
        let button = SignButton {
            data_sign: Some("Лев".into()),
            label: Some("Lauva".into()),
            emoji: Some("♌".into()),
        };
        assert_eq!(button.display_name(), "Лев");
        assert_eq!(button.display_emoji(), "♌");
    }

    #[test]
    fn sign_button_degrades_without_markup() {
        let bare = SignButton::default();
        assert_eq!(bare.display_name(), FALLBACK_SIGN_NAME);
        assert_eq!(bare.display_emoji(), FALLBACK_EMOJI);

        let label_only = SignButton {
            label: Some("Рыбы".into()),
            ..SignButton::default()
        };
        assert_eq!(label_only.display_name(), "Рыбы");
    }

    #[test]
    fn tone_resolution_order() {
        assert_eq!(ToneButton::new("hard", "Ass").tone().as_str(), "hard");
        let unlabeled = ToneButton {
            data_tone: Some(String::new()),
            label: "  Normal ".into(),
        };
        assert_eq!(unlabeled.tone().as_str(), "normal");
        assert_eq!(Tone::default().as_str(), "light");
    }

    #[test]
    fn request_body_is_flat() {
        let body = serde_json::to_string(&GenerateRequest {
            sign: "Leo".into(),
            tone: Tone::default(),
        })
        .unwrap();
        assert_eq!(body, r#"{"sign":"Leo","tone":"light"}"#);
    }
}
