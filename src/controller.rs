//! Picker state: the one place that knows which sign and tone are active,
//! what the preview shows and which request is the latest.

use crate::api::{ApiError, ApiResult, HoroscopeBackend};
use crate::catalog::emoji_for;
use crate::config::{AgainAction, PickerPolicy, ToneChange};
use crate::locale;
use crate::share::SharePayload;
use crate::types::{GenerateRequest, HoroscopeResult, SignButton, Tone, ToneButton};
use tracing::debug;

/// The status area above the result card.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Preview {
    #[default]
    Empty,
    Tone(Tone),
    Generating { emoji: String, name: String },
    Ready,
    Failed(String),
    Unreachable,
}

impl Preview {
    /// Single line of status text, if the preview has one.
    pub fn status(&self) -> Option<String> {
        match self {
            Preview::Empty => None,
            Preview::Tone(tone) => Some(locale::tone_status(tone.as_str())),
            Preview::Generating { .. } => Some(locale::GENERATING.to_string()),
            Preview::Ready => Some(locale::READY.to_string()),
            Preview::Failed(message) => Some(locale::error_status(message)),
            Preview::Unreachable => Some(locale::UNREACHABLE.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Preview::Failed(_) | Preview::Unreachable)
    }
}

/// A generation request that still has to be sent.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticket {
    pub seq: u64,
    pub request: GenerateRequest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Picker {
    policy: PickerPolicy,
    tone: Tone,
    active_sign: Option<String>,
    preview: Preview,
    result: Option<HoroscopeResult>,
    result_visible: bool,
    issued: u64,
}

impl Picker {
    pub fn new(policy: PickerPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn tone(&self) -> &Tone {
        &self.tone
    }

    pub fn active_sign(&self) -> Option<&str> {
        self.active_sign.as_deref()
    }

    pub fn is_sign_active(&self, name: &str) -> bool {
        self.active_sign.as_deref() == Some(name)
    }

    pub fn is_tone_active(&self, button: &ToneButton) -> bool {
        button.tone() == self.tone
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn result(&self) -> Option<&HoroscopeResult> {
        self.result.as_ref()
    }

    /// The result card stays hidden until a horoscope has been applied.
    pub fn visible_result(&self) -> Option<&HoroscopeResult> {
        self.result.as_ref().filter(|_| self.result_visible)
    }

    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    pub fn select_tone(&mut self, button: &ToneButton) -> Option<Ticket> {
        self.tone = button.tone();
        self.preview = Preview::Tone(self.tone.clone());

        if self.policy.tone_change != ToneChange::Refetch {
            return None;
        }
        let sign = self.active_sign.clone()?;
        self.preview = Preview::Generating {
            emoji: emoji_for(&sign).to_string(),
            name: sign.clone(),
        };
        Some(self.issue(sign))
    }

    pub fn select_sign(&mut self, button: &SignButton) -> Ticket {
        let name = button.display_name();
        self.active_sign = Some(name.clone());
        self.preview = Preview::Generating {
            emoji: button.display_emoji(),
            name: name.clone(),
        };
        self.issue(name)
    }

    pub fn again(&mut self) -> Option<Ticket> {
        match self.policy.again {
            AgainAction::Regenerate => {
                let sign = self.visible_result()?.sign.clone();
                self.preview = Preview::Generating {
                    emoji: emoji_for(&sign).to_string(),
                    name: sign.clone(),
                };
                Some(self.issue(sign))
            }
            AgainAction::Reset => {
                self.result_visible = false;
                None
            }
        }
    }

    /// Applies the outcome of `seq`; anything older than the latest ticket is dropped.
    pub fn resolve(&mut self, seq: u64, outcome: ApiResult<HoroscopeResult>) -> Resolution {
        if seq != self.issued {
            debug!(seq, latest = self.issued, "dropping stale horoscope response");
            return Resolution::Stale;
        }
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.result_visible = true;
                self.preview = Preview::Ready;
            }
            Err(ApiError::Rejected(message)) => self.preview = Preview::Failed(message),
            Err(_) => self.preview = Preview::Unreachable,
        }
        Resolution::Applied
    }

    pub fn share_payload(&self) -> Option<SharePayload> {
        let result = self.visible_result()?;
        Some(SharePayload {
            title: locale::share_title(&result.sign),
            text: locale::share_text(&result.sign, &result.text, &result.sarcasm),
        })
    }

    fn issue(&mut self, sign: String) -> Ticket {
        self.issued += 1;
        debug!(seq = self.issued, %sign, tone = %self.tone, "issuing horoscope request");
        Ticket {
            seq: self.issued,
            request: GenerateRequest {
                sign,
                tone: self.tone.clone(),
            },
        }
    }
}

/// Sends a ticket; the outcome goes back through [`Picker::resolve`].
pub async fn dispatch<B>(backend: &B, ticket: Ticket) -> (u64, ApiResult<HoroscopeResult>)
where
    B: HoroscopeBackend + ?Sized,
{
    let outcome = backend.generate(&ticket.request).await;
    (ticket.seq, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    fn leo() -> SignButton {
        SignButton::new("Leo", "♌")
    }

    fn result(sign: &str) -> HoroscopeResult {
        HoroscopeResult {
            sign: sign.into(),
            text: "You will trip on air.".into(),
            sarcasm: Number::from(77),
        }
    }

    #[test]
    fn select_sign_shows_optimistic_preview() {
        let mut picker = Picker::default();
        let ticket = picker.select_sign(&leo());
        assert_eq!(ticket.seq, 1);
        assert_eq!(
            picker.preview(),
            &Preview::Generating {
                emoji: "♌".into(),
                name: "Leo".into()
            }
        );
        assert!(picker.visible_result().is_none());
    }

    #[test]
    fn rejection_keeps_previous_result() {
        let mut picker = Picker::default();
        let first = picker.select_sign(&leo());
        picker.resolve(first.seq, Ok(result("Leo")));

        let second = picker.select_sign(&leo());
        picker.resolve(second.seq, Err(ApiError::Rejected("rate limited".into())));
        assert_eq!(picker.preview(), &Preview::Failed("rate limited".into()));
        assert_eq!(picker.visible_result(), Some(&result("Leo")));
    }

    #[test]
    fn tone_change_without_sign_only_updates_label() {
        let mut picker = Picker::default();
        let ticket = picker.select_tone(&ToneButton::new("hard", "Ass"));
        assert!(ticket.is_none());
        assert_eq!(picker.preview().status().unwrap(), "Sarunas tons: hard");
    }

    #[test]
    fn reset_policy_hides_card() {
        let mut picker = Picker::new(PickerPolicy {
            again: AgainAction::Reset,
            ..PickerPolicy::default()
        });
        let ticket = picker.select_sign(&leo());
        picker.resolve(ticket.seq, Ok(result("Leo")));
        assert!(picker.again().is_none());
        assert!(picker.visible_result().is_none());
        assert!(picker.share_payload().is_none());
    }
}
