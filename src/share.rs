//! Sharing a horoscope: native share sheet, then clipboard, then a prompt
//! with the text pre-filled.

use crate::locale;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    /// The user closed the share sheet.
    Dismissed,
    /// Nothing could take the text; show it for manual copying.
    Prompt(String),
}

impl ShareOutcome {
    /// Confirmation shown after the action, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Copied => Some(locale::COPIED),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("not supported on this host")]
    Unsupported,

    #[error("cancelled by the user")]
    Cancelled,

    #[error("share failed: {0}")]
    Failed(String),
}

#[async_trait(?Send)]
pub trait ShareTarget {
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool;

    async fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError>;
}

/// Tries each target in order. A cancelled share ends the chain quietly;
/// unsupported or failing targets hand over to the next one.
pub async fn share_with(targets: &[Box<dyn ShareTarget>], payload: &SharePayload) -> ShareOutcome {
    for target in targets {
        if !target.is_available() {
            debug!(via = target.name(), "share target unavailable");
            continue;
        }
        match target.share(payload).await {
            Ok(outcome) => {
                info!(via = target.name(), ?outcome, "shared horoscope");
                return outcome;
            }
            Err(ShareError::Cancelled) => {
                debug!(via = target.name(), "share dismissed");
                return ShareOutcome::Dismissed;
            }
            Err(ShareError::Unsupported) => {
                debug!(via = target.name(), "share target unsupported");
            }
            Err(err) => warn!(via = target.name(), "{err}"),
        }
    }
    ShareOutcome::Prompt(payload.text.clone())
}

/// Share targets of the running host, in fallback order.
pub fn host_targets() -> Vec<Box<dyn ShareTarget>> {
    vec![Box::new(NativeShare), Box::new(ClipboardShare)]
}

/// `navigator.share` of the webview or browser.
pub struct NativeShare;

#[async_trait(?Send)]
impl ShareTarget for NativeShare {
    fn name(&self) -> &'static str {
        "native"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        let payload =
            serde_json::to_string(payload).map_err(|err| ShareError::Failed(err.to_string()))?;
        let script = format!(
            r#"
const payload = {payload};
if (!navigator.share) {{ return "unsupported"; }}
try {{
    await navigator.share(payload);
    return "shared";
}} catch (e) {{
    return e && e.name === "AbortError" ? "cancelled" : "failed: " + e;
}}
"#
        );
        let answer = dioxus::document::eval(&script)
            .join::<String>()
            .await
            .map_err(|err| ShareError::Failed(format!("{err:?}")))?;
        match answer.as_str() {
            "shared" => Ok(ShareOutcome::Shared),
            "unsupported" => Err(ShareError::Unsupported),
            "cancelled" => Err(ShareError::Cancelled),
            other => Err(ShareError::Failed(other.to_string())),
        }
    }
}

/// System clipboard.
pub struct ClipboardShare;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl ShareTarget for ClipboardShare {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn is_available(&self) -> bool {
        arboard::Clipboard::new().is_ok()
    }

    async fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ShareError::Failed(err.to_string()))?;
        clipboard
            .set_text(payload.text.clone())
            .map_err(|err| ShareError::Failed(err.to_string()))?;
        Ok(ShareOutcome::Copied)
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl ShareTarget for ClipboardShare {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        let text =
            serde_json::to_string(&payload.text).map_err(|err| ShareError::Failed(err.to_string()))?;
        let script = format!(
            r#"
if (!navigator.clipboard) {{ return "unsupported"; }}
try {{
    await navigator.clipboard.writeText({text});
    return "copied";
}} catch (e) {{
    return "failed: " + e;
}}
"#
        );
        let answer = dioxus::document::eval(&script)
            .join::<String>()
            .await
            .map_err(|err| ShareError::Failed(format!("{err:?}")))?;
        match answer.as_str() {
            "copied" => Ok(ShareOutcome::Copied),
            "unsupported" => Err(ShareError::Unsupported),
            other => Err(ShareError::Failed(other.to_string())),
        }
    }
}
