//! User-facing strings. The page speaks Latvian.

use serde_json::Number;

pub const GENERATING: &str = "Ģenerējam...";
pub const READY: &str = "Gatavs";
pub const UNKNOWN_ERROR: &str = "Nezināms";
pub const UNREACHABLE: &str = "Servers nav pieejams 😭";
pub const COPIED: &str = "Kopēts starpliktuvē";
pub const COPY_PROMPT: &str = "Kopējiet tekstu:";
pub const RATING_LABEL: &str = "Sarkasms";
pub const AGAIN: &str = "Vēlreiz";
pub const SHARE: &str = "Dalīties";
pub const CLOSE: &str = "Aizvērt";
pub const AGE_TITLE: &str = "Cik tev gadu?";
pub const AGE_PROMPT: &str = "Ievadi dzimšanas datumu";
pub const AGE_SUBMIT: &str = "Turpināt";
pub const AGE_DENIED: &str = "Piekļuve liegta";
pub const TAB_HOROSCOPE: &str = "Horoskops";
pub const TAB_STATS: &str = "Statistika";
pub const STATS_EMPTY: &str = "Vēl nav pieprasījumu";
pub const REFRESH: &str = "Atjaunot";

pub fn tone_status(tone: &str) -> String {
    format!("Sarunas tons: {tone}")
}

pub fn error_status(message: &str) -> String {
    format!("Kļūda: {message}")
}

pub fn invalid_birthdate(input: &str) -> String {
    format!("Nederīgs datums: {input} (GGGG-MM-DD)")
}

/// `Sarkasms: 77/100`
pub fn rating(sarcasm: &Number) -> String {
    format!("{RATING_LABEL}: {sarcasm}/100")
}

pub fn share_title(sign: &str) -> String {
    format!("Horoskops {sign}")
}

/// `<sign>: <text> (Sarkasms 77/100)`
pub fn share_text(sign: &str, text: &str, sarcasm: &Number) -> String {
    format!("{sign}: {text} ({RATING_LABEL} {sarcasm}/100)")
}
