//! Signs and tones offered on the page. Names match what the horoscope
//! server accepts.

use crate::types::{FALLBACK_EMOJI, SignButton, ToneButton};

pub const SIGNS: &[(&str, &str)] = &[
    ("Овен", "♈"),
    ("Телец", "♉"),
    ("Близнецы", "♊"),
    ("Рак", "♋"),
    ("Лев", "♌"),
    ("Дева", "♍"),
    ("Весы", "♎"),
    ("Скорпион", "♏"),
    ("Стрелец", "♐"),
    ("Козерог", "♑"),
    ("Водолей", "♒"),
    ("Рыбы", "♓"),
];

pub const TONES: &[(&str, &str)] = &[("light", "Viegls"), ("normal", "Normāls"), ("hard", "Ass")];

pub fn sign_buttons() -> Vec<SignButton> {
    SIGNS
        .iter()
        .map(|(name, emoji)| SignButton::new(name, emoji))
        .collect()
}

pub fn tone_buttons() -> Vec<ToneButton> {
    TONES
        .iter()
        .map(|(tone, label)| ToneButton::new(tone, label))
        .collect()
}

/// Glyph for a sign name; unknown names get the sparkle.
pub fn emoji_for(sign: &str) -> &'static str {
    SIGNS
        .iter()
        .find(|(name, _)| *name == sign)
        .map(|(_, emoji)| *emoji)
        .unwrap_or(FALLBACK_EMOJI)
}
