use crate::api::SharedBackend;
use crate::catalog;
use crate::config::PickerPolicy;
use crate::controller::{Picker, Preview, Ticket, dispatch};
use crate::locale;
use crate::share::{ShareOutcome, host_targets, share_with};
use crate::theme::rating_class;
use crate::timer::delay;
use crate::types::{SignButton, ToneButton};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::time::Duration;

const NOTICE_HIDE_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Select the sign and suppress the browser default (Space would scroll).
    Select,
    Ignore,
}

impl KeyAction {
    pub fn suppresses_default(self) -> bool {
        matches!(self, KeyAction::Select)
    }
}

pub fn key_action(key: &Key) -> KeyAction {
    match key {
        Key::Enter => KeyAction::Select,
        Key::Character(value) if value == " " => KeyAction::Select,
        _ => KeyAction::Ignore,
    }
}

/// Sends the ticket in the background and feeds the answer back to the picker.
fn launch(backend: SharedBackend, mut picker: Signal<Picker>, ticket: Option<Ticket>) {
    let Some(ticket) = ticket else {
        return;
    };
    spawn(async move {
        let (seq, outcome) = dispatch(backend.as_ref(), ticket).await;
        picker.with_mut(|state| state.resolve(seq, outcome));
    });
}

fn use_notice_dismiss(notice: Signal<Option<&'static str>>) {
    use_effect(move || {
        if notice().is_some() {
            let mut control = notice;
            spawn(async move {
                delay(NOTICE_HIDE_DELAY).await;
                control.set(None);
            });
        }
    });
}

#[component]
pub fn PickerView(policy: PickerPolicy) -> Element {
    let backend = use_context::<SharedBackend>();
    let picker = use_signal(move || Picker::new(policy));
    let notice = use_signal(|| Option::<&'static str>::None);
    let prompt_text = use_signal(|| Option::<String>::None);
    let signs = use_hook(catalog::sign_buttons);
    let tones = use_hook(catalog::tone_buttons);

    use_notice_dismiss(notice);

    let on_tone = {
        let backend = backend.clone();
        let mut picker = picker;
        move |button: ToneButton| {
            let ticket = picker.with_mut(|state| state.select_tone(&button));
            launch(backend.clone(), picker, ticket);
        }
    };

    let on_sign = {
        let backend = backend.clone();
        let mut picker = picker;
        move |button: SignButton| {
            let ticket = picker.with_mut(|state| state.select_sign(&button));
            launch(backend.clone(), picker, Some(ticket));
        }
    };

    let on_again = {
        let backend = backend.clone();
        let mut picker = picker;
        move |_| {
            let ticket = picker.with_mut(|state| state.again());
            launch(backend.clone(), picker, ticket);
        }
    };

    let on_share = move |_| {
        let Some(payload) = picker.read().share_payload() else {
            return;
        };
        let mut notice = notice;
        let mut prompt_text = prompt_text;
        spawn(async move {
            let targets = host_targets();
            match share_with(&targets, &payload).await {
                ShareOutcome::Prompt(text) => prompt_text.set(Some(text)),
                outcome => {
                    if let Some(message) = outcome.notice() {
                        notice.set(Some(message));
                    }
                }
            }
        });
    };

    let state = picker.read().clone();
    let card_style = if state.visible_result().is_some() {
        "display: block;"
    } else {
        "display: none;"
    };

    rsx! {
        div { class: "main-container",
            div { class: "tone-toggle",
                for tone_button in tones.iter() {
                    ToneChip {
                        key: "{tone_button.label}",
                        active: state.is_tone_active(tone_button),
                        button: tone_button.clone(),
                        onselect: on_tone.clone(),
                    }
                }
            }
            div { id: "signsGrid", class: "signs-grid",
                for sign_button in signs.iter() {
                    SignTile {
                        key: "{sign_button.display_name()}",
                        active: state.is_sign_active(&sign_button.display_name()),
                        button: sign_button.clone(),
                        onselect: on_sign.clone(),
                    }
                }
            }
            PreviewPanel { preview: state.preview().clone() }
            div {
                id: "resultCard",
                class: "result-card",
                style: card_style,
                if let Some(result) = state.visible_result() {
                    h2 { id: "resSign", "{result.sign}" }
                    p { id: "resText", "{result.text}" }
                    div { id: "resRate", class: rating_class(&result.sarcasm), {locale::rating(&result.sarcasm)} }
                }
                div { class: "result-actions",
                    button { id: "againBtn", class: "btn", r#type: "button", onclick: on_again, {locale::AGAIN} }
                    button { id: "shareBtn", class: "btn btn-primary", r#type: "button", onclick: on_share, {locale::SHARE} }
                }
            }
            if let Some(message) = notice() {
                div { class: "toast", role: "status", "{message}" }
            }
            if let Some(text) = prompt_text() {
                CopyPrompt { text, prompt_text }
            }
        }
    }
}

#[component]
fn ToneChip(button: ToneButton, active: bool, onselect: EventHandler<ToneButton>) -> Element {
    let class = if active { "active" } else { "" };
    let label = button.label.clone();
    let data_tone = button.data_tone.clone();
    rsx! {
        button {
            class: class,
            r#type: "button",
            "data-tone": data_tone,
            onclick: move |_| onselect.call(button.clone()),
            "{label}"
        }
    }
}

#[component]
fn SignTile(button: SignButton, active: bool, onselect: EventHandler<SignButton>) -> Element {
    let class = if active { "sign active" } else { "sign" };
    let name = button.display_name();
    let emoji = button.display_emoji();
    let key_button = button.clone();
    rsx! {
        div {
            class: class,
            role: "button",
            tabindex: "0",
            aria_pressed: active.to_string(),
            "data-sign": "{name}",
            onclick: move |_| onselect.call(button.clone()),
            onkeydown: move |evt: KeyboardEvent| {
                let action = key_action(&evt.key());
                if action.suppresses_default() {
                    evt.prevent_default();
                }
                if action == KeyAction::Select {
                    onselect.call(key_button.clone());
                }
            },
            span { class: "emoji", "{emoji}" }
            b { "{name}" }
        }
    }
}

#[component]
fn PreviewPanel(preview: Preview) -> Element {
    let status_class = if preview.is_error() {
        "preview-status error"
    } else {
        "preview-status"
    };
    rsx! {
        div { id: "preview", class: "preview", aria_live: "polite",
            if let Preview::Generating { emoji, name } = &preview {
                div { class: "preview-emoji", "{emoji}" }
                div { class: "preview-name", "{name}" }
            }
            if let Some(status) = preview.status() {
                div { class: status_class, "{status}" }
            }
        }
    }
}

#[component]
fn CopyPrompt(text: String, prompt_text: Signal<Option<String>>) -> Element {
    let mut prompt_text = prompt_text;
    rsx! {
        div { class: "modal-overlay",
            div { class: "modal", role: "dialog",
                p { {locale::COPY_PROMPT} }
                textarea { readonly: true, autofocus: true, value: "{text}" }
                div { class: "result-actions",
                    button { class: "btn", r#type: "button", onclick: move |_| prompt_text.set(None), {locale::CLOSE} }
                }
            }
        }
    }
}
