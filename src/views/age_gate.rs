use crate::api::SharedBackend;
use crate::locale;
use crate::press::PressFeedback;
use crate::types::AgeDecision;
use dioxus::prelude::*;

fn denial_message(reason: Option<String>) -> String {
    reason
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| locale::AGE_DENIED.to_string())
}

#[component]
pub fn AgeGateView(press: Signal<PressFeedback>, on_verified: EventHandler<()>) -> Element {
    let backend = use_context::<SharedBackend>();
    let mut birthdate = use_signal(String::new);
    let message = use_signal(|| Option::<String>::None);
    let checking = use_signal(|| false);
    let mut press = press;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if checking() {
            return;
        }
        let backend = backend.clone();
        let input = birthdate();
        let mut message = message;
        let mut checking = checking;
        checking.set(true);
        message.set(None);
        spawn(async move {
            match backend.verify_age(&input).await {
                Ok(AgeDecision::Allowed) => on_verified.call(()),
                Ok(AgeDecision::Denied(reason)) => message.set(Some(denial_message(reason))),
                Err(err) => message.set(Some(err.user_message())),
            }
            checking.set(false);
        });
    };

    rsx! {
        form { class: "age-form", onsubmit: on_submit,
            h2 { {locale::AGE_TITLE} }
            label { r#for: "birthdate", class: "text-muted", {locale::AGE_PROMPT} }
            input {
                id: "birthdate",
                r#type: "date",
                required: true,
                value: "{birthdate}",
                oninput: move |ev| birthdate.set(ev.value()),
            }
            if let Some(text) = message() {
                p { class: "error", "{text}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                style: press().button_style(),
                disabled: checking(),
                onmousedown: move |_| press.with_mut(|state| state.press_start()),
                ontouchstart: move |_| press.with_mut(|state| state.press_start()),
                {locale::AGE_SUBMIT}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denial_uses_server_reason() {
        assert_eq!(denial_message(Some("too young".into())), "too young");
        assert_eq!(denial_message(Some("  ".into())), locale::AGE_DENIED);
        assert_eq!(denial_message(None), locale::AGE_DENIED);
    }
}
