//! Grab cursor while the submit button is held down.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PressFeedback {
    /// Never pressed; the stylesheet decides the cursor.
    #[default]
    Idle,
    Pressed,
    Released,
}

const BODY_GRABBING: &str = "body { cursor: grabbing; }";

/// Window events that end a press, wherever the pointer is released.
pub const RELEASE_EVENTS: [&str; 2] = ["mouseup", "touchend"];

/// Script that reports every window-level release back to the app.
pub fn window_release_script() -> String {
    RELEASE_EVENTS
        .iter()
        .map(|event| format!(r#"window.addEventListener("{event}", () => dioxus.send("{event}"));"#))
        .collect::<Vec<_>>()
        .join("\n")
}

impl PressFeedback {
    pub fn press_start(&mut self) {
        *self = PressFeedback::Pressed;
    }

    /// Release can happen anywhere on the page, pressed or not.
    pub fn press_end(&mut self) {
        if *self != PressFeedback::Idle {
            *self = PressFeedback::Released;
        }
    }

    pub fn button_style(&self) -> &'static str {
        match self {
            PressFeedback::Idle => "",
            PressFeedback::Pressed => "cursor: grabbing;",
            PressFeedback::Released => "cursor: pointer;",
        }
    }

    pub fn body_override(&self) -> Option<&'static str> {
        match self {
            PressFeedback::Pressed => Some(BODY_GRABBING),
            _ => None,
        }
    }
}
