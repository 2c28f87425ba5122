use crate::api::{HttpBackend, SharedBackend};
use crate::config::{ClientConfig, PickerPolicy};
use crate::locale;
use crate::press::{PressFeedback, window_release_script};
use crate::theme::PAGE_CSS;
use crate::views::{AgeGateView, PickerView, StatsView};
use dioxus::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Horoscope,
    Stats,
}

#[component]
pub fn App() -> Element {
    let config = use_hook(ClientConfig::load);
    let backend_config = config.clone();
    use_context_provider(move || -> SharedBackend { Rc::new(HttpBackend::new(backend_config)) });

    let active_tab = use_signal(|| AppTab::Horoscope);
    let mut verified = use_signal(|| !config.age_gate);
    let press = use_signal(PressFeedback::default);

    use_window_release(press);

    rsx! {
        PageStyles { press }
        div {
            class: "app-root",
            if verified() {
                AppHeader { active_tab }
                TabPanels { active_tab, policy: config.policy }
            } else {
                AgeGateView { press, on_verified: move |_| verified.set(true) }
            }
        }
    }
}

/// Ends the grab cursor on any release, including outside the app root.
fn use_window_release(mut press: Signal<PressFeedback>) {
    use_hook(move || {
        spawn(async move {
            let mut releases = dioxus::document::eval(&window_release_script());
            while releases.recv::<String>().await.is_ok() {
                press.with_mut(|state| state.press_end());
            }
        });
    });
}

#[component]
fn PageStyles(press: Signal<PressFeedback>) -> Element {
    let body_override = press().body_override();
    rsx! {
        style { dangerous_inner_html: PAGE_CSS }
        if let Some(css) = body_override {
            style { dangerous_inner_html: css }
        }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "header",
            TabNavigation { active_tab }
        }
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>, policy: PickerPolicy) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Horoscope,
                children: rsx!( PickerView { policy } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Stats,
                children: rsx!( StatsView {} ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Horoscope, label: locale::TAB_HOROSCOPE }
            TabButton { active_tab, tab: AppTab::Stats, label: locale::TAB_STATS }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        h1 {
            class: class,
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}
