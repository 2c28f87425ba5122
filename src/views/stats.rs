use crate::api::SharedBackend;
use crate::catalog::emoji_for;
use crate::locale;
use crate::types::StatRow;
use dioxus::prelude::*;

fn refresh(backend: SharedBackend, rows: Signal<Vec<StatRow>>, status: Signal<Option<String>>) {
    let mut rows = rows;
    let mut status = status;
    spawn(async move {
        match backend.stats().await {
            Ok(fresh) => {
                rows.set(fresh);
                status.set(None);
            }
            Err(err) => status.set(Some(err.user_message())),
        }
    });
}

#[component]
pub fn StatsView() -> Element {
    let backend = use_context::<SharedBackend>();
    let rows = use_signal(Vec::<StatRow>::new);
    let status = use_signal(|| Option::<String>::None);

    use_hook({
        let backend = backend.clone();
        move || refresh(backend, rows, status)
    });

    let snapshot = rows();

    rsx! {
        div { class: "main-container",
            div { class: "result-actions",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| refresh(backend.clone(), rows, status),
                    {locale::REFRESH}
                }
            }
            if let Some(text) = status() {
                p { class: "text-muted", "{text}" }
            }
            if snapshot.is_empty() {
                p { class: "text-muted", {locale::STATS_EMPTY} }
            } else {
                table { class: "stats-table",
                    tbody {
                        for row in snapshot.iter() {
                            tr { key: "{row.sign}-{row.tone}",
                                td { "{emoji_for(&row.sign)} {row.sign}" }
                                td { "{row.tone}" }
                                td { "{row.cnt}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
