use serde_json::Number;

/// Class for the rating badge, by sarcasm level.
pub fn rating_class(sarcasm: &Number) -> &'static str {
    match sarcasm.as_f64() {
        Some(value) if value >= 70.0 => "rate rate-high",
        Some(value) if value >= 35.0 => "rate rate-mid",
        _ => "rate rate-low",
    }
}

pub const PAGE_CSS: &str = r#"
:root {
    --bg: #0f0b1e;
    --card: #1a1433;
    --text: #f3efff;
    --muted: #a59cc9;
    --accent: #c79bff;
    --error: #ff8a8a;
    --border: #2e2552;
}
body { margin: 0; background: var(--bg); color: var(--text); font-family: system-ui, sans-serif; }
.app-root { min-height: 100vh; }
.header { display: flex; align-items: center; justify-content: space-between; padding: 1rem 1.5rem; }
.tabs { display: flex; gap: 1rem; }
.tab { cursor: pointer; color: var(--muted); font-size: 1rem; margin: 0; }
.tab.active { color: var(--text); }
.tab-panel { display: none; }
.tab-panel.active { display: block; }
.main-container { max-width: 720px; margin: 0 auto; padding: 1rem 1.5rem 3rem; }
.tone-toggle { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.tone-toggle button { background: var(--card); color: var(--muted); border: 1px solid var(--border); border-radius: 999px; padding: 0.4rem 1rem; cursor: pointer; }
.tone-toggle button.active { color: var(--bg); background: var(--accent); border-color: var(--accent); }
.signs-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 0.75rem; }
.sign { background: var(--card); border: 1px solid var(--border); border-radius: 12px; padding: 0.75rem; text-align: center; cursor: pointer; user-select: none; }
.sign:focus { outline: 2px solid var(--accent); }
.sign.active { border-color: var(--accent); box-shadow: 0 0 0 1px var(--accent); }
.sign .emoji { font-size: 28px; display: block; }
.preview { min-height: 4rem; margin: 1.5rem 0; text-align: center; }
.preview .preview-emoji { font-size: 28px; margin-bottom: 6px; }
.preview .preview-name { font-weight: 700; }
.preview .preview-status { color: var(--muted); margin-top: 6px; }
.preview .preview-status.error { color: var(--error); }
.result-card { background: var(--card); border: 1px solid var(--border); border-radius: 16px; padding: 1.25rem; }
.result-card h2 { margin: 0 0 0.5rem; }
.rate { font-size: 0.9rem; color: var(--muted); }
.rate-mid { color: var(--accent); }
.rate-high { color: var(--error); }
.result-actions { display: flex; gap: 0.5rem; margin-top: 1rem; }
.btn { background: transparent; color: var(--text); border: 1px solid var(--border); border-radius: 8px; padding: 0.45rem 1rem; cursor: pointer; }
.btn-primary { background: var(--accent); color: var(--bg); border-color: var(--accent); }
.toast { position: fixed; bottom: 1.5rem; left: 50%; transform: translateX(-50%); background: var(--card); border: 1px solid var(--accent); border-radius: 8px; padding: 0.5rem 1rem; }
.modal-overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.6); display: flex; align-items: center; justify-content: center; }
.modal { background: var(--card); border-radius: 12px; padding: 1.25rem; width: min(90vw, 480px); }
.modal textarea { width: 100%; min-height: 6rem; background: var(--bg); color: var(--text); border: 1px solid var(--border); border-radius: 8px; }
.age-form { display: flex; flex-direction: column; gap: 0.75rem; max-width: 320px; margin: 3rem auto; }
.age-form input { background: var(--card); color: var(--text); border: 1px solid var(--border); border-radius: 8px; padding: 0.5rem; }
.age-form .error { color: var(--error); }
.stats-table { width: 100%; border-collapse: collapse; }
.stats-table td, .stats-table th { border-bottom: 1px solid var(--border); padding: 0.4rem; text-align: left; }
.text-muted { color: var(--muted); }
"#;
