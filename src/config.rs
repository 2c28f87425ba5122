use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const GENERATE_PATH: &str = "/api/generate";
pub const VERIFY_AGE_PATH: &str = "/verify-age";
pub const STATS_PATH: &str = "/admin/stats";

/// Bundled config for builds without a .env next to them (web, mobile)
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_file(text: &str) -> HashMap<String, String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// What a tone change does when a sign is already active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToneChange {
    #[default]
    Refetch,
    LabelOnly,
}

impl FromStr for ToneChange {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "refetch" | "regenerate" => Ok(Self::Refetch),
            "label" | "label-only" => Ok(Self::LabelOnly),
            other => Err(format!("unknown tone-change policy '{other}'")),
        }
    }
}

/// What the "again" button on the result card does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AgainAction {
    #[default]
    Regenerate,
    Reset,
}

impl FromStr for AgainAction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "regenerate" | "refetch" => Ok(Self::Regenerate),
            "reset" | "hide" => Ok(Self::Reset),
            other => Err(format!("unknown again policy '{other}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PickerPolicy {
    pub tone_change: ToneChange,
    pub again: AgainAction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub age_gate: bool,
    pub policy: PickerPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            age_gate: true,
            policy: PickerPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Bundled values only; wasm has no process environment.
    pub fn from_bundled() -> Self {
        let bundled = parse_env_file(BUNDLED_CONFIG);
        Self::from_lookup(|key| bundled.get(key).cloned())
    }

    /// Config for the running host.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let bundled = parse_env_file(BUNDLED_CONFIG);
        Self::from_lookup(|key| env::var(key).ok().or_else(|| bundled.get(key).cloned()))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::from_bundled()
    }

    /// Builds the config from any key lookup; unknown values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = lookup("HOROSKOPS_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);

        let age_gate = match lookup("HOROSKOPS_AGE_GATE") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("ignoring HOROSKOPS_AGE_GATE={raw}");
                defaults.age_gate
            }),
            None => defaults.age_gate,
        };

        let policy = PickerPolicy {
            tone_change: parse_or_default("HOROSKOPS_TONE_CHANGE", &lookup),
            again: parse_or_default("HOROSKOPS_AGAIN", &lookup),
        };

        Self {
            base_url,
            age_gate,
            policy,
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}{GENERATE_PATH}", self.base_url)
    }

    pub fn verify_age_url(&self) -> String {
        format!("{}{VERIFY_AGE_PATH}", self.base_url)
    }

    pub fn stats_url(&self) -> String {
        format!("{}{STATS_PATH}", self.base_url)
    }
}

fn parse_or_default<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>) -> T
where
    T: FromStr<Err = String> + Default,
{
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|err| {
            warn!("{key}: {err}, using default");
            T::default()
        }),
        None => T::default(),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = config_from(&[]);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.generate_url(), "http://127.0.0.1:5000/api/generate");
    }

    #[test]
    fn reads_recognized_options() {
        let config = config_from(&[
            ("HOROSKOPS_BASE_URL", "https://horo.example/ "),
            ("HOROSKOPS_TONE_CHANGE", "label"),
            ("HOROSKOPS_AGAIN", "Reset"),
            ("HOROSKOPS_AGE_GATE", "off"),
        ]);
        assert_eq!(config.stats_url(), "https://horo.example/admin/stats");
        assert_eq!(config.policy.tone_change, ToneChange::LabelOnly);
        assert_eq!(config.policy.again, AgainAction::Reset);
        assert!(!config.age_gate);
    }

    #[test]
    fn bundled_file_matches_defaults() {
        assert_eq!(ClientConfig::from_bundled(), ClientConfig::default());
    }

    #[test]
    fn env_file_lines() {
        let parsed = parse_env_file("# comment\n\n KEY = value \nBROKEN\nURL=http://a/b?c=d\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["KEY"], "value");
        assert_eq!(parsed["URL"], "http://a/b?c=d");
    }

    #[test]
    fn unknown_values_fall_back() {
        let config = config_from(&[
            ("HOROSKOPS_TONE_CHANGE", "sometimes"),
            ("HOROSKOPS_AGE_GATE", "maybe"),
        ]);
        assert_eq!(config.policy.tone_change, ToneChange::Refetch);
        assert!(config.age_gate);
    }
}
