//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CompaError, CompaResult};

use super::types::{Config, CONFIG_FILE};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Known leaf keys, used for unknown-key suggestions.
const KNOWN_KEYS: &[&str] = &["order", "path", "worksheet", "debounce_ms", "timeout_ms"];

/// Load configuration from a TOML file.
pub fn load(path: &Path) -> CompaResult<Config> {
    Ok(load_with_warnings(path)?.0)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CompaResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| {
        CompaError::validation(format!("invalid config {}: {}", path.display(), e))
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `<root>/compa.toml` if present, else defaults; apply
/// environment overrides either way.
pub fn load_or_default(root: Option<&Path>) -> Config {
    let config = root
        .map(|r| r.join(CONFIG_FILE))
        .filter(|p| p.exists())
        .and_then(|p| Config::load(&p).ok())
        .unwrap_or_default();
    with_env_overrides(config)
}

/// Apply environment variable overrides (`COMPA_*` prefix).
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(path) = std::env::var("COMPA_STORE_PATH") {
        if !path.is_empty() {
            config.store.path = PathBuf::from(path);
        }
    }

    if let Ok(ms) = std::env::var("COMPA_DEBOUNCE_MS") {
        if let Ok(parsed) = ms.parse::<u64>() {
            config.recalc.debounce_ms = parsed;
        }
    }

    config
}

/// Best-effort line lookup for a key in the raw TOML text.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|idx| idx + 1)
}

/// Suggest a known key that differs only by case or underscores.
fn suggest_key(key: &str) -> Option<String> {
    let normalized = key.to_lowercase().replace('-', "_");
    KNOWN_KEYS
        .iter()
        .find(|known| **known == normalized)
        .map(|known| (*known).to_string())
}
