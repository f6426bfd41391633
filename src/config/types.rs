//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_DEBOUNCE_MS;
use crate::domain::value_objects::GradeOrder;
use crate::error::{CompaError, CompaResult};

use super::loader::{self, ConfigWarning};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "compa.toml";

/// Grade catalog configuration (the bootstrap grade order).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GradesConfig {
    /// Grade names, highest first; the last one is the base grade
    #[serde(default)]
    pub order: Vec<String>,
}

/// Scenario store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the scenario store file
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// Path of the working-model worksheet file
    #[serde(default = "default_worksheet_path")]
    pub worksheet: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            worksheet: default_worksheet_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".compa/scenarios.json")
}

fn default_worksheet_path() -> PathBuf {
    PathBuf::from(".compa/worksheet.json")
}

/// Recalculation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalcConfig {
    /// Debounce window between the last edit and the recompute
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Bound for a blocking recompute step, if any
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl RecalcConfig {
    /// The debounce window as a duration, for scheduler construction.
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }

    /// The in-flight bound as a duration, if configured.
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_ms.map(std::time::Duration::from_millis)
    }
}

impl Default for RecalcConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            timeout_ms: None,
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Root configuration loaded from `compa.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub grades: GradesConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub recalc: RecalcConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> CompaResult<Self> {
        loader::load(path)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> CompaResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the project config if present, else defaults; apply
    /// `COMPA_*` environment overrides either way.
    pub fn load_or_default(root: Option<&Path>) -> Self {
        loader::load_or_default(root)
    }

    /// The validated grade order, or a validation error naming the fix
    /// when no grades are configured yet.
    pub fn grade_order(&self) -> CompaResult<GradeOrder> {
        if self.grades.order.is_empty() {
            return Err(CompaError::validation(
                "no grades configured: add a [grades] order to compa.toml",
            ));
        }
        GradeOrder::new(self.grades.order.clone())
    }
}
