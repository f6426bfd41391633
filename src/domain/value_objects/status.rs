//! Scenario lifecycle status
//!
//! - `Draft`: under construction, may be applied or archived
//! - `Current`: the single active structure; superseded only via apply
//! - `Archived`: terminal, read-only, kept for historical comparison

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScenarioStatus {
    /// Editable snapshot awaiting review
    Draft,
    /// The one active salary structure
    Current,
    /// Historical snapshot, terminal
    Archived,
}

impl ScenarioStatus {
    /// Returns true for `Draft`
    pub fn is_draft(&self) -> bool {
        matches!(self, ScenarioStatus::Draft)
    }

    /// Returns true for `Current`
    pub fn is_current(&self) -> bool {
        matches!(self, ScenarioStatus::Current)
    }

    /// Returns true for `Archived`
    pub fn is_archived(&self) -> bool {
        matches!(self, ScenarioStatus::Archived)
    }

    /// Parse a status name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Some(ScenarioStatus::Draft),
            "current" => Some(ScenarioStatus::Current),
            "archived" => Some(ScenarioStatus::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioStatus::Draft => write!(f, "draft"),
            ScenarioStatus::Current => write!(f, "current"),
            ScenarioStatus::Archived => write!(f, "archived"),
        }
    }
}
