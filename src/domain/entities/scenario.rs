//! Scenario entity
//!
//! A named, versioned snapshot of (rate inputs, computed bands) with a
//! lifecycle status. Lifecycle transitions are crate-internal: callers
//! go through the scenario store, which enforces the transition rules
//! and the "exactly one current" invariant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{BandTable, RateInputModel};
use crate::domain::value_objects::ScenarioStatus;

/// A persisted grading scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    description: Option<String>,
    status: ScenarioStatus,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    applied_at: Option<DateTime<Utc>>,
    input_snapshot: RateInputModel,
    band_snapshot: BandTable,
}

impl Scenario {
    /// Create a new draft scenario. Ids are assigned by the store.
    pub(crate) fn new_draft(
        id: String,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
        input_snapshot: RateInputModel,
        band_snapshot: BandTable,
    ) -> Self {
        Self {
            id,
            name,
            description,
            status: ScenarioStatus::Draft,
            created_at,
            applied_at: None,
            input_snapshot,
            band_snapshot,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name (auto-generated from the creation time if the
    /// operator did not supply one).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional free-text description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Lifecycle status.
    pub fn status(&self) -> ScenarioStatus {
        self.status
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When this scenario last became current, if it ever did.
    pub fn applied_at(&self) -> Option<DateTime<Utc>> {
        self.applied_at
    }

    /// The rate inputs this scenario was computed from.
    pub fn input_snapshot(&self) -> &RateInputModel {
        &self.input_snapshot
    }

    /// The bands computed from the input snapshot.
    pub fn band_snapshot(&self) -> &BandTable {
        &self.band_snapshot
    }

    /// Promote to current (store-internal; part of an apply transition).
    pub(crate) fn promote(&mut self, applied_at: DateTime<Utc>) {
        self.status = ScenarioStatus::Current;
        self.applied_at = Some(applied_at);
    }

    /// Demote a superseded current scenario to archived (store-internal).
    pub(crate) fn demote(&mut self) {
        self.status = ScenarioStatus::Archived;
    }

    /// Archive a draft (store-internal).
    pub(crate) fn archive(&mut self) {
        self.status = ScenarioStatus::Archived;
    }
}
