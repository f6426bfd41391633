//! Scenario store use case
//!
//! Runs the scenario lifecycle over a `ScenarioRepository` port:
//! save-draft, apply, archive, plus the read-only views. Transitions
//! are serialized through one mutex so the demote/promote pair of an
//! apply can never interleave with another transition and break the
//! "exactly one current" invariant.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::domain::entities::{BandTable, RateInputModel, Scenario};
use crate::domain::ports::ScenarioRepository;
use crate::domain::services::{ComparisonResult, ComparisonService};
use crate::domain::value_objects::ScenarioStatus;
use crate::error::{CompaError, CompaResult};

/// Lifecycle manager for grading scenarios.
///
/// Holds the repository behind a mutex: reads are short, transitions
/// are read-modify-commit, and both take the same lock.
pub struct ScenarioStore<R: ScenarioRepository> {
    repo: Mutex<R>,
}

impl<R: ScenarioRepository> ScenarioStore<R> {
    /// Create a store over the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo: Mutex::new(repo),
        }
    }

    fn lock(&self) -> CompaResult<std::sync::MutexGuard<'_, R>> {
        self.repo
            .lock()
            .map_err(|_| CompaError::conflict("scenario store lock poisoned"))
    }

    /// Save the working state as a new draft scenario.
    ///
    /// A scenario without computed bands cannot be saved: an unresolved
    /// snapshot would have nothing to review, apply or compare.
    pub fn save_draft(
        &self,
        name: Option<String>,
        description: Option<String>,
        input_snapshot: &RateInputModel,
        band_snapshot: &BandTable,
    ) -> CompaResult<Scenario> {
        if input_snapshot.base_value().is_none() {
            return Err(CompaError::validation(
                "cannot save scenario: base value is not set",
            ));
        }
        if band_snapshot.is_empty() {
            return Err(CompaError::validation(
                "cannot save scenario: bands have not been computed",
            ));
        }

        let created_at = Utc::now();
        let mut repo = self.lock()?;
        let id = repo.allocate_id()?;
        let name = name.unwrap_or_else(|| default_name(created_at));
        let scenario = Scenario::new_draft(
            id,
            name,
            description,
            created_at,
            input_snapshot.clone(),
            band_snapshot.clone(),
        );
        repo.commit(vec![scenario.clone()])?;
        Ok(scenario)
    }

    /// Promote a draft to current, demoting the prior current (if any)
    /// to archived in the same commit.
    ///
    /// Returns the promoted scenario. Archived scenarios are terminal
    /// and cannot be re-applied; save their snapshot as a fresh draft
    /// instead.
    pub fn apply(&self, id: &str) -> CompaResult<Scenario> {
        let mut repo = self.lock()?;
        let mut target = repo
            .get(id)?
            .ok_or_else(|| CompaError::ScenarioNotFound { id: id.to_string() })?;

        match target.status() {
            ScenarioStatus::Current => {
                return Err(CompaError::conflict(format!(
                    "scenario '{}' is already current",
                    id
                )));
            }
            ScenarioStatus::Archived => {
                return Err(CompaError::conflict(format!(
                    "scenario '{}' is archived and cannot be re-applied",
                    id
                )));
            }
            ScenarioStatus::Draft => {}
        }

        let mut changed = Vec::with_capacity(2);
        if let Some(mut current) = find_current(&repo.list()?)? {
            current.demote();
            changed.push(current);
        }
        target.promote(Utc::now());
        changed.push(target.clone());
        repo.commit(changed)?;
        Ok(target)
    }

    /// Archive a draft. Terminal: an archived scenario stays readable
    /// for comparison but can never become current again.
    ///
    /// The current scenario cannot be archived directly; it is only
    /// superseded by applying another scenario.
    pub fn archive(&self, id: &str) -> CompaResult<Scenario> {
        let mut repo = self.lock()?;
        let mut target = repo
            .get(id)?
            .ok_or_else(|| CompaError::ScenarioNotFound { id: id.to_string() })?;

        match target.status() {
            ScenarioStatus::Current => {
                return Err(CompaError::conflict(format!(
                    "scenario '{}' is current; apply another scenario to supersede it",
                    id
                )));
            }
            ScenarioStatus::Archived => {
                return Err(CompaError::conflict(format!(
                    "scenario '{}' is already archived",
                    id
                )));
            }
            ScenarioStatus::Draft => {}
        }

        target.archive();
        repo.commit(vec![target.clone()])?;
        Ok(target)
    }

    /// Fetch one scenario by id.
    pub fn get(&self, id: &str) -> CompaResult<Scenario> {
        let repo = self.lock()?;
        repo.get(id)?
            .ok_or_else(|| CompaError::ScenarioNotFound { id: id.to_string() })
    }

    /// All scenarios with the given status, in id-allocation order.
    pub fn list_by_status(&self, status: ScenarioStatus) -> CompaResult<Vec<Scenario>> {
        let repo = self.lock()?;
        Ok(repo
            .list()?
            .into_iter()
            .filter(|s| s.status() == status)
            .collect())
    }

    /// All scenarios regardless of status, in id-allocation order.
    pub fn list(&self) -> CompaResult<Vec<Scenario>> {
        let repo = self.lock()?;
        Ok(repo.list()?)
    }

    /// The singleton current scenario, or `None` before bootstrap.
    ///
    /// Finding more than one current scenario (possible only through
    /// hand-edited storage) surfaces as a conflict instead of being
    /// silently resolved.
    pub fn current(&self) -> CompaResult<Option<Scenario>> {
        let repo = self.lock()?;
        find_current(&repo.list()?)
    }

    /// Bands-only view of the current scenario ("structure" view).
    ///
    /// Same stored entity as [`current_scenario`](Self::current_scenario),
    /// projected to its band table, so the two views can never drift.
    pub fn current_structure(&self) -> CompaResult<Option<BandTable>> {
        Ok(self.current()?.map(|s| s.band_snapshot().clone()))
    }

    /// Inputs-and-bands view of the current scenario ("scenario" view).
    pub fn current_scenario(&self) -> CompaResult<Option<Scenario>> {
        self.current()
    }

    /// Compare stored scenarios side by side.
    ///
    /// See [`ComparisonService::compare`] for the selection rules.
    pub fn compare(
        &self,
        requested_ids: &[String],
        always_include_current: bool,
    ) -> CompaResult<ComparisonResult> {
        let universe = {
            let repo = self.lock()?;
            repo.list()?
        };
        ComparisonService::compare(&universe, requested_ids, always_include_current)
    }
}

/// Locate the current scenario, erroring if the singleton invariant is
/// broken in storage.
fn find_current(scenarios: &[Scenario]) -> CompaResult<Option<Scenario>> {
    let mut currents = scenarios.iter().filter(|s| s.status().is_current());
    let first = currents.next().cloned();
    if currents.next().is_some() {
        return Err(CompaError::conflict(
            "store holds more than one current scenario",
        ));
    }
    Ok(first)
}

fn default_name(created_at: DateTime<Utc>) -> String {
    format!("Scenario {}", created_at.format("%Y-%m-%d %H:%M"))
}
