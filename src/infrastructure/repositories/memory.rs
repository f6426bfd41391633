//! In-memory scenario repository
//!
//! Keeps everything in a map; nothing survives the process. Used by
//! unit and integration tests, and by callers embedding the engine
//! that handle durability themselves.

use std::collections::BTreeMap;

use crate::domain::entities::Scenario;
use crate::domain::ports::{RepositoryResult, ScenarioRepository};

/// Volatile repository backed by a `BTreeMap`.
#[derive(Debug, Default)]
pub struct InMemoryScenarioRepository {
    next_id: u64,
    scenarios: BTreeMap<String, Scenario>,
    insertion_order: Vec<String>,
}

impl InMemoryScenarioRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioRepository for InMemoryScenarioRepository {
    fn allocate_id(&mut self) -> RepositoryResult<String> {
        self.next_id += 1;
        Ok(format!("scn-{}", self.next_id))
    }

    fn get(&self, id: &str) -> RepositoryResult<Option<Scenario>> {
        Ok(self.scenarios.get(id).cloned())
    }

    fn list(&self) -> RepositoryResult<Vec<Scenario>> {
        Ok(self
            .insertion_order
            .iter()
            .filter_map(|id| self.scenarios.get(id).cloned())
            .collect())
    }

    fn commit(&mut self, scenarios: Vec<Scenario>) -> RepositoryResult<()> {
        for scenario in scenarios {
            let id = scenario.id().to_string();
            if !self.scenarios.contains_key(&id) {
                self.insertion_order.push(id.clone());
            }
            self.scenarios.insert(id, scenario);
        }
        Ok(())
    }
}
