//! JSON-file scenario repository
//!
//! Durable storage for scenarios: one JSON file holding a version
//! marker, the id counter and every scenario record in wire shape.
//! Writes go through a temp file in the same directory followed by an
//! atomic rename, so a crash mid-write leaves the previous file intact.
//!
//! Cross-process exclusion uses an `fs2` exclusive lock on a sidecar
//! `.lock` file, held for the lifetime of the repository handle: two
//! processes can never interleave the demote/promote pair of an apply.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Scenario;
use crate::domain::ports::{RepositoryError, RepositoryResult, ScenarioRepository};

/// On-disk format version.
const STORE_VERSION: u32 = 1;

/// File representation of the scenario store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    version: u32,
    next_id: u64,
    #[serde(default)]
    scenarios: Vec<Scenario>,
}

impl StoreFile {
    fn new() -> Self {
        Self {
            version: STORE_VERSION,
            next_id: 0,
            scenarios: Vec::new(),
        }
    }
}

/// File-backed repository holding the store lock for its lifetime.
#[derive(Debug)]
pub struct JsonScenarioRepository {
    path: PathBuf,
    state: StoreFile,
    // Exclusive fs2 lock, released on drop
    _lock: File,
}

impl JsonScenarioRepository {
    /// Open (or create) the store at `path`, taking the exclusive lock.
    pub fn open(path: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let lock_path = lock_path_for(&path);
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(io_err)?;
        lock.lock_exclusive().map_err(io_err)?;

        let state = if path.exists() {
            let content = fs::read_to_string(&path).map_err(io_err)?;
            let parsed: StoreFile = serde_json::from_str(&content)
                .map_err(|e| RepositoryError::Corrupt(e.to_string()))?;
            if parsed.version != STORE_VERSION {
                return Err(RepositoryError::VersionMismatch {
                    found: parsed.version,
                    expected: STORE_VERSION,
                });
            }
            parsed
        } else {
            StoreFile::new()
        };

        Ok(Self {
            path,
            state,
            _lock: lock,
        })
    }

    /// The store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> RepositoryResult<()> {
        let content =
            serde_json::to_string_pretty(&self.state).map_err(|e| RepositoryError::Io(e.to_string()))?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
        fs::write(tmp.path(), content).map_err(io_err)?;
        tmp.persist(&self.path)
            .map_err(|e| RepositoryError::Io(e.to_string()))?;
        Ok(())
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scenarios.json".to_string());
    name.push_str(".lock");
    path.with_file_name(name)
}

fn io_err(err: std::io::Error) -> RepositoryError {
    RepositoryError::Io(err.to_string())
}

impl ScenarioRepository for JsonScenarioRepository {
    fn allocate_id(&mut self) -> RepositoryResult<String> {
        self.state.next_id += 1;
        Ok(format!("scn-{}", self.state.next_id))
    }

    fn get(&self, id: &str) -> RepositoryResult<Option<Scenario>> {
        Ok(self
            .state
            .scenarios
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    fn list(&self) -> RepositoryResult<Vec<Scenario>> {
        Ok(self.state.scenarios.clone())
    }

    fn commit(&mut self, scenarios: Vec<Scenario>) -> RepositoryResult<()> {
        for scenario in scenarios {
            match self
                .state
                .scenarios
                .iter_mut()
                .find(|s| s.id() == scenario.id())
            {
                Some(slot) => *slot = scenario,
                None => self.state.scenarios.push(scenario),
            }
        }
        self.persist()
    }
}
