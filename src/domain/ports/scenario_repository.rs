//! ScenarioRepository port - abstraction for scenario persistence
//!
//! This trait lets the store run lifecycle transitions without knowing
//! about storage format details. Implementations are plain record
//! keepers: every lifecycle rule (draft-only archiving, the singleton
//! current scenario) is enforced by `ScenarioStore` above this port.

use crate::domain::entities::Scenario;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository operation errors
#[derive(Debug)]
pub enum RepositoryError {
    /// Stored data could not be read or written
    Io(String),
    /// Stored data exists but does not parse
    Corrupt(String),
    /// Stored data was written by an incompatible version
    VersionMismatch { found: u32, expected: u32 },
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::Io(msg) => write!(f, "I/O error: {}", msg),
            RepositoryError::Corrupt(msg) => write!(f, "corrupt scenario store: {}", msg),
            RepositoryError::VersionMismatch { found, expected } => write!(
                f,
                "scenario store format incompatible: found version {}, expected {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<RepositoryError> for crate::error::CompaError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Io(msg) => {
                crate::error::CompaError::Io(std::io::Error::other(msg))
            }
            other => crate::error::CompaError::validation(other.to_string()),
        }
    }
}

/// Abstract repository for scenario persistence
///
/// A lifecycle transition writes one or two records (apply demotes the
/// prior current and promotes the target); `commit` must persist them
/// as a single atomic change so a crash can never leave the demote
/// half-applied.
pub trait ScenarioRepository {
    /// Allocate the next scenario id (monotonic per store).
    fn allocate_id(&mut self) -> RepositoryResult<String>;

    /// Fetch one scenario by id.
    fn get(&self, id: &str) -> RepositoryResult<Option<Scenario>>;

    /// All stored scenarios, in id-allocation order.
    fn list(&self) -> RepositoryResult<Vec<Scenario>>;

    /// Atomically upsert the given scenarios.
    fn commit(&mut self, scenarios: Vec<Scenario>) -> RepositoryResult<()>;
}
