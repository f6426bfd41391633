//! Compa - compensation grading engine
//!
//! Compa turns a small set of human-entered rate inputs (one base
//! value, one vertical step per grade, four shared horizontal spreads)
//! into a full salary-band table per job grade, and manages that table
//! through a versioned lifecycle (draft → current → archived) with
//! multi-version comparison.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Recalc, RecalculationScheduler, ScenarioStore, DEFAULT_DEBOUNCE_MS};
pub use config::Config;
pub use domain::entities::{Band, BandTable, RateInputModel, Scenario};
pub use domain::ports::{Clock, ScenarioRepository, SystemClock};
pub use domain::services::{
    BandCalculator, ComparisonResult, ComparisonService, Computation, NotComputable,
};
pub use domain::value_objects::{
    GradeOrder, InputFingerprint, IntervalKey, IntervalSet, ScenarioStatus,
};
pub use error::{CompaError, CompaResult};
pub use infrastructure::repositories::{InMemoryScenarioRepository, JsonScenarioRepository};
