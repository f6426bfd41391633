//! Application Layer
//!
//! Use cases that orchestrate domain types over the ports:
//! - `ScenarioStore` - the scenario lifecycle (save/apply/archive/views)
//! - `RecalculationScheduler` - debounced, deduplicated recomputation

mod scheduler;
mod store;

pub use scheduler::{Recalc, RecalculationScheduler, DEFAULT_DEBOUNCE_MS};
pub use store::ScenarioStore;
