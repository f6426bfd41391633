//! Repository implementations of the persistence ports.

mod json_scenario;
mod memory;

pub use json_scenario::JsonScenarioRepository;
pub use memory::InMemoryScenarioRepository;
