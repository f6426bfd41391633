//! Configuration for the grading engine
//!
//! `compa.toml` supplies the bootstrap grade order, the store and
//! worksheet paths, and the recalculation policy. Unknown keys warn
//! instead of failing, and `COMPA_*` environment variables override
//! file values.

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{Config, GradesConfig, RecalcConfig, StoreConfig, CONFIG_FILE};
