//! Command handlers for the compa CLI
//!
//! Handlers stay thin: parse-adjacent glue that loads the worksheet and
//! store, calls the engine, and prints through the presentation layer.

pub mod compare;
pub mod init;
pub mod scenario;
pub mod set;

use std::path::{Path, PathBuf};

use anyhow::Result;

use compa::config::Config;
use compa::error::CompaError;
use compa::{JsonScenarioRepository, ScenarioStore};

/// Shared command context: resolved config, project root, output mode.
pub struct Context {
    config: Config,
    root: PathBuf,
    json: bool,
}

impl Context {
    /// Bundle the resolved settings for the handlers.
    pub fn new(config: Config, root: PathBuf, json: bool) -> Self {
        Self { config, root, json }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn json(&self) -> bool {
        self.json
    }

    /// Store file path, resolved against the project root.
    pub fn store_path(&self) -> PathBuf {
        resolve(&self.root, &self.config.store.path)
    }

    /// Worksheet file path, resolved against the project root.
    pub fn worksheet_path(&self) -> PathBuf {
        resolve(&self.root, &self.config.store.worksheet)
    }

    /// Config file path in the project root.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(compa::config::CONFIG_FILE)
    }

    /// Open the durable scenario store (takes the store lock).
    pub fn open_store(&self) -> Result<ScenarioStore<JsonScenarioRepository>> {
        let repo = JsonScenarioRepository::open(self.store_path()).map_err(CompaError::from)?;
        Ok(ScenarioStore::new(repo))
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Print an NDJSON event line.
pub(crate) fn emit(event: &serde_json::Value) {
    println!("{}", compa::presentation::events::to_line(event));
}
