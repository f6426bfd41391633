//! Common test utilities for compa integration tests.

use tempfile::TempDir;

use compa::{
    BandCalculator, BandTable, Computation, GradeOrder, IntervalKey, JsonScenarioRepository,
    RateInputModel, ScenarioStore,
};

/// Isolated test environment with a temp directory for the store file.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn store_path(&self) -> std::path::PathBuf {
        self.dir.path().join(".compa").join("scenarios.json")
    }

    /// Open the durable store (holds the store lock until dropped).
    pub fn open_store(&self) -> ScenarioStore<JsonScenarioRepository> {
        let repo = JsonScenarioRepository::open(self.store_path()).expect("open store");
        ScenarioStore::new(repo)
    }
}

/// The reference grade order: Director / Manager / Specialist (base).
pub fn sample_order() -> GradeOrder {
    GradeOrder::new(vec![
        "Director".to_string(),
        "Manager".to_string(),
        "Specialist".to_string(),
    ])
    .expect("valid order")
}

/// The worked-example model: base 1000, verticals 20/15, horizontals 10.
pub fn worked_model() -> RateInputModel {
    model_with_base(1000.0)
}

/// Worked-example rates over an arbitrary base value.
pub fn model_with_base(base: f64) -> RateInputModel {
    let mut model = RateInputModel::new(sample_order());
    model.set_base_value(Some(base)).expect("valid base");
    model
        .set_vertical_rate("Manager", Some(20.0))
        .expect("known grade");
    model
        .set_vertical_rate("Director", Some(15.0))
        .expect("known grade");
    for key in IntervalKey::ALL {
        model
            .set_horizontal_interval(key, Some(10.0))
            .expect("valid rate");
    }
    model
}

/// Compute bands, panicking on a not-computable model.
pub fn computed(model: &RateInputModel) -> BandTable {
    match BandCalculator::compute(model) {
        Computation::Ready(table) => table,
        other => panic!("expected bands, got {:?}", other),
    }
}
