//! Lifecycle tests against the durable JSON-backed store.
//!
//! The in-memory unit tests cover the transition rules; these verify
//! the same rules hold across process-restart boundaries (reopening
//! the store file).

mod common;

use common::{computed, model_with_base, worked_model, TestEnv};
use compa::{CompaError, ScenarioStatus};

#[test]
fn fresh_store_reports_no_current() {
    let env = TestEnv::new();
    let store = env.open_store();
    assert!(store.current().unwrap().is_none());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn saved_draft_survives_reopen() {
    let env = TestEnv::new();
    let id = {
        let store = env.open_store();
        let model = worked_model();
        let bands = computed(&model);
        let draft = store
            .save_draft(Some("FY26 proposal".to_string()), None, &model, &bands)
            .unwrap();
        draft.id().to_string()
    };

    let store = env.open_store();
    let reloaded = store.get(&id).unwrap();
    assert_eq!(reloaded.name(), "FY26 proposal");
    assert_eq!(reloaded.status(), ScenarioStatus::Draft);
    assert_eq!(reloaded.input_snapshot(), &worked_model());
    assert_eq!(reloaded.band_snapshot(), &computed(&worked_model()));
}

#[test]
fn apply_and_demotion_survive_reopen() {
    let env = TestEnv::new();
    let (first, second) = {
        let store = env.open_store();
        let a = {
            let model = model_with_base(1000.0);
            let bands = computed(&model);
            store.save_draft(None, None, &model, &bands).unwrap()
        };
        let b = {
            let model = model_with_base(1100.0);
            let bands = computed(&model);
            store.save_draft(None, None, &model, &bands).unwrap()
        };
        store.apply(a.id()).unwrap();
        store.apply(b.id()).unwrap();
        (a.id().to_string(), b.id().to_string())
    };

    let store = env.open_store();
    assert_eq!(store.current().unwrap().unwrap().id(), second);
    assert_eq!(
        store.get(&first).unwrap().status(),
        ScenarioStatus::Archived
    );
    assert_eq!(
        store.list_by_status(ScenarioStatus::Current).unwrap().len(),
        1
    );
}

#[test]
fn singleton_current_invariant_across_many_applies() {
    let env = TestEnv::new();
    let store = env.open_store();

    let ids: Vec<String> = (0..5)
        .map(|i| {
            let model = model_with_base(1000.0 + 50.0 * i as f64);
            let bands = computed(&model);
            store
                .save_draft(None, None, &model, &bands)
                .unwrap()
                .id()
                .to_string()
        })
        .collect();

    for id in &ids {
        store.apply(id).unwrap();
        let currents = store.list_by_status(ScenarioStatus::Current).unwrap();
        assert_eq!(currents.len(), 1);
        assert_eq!(currents[0].id(), id);
    }
}

#[test]
fn archived_scenarios_are_terminal_across_reopen() {
    let env = TestEnv::new();
    let id = {
        let store = env.open_store();
        let model = worked_model();
        let bands = computed(&model);
        let draft = store.save_draft(None, None, &model, &bands).unwrap();
        store.archive(draft.id()).unwrap();
        draft.id().to_string()
    };

    let store = env.open_store();
    let err = store.apply(&id).unwrap_err();
    assert!(matches!(err, CompaError::Conflict { .. }));
}

#[test]
fn current_cannot_be_archived_directly() {
    let env = TestEnv::new();
    let store = env.open_store();
    let model = worked_model();
    let bands = computed(&model);
    let draft = store.save_draft(None, None, &model, &bands).unwrap();
    store.apply(draft.id()).unwrap();

    let err = store.archive(draft.id()).unwrap_err();
    assert!(matches!(err, CompaError::Conflict { .. }));
    assert_eq!(store.current().unwrap().unwrap().id(), draft.id());
}

#[test]
fn ids_continue_after_reopen() {
    let env = TestEnv::new();
    let first = {
        let store = env.open_store();
        let model = worked_model();
        let bands = computed(&model);
        store
            .save_draft(None, None, &model, &bands)
            .unwrap()
            .id()
            .to_string()
    };

    let store = env.open_store();
    let model = worked_model();
    let bands = computed(&model);
    let second = store.save_draft(None, None, &model, &bands).unwrap();
    assert_ne!(first, second.id());
}

#[test]
fn hand_edited_double_current_is_detected_not_swallowed() {
    let env = TestEnv::new();
    {
        let store = env.open_store();
        let model = worked_model();
        let bands = computed(&model);
        let first = store.save_draft(None, None, &model, &bands).unwrap();
        store.save_draft(None, None, &model, &bands).unwrap();
        store.apply(first.id()).unwrap();
    }

    // Corrupt the invariant the way only out-of-band edits can: flip
    // the remaining draft to a second CURRENT in the store file.
    let content = std::fs::read_to_string(env.store_path()).unwrap();
    let corrupted = content.replacen("\"DRAFT\"", "\"CURRENT\"", 1);
    assert_ne!(corrupted, content, "expected one draft in the store file");
    std::fs::write(env.store_path(), corrupted).unwrap();

    let store = env.open_store();
    let err = store.current().unwrap_err();
    assert!(matches!(err, CompaError::Conflict { .. }));
}

#[test]
fn save_draft_requires_computed_bands() {
    let env = TestEnv::new();
    let store = env.open_store();
    let model = worked_model();
    let err = store
        .save_draft(None, None, &model, &compa::BandTable::new())
        .unwrap_err();
    assert!(matches!(err, CompaError::Validation { .. }));
    assert!(store.list().unwrap().is_empty());
}
