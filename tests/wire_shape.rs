//! Wire-shape contract tests: the serialized forms other systems
//! consume must stay stable.

mod common;

use common::{computed, worked_model, TestEnv};

#[test]
fn scenario_record_wire_shape() {
    let env = TestEnv::new();
    let store = env.open_store();

    let model = worked_model();
    let bands = computed(&model);
    let draft = store
        .save_draft(
            Some("FY26 proposal".to_string()),
            Some("annual adjustment".to_string()),
            &model,
            &bands,
        )
        .unwrap();
    let applied = store.apply(draft.id()).unwrap();

    let json = serde_json::to_value(&applied).unwrap();

    assert_eq!(json["id"], "scn-1");
    assert_eq!(json["name"], "FY26 proposal");
    assert_eq!(json["description"], "annual adjustment");
    assert_eq!(json["status"], "CURRENT");
    assert!(json["createdAt"].is_string());
    assert!(json["appliedAt"].is_string());

    // input snapshot: grade order, base, rates, shared intervals
    let input = &json["inputSnapshot"];
    assert_eq!(input["gradeOrder"][2], "Specialist");
    assert_eq!(input["baseValue"], 1000.0);
    assert_eq!(input["verticalRates"]["Manager"], 20.0);
    assert_eq!(input["horizontalIntervals"]["LQ_to_M"], 10.0);

    // band snapshot keyed by grade then point name
    let bands = &json["bandSnapshot"];
    assert_eq!(bands["Specialist"]["M"], 1000.0);
    assert_eq!(bands["Specialist"]["LQ"], 909.09);
    assert_eq!(bands["Specialist"]["LD"], 826.45);
    assert_eq!(bands["Director"]["UD"], 1669.8);
}

#[test]
fn draft_omits_applied_at() {
    let env = TestEnv::new();
    let store = env.open_store();

    let model = worked_model();
    let bands = computed(&model);
    let draft = store.save_draft(None, None, &model, &bands).unwrap();

    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["status"], "DRAFT");
    assert!(json.get("appliedAt").is_none());
    assert!(json.get("description").is_none());
}

#[test]
fn stored_record_deserializes_back() {
    let env = TestEnv::new();
    let store = env.open_store();

    let model = worked_model();
    let bands = computed(&model);
    let draft = store.save_draft(None, None, &model, &bands).unwrap();

    let json = serde_json::to_string(&draft).unwrap();
    let back: compa::Scenario = serde_json::from_str(&json).unwrap();
    assert_eq!(back, draft);
}
