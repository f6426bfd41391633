//! Scenario comparison service
//!
//! Aligns several scenarios into one grade-by-grade table for
//! side-by-side review. The current scenario is included by default so
//! a draft is always reviewed against what it would replace.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{Band, RateInputModel, Scenario};
use crate::error::{CompaError, CompaResult};

/// Aligned comparison across scenarios.
///
/// Wire shape is `{scenarioIds, perGrade}` keyed by grade name then
/// scenario id. The re-derived input rates per scenario are carried
/// in-memory for rendering but are not part of the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Compared scenario ids, current first, then request order
    scenario_ids: Vec<String>,
    /// grade → scenario id → band
    per_grade: BTreeMap<String, BTreeMap<String, Band>>,
    /// scenario id → the inputs its bands were computed from
    #[serde(skip)]
    inputs: BTreeMap<String, RateInputModel>,
}

impl ComparisonResult {
    /// Compared scenario ids in presentation order.
    pub fn scenario_ids(&self) -> &[String] {
        &self.scenario_ids
    }

    /// The aligned band table: grade → scenario id → band.
    pub fn per_grade(&self) -> &BTreeMap<String, BTreeMap<String, Band>> {
        &self.per_grade
    }

    /// The band one scenario computed for one grade, if any.
    pub fn band(&self, grade: &str, scenario_id: &str) -> Option<&Band> {
        self.per_grade.get(grade).and_then(|row| row.get(scenario_id))
    }

    /// The input rates a compared scenario was computed from.
    pub fn inputs_for(&self, scenario_id: &str) -> Option<&RateInputModel> {
        self.inputs.get(scenario_id)
    }
}

/// Builds aligned comparisons over a set of stored scenarios.
pub struct ComparisonService;

impl ComparisonService {
    /// Compare the scenarios named by `requested_ids` against each other,
    /// drawing from `universe` (every stored scenario).
    ///
    /// Requested ids are deduplicated, order preserved. With
    /// `always_include_current` the current scenario is prepended,
    /// and its absence from the store is a validation error, because a
    /// comparison that claims to include "current" must not silently
    /// drop it.
    pub fn compare(
        universe: &[Scenario],
        requested_ids: &[String],
        always_include_current: bool,
    ) -> CompaResult<ComparisonResult> {
        let mut selected: Vec<&Scenario> = Vec::new();

        if always_include_current {
            let mut currents = universe.iter().filter(|s| s.status().is_current());
            let current = currents.next().ok_or_else(|| {
                CompaError::validation(
                    "cannot include the current scenario: no current scenario exists yet",
                )
            })?;
            if currents.next().is_some() {
                return Err(CompaError::conflict(
                    "store holds more than one current scenario",
                ));
            }
            selected.push(current);
        }

        for id in requested_ids {
            if selected.iter().any(|s| s.id() == id) {
                continue;
            }
            let scenario = universe
                .iter()
                .find(|s| s.id() == id)
                .ok_or_else(|| CompaError::ScenarioNotFound { id: id.clone() })?;
            selected.push(scenario);
        }

        if selected.is_empty() {
            return Err(CompaError::validation(
                "nothing to compare: no scenario ids given",
            ));
        }

        let scenario_ids: Vec<String> = selected.iter().map(|s| s.id().to_string()).collect();

        let mut per_grade: BTreeMap<String, BTreeMap<String, Band>> = BTreeMap::new();
        let mut inputs = BTreeMap::new();
        for scenario in &selected {
            for (grade, band) in scenario.band_snapshot().iter() {
                per_grade
                    .entry(grade.to_string())
                    .or_default()
                    .insert(scenario.id().to_string(), *band);
            }
            inputs.insert(
                scenario.id().to_string(),
                scenario.input_snapshot().clone(),
            );
        }

        Ok(ComparisonResult {
            scenario_ids,
            per_grade,
            inputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BandTable;
    use crate::domain::services::{BandCalculator, Computation};
    use crate::domain::value_objects::{GradeOrder, IntervalKey};
    use chrono::Utc;

    fn model(base: f64) -> RateInputModel {
        let order = GradeOrder::new(vec!["Manager".to_string(), "Specialist".to_string()]).unwrap();
        let mut model = RateInputModel::new(order);
        model.set_base_value(Some(base)).unwrap();
        model.set_vertical_rate("Manager", Some(20.0)).unwrap();
        model
            .set_horizontal_interval(IntervalKey::MToUq, Some(10.0))
            .unwrap();
        model
    }

    fn bands(model: &RateInputModel) -> BandTable {
        match BandCalculator::compute(model) {
            Computation::Ready(table) => table,
            other => panic!("expected bands, got {:?}", other),
        }
    }

    fn scenario(id: &str, base: f64, current: bool) -> Scenario {
        let input = model(base);
        let table = bands(&input);
        let mut s = Scenario::new_draft(
            id.to_string(),
            format!("scenario {}", id),
            None,
            Utc::now(),
            input,
            table,
        );
        if current {
            s.promote(Utc::now());
        }
        s
    }

    #[test]
    fn current_is_prepended_and_aligned() {
        let universe = vec![scenario("scn-1", 1000.0, true), scenario("scn-2", 1100.0, false)];
        let result =
            ComparisonService::compare(&universe, &["scn-2".to_string()], true).unwrap();

        assert_eq!(result.scenario_ids(), &["scn-1", "scn-2"]);
        assert_eq!(result.band("Specialist", "scn-1").unwrap().m(), 1000.0);
        assert_eq!(result.band("Specialist", "scn-2").unwrap().m(), 1100.0);
        assert_eq!(result.band("Manager", "scn-2").unwrap().m(), 1320.0);
    }

    #[test]
    fn requested_ids_are_deduplicated() {
        let universe = vec![scenario("scn-1", 1000.0, true), scenario("scn-2", 1100.0, false)];
        let ids = vec![
            "scn-2".to_string(),
            "scn-1".to_string(),
            "scn-2".to_string(),
        ];
        let result = ComparisonService::compare(&universe, &ids, true).unwrap();
        assert_eq!(result.scenario_ids(), &["scn-1", "scn-2"]);
    }

    #[test]
    fn missing_current_is_a_validation_error() {
        let universe = vec![scenario("scn-1", 1000.0, false)];
        let err =
            ComparisonService::compare(&universe, &["scn-1".to_string()], true).unwrap_err();
        assert!(matches!(err, CompaError::Validation { .. }));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let universe = vec![scenario("scn-1", 1000.0, true)];
        let err =
            ComparisonService::compare(&universe, &["scn-9".to_string()], true).unwrap_err();
        assert!(matches!(err, CompaError::ScenarioNotFound { .. }));
    }

    #[test]
    fn empty_selection_is_a_validation_error() {
        let universe = vec![scenario("scn-1", 1000.0, false)];
        let err = ComparisonService::compare(&universe, &[], false).unwrap_err();
        assert!(matches!(err, CompaError::Validation { .. }));
    }

    #[test]
    fn two_currents_surface_as_conflict() {
        let universe = vec![scenario("scn-1", 1000.0, true), scenario("scn-2", 1100.0, true)];
        let err = ComparisonService::compare(&universe, &[], true).unwrap_err();
        assert!(matches!(err, CompaError::Conflict { .. }));
    }

    #[test]
    fn inputs_are_rederived_per_scenario() {
        let universe = vec![scenario("scn-1", 1000.0, true)];
        let result = ComparisonService::compare(&universe, &[], true).unwrap();
        let inputs = result.inputs_for("scn-1").unwrap();
        assert_eq!(inputs.base_value(), Some(1000.0));
        assert_eq!(inputs.vertical_rate("Manager"), Some(20.0));
    }

    #[test]
    fn comparison_without_current_compares_requested_only() {
        let universe = vec![scenario("scn-1", 1000.0, false), scenario("scn-2", 1100.0, false)];
        let ids = vec!["scn-1".to_string(), "scn-2".to_string()];
        let result = ComparisonService::compare(&universe, &ids, false).unwrap();
        assert_eq!(result.scenario_ids(), &["scn-1", "scn-2"]);
    }

    #[test]
    fn wire_shape_keys_grade_then_scenario() {
        let universe = vec![scenario("scn-1", 1000.0, true)];
        let result = ComparisonService::compare(&universe, &[], true).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["scenarioIds"][0], "scn-1");
        assert!(json["perGrade"]["Specialist"]["scn-1"]["M"].is_number());
        assert!(json.get("inputs").is_none());
    }
}
