//! Plain-text rendering of bands, scenarios and comparisons
//!
//! Render functions return strings so they are directly testable; the
//! CLI just prints them.

use crate::domain::entities::{Band, BandTable, RateInputModel, Scenario};
use crate::domain::services::ComparisonResult;
use crate::domain::value_objects::{GradeOrder, IntervalKey};

const POINT_HEADERS: [&str; 5] = ["LD", "LQ", "M", "UQ", "UD"];

fn band_cells(band: &Band) -> [f64; 5] {
    [band.ld(), band.lq(), band.m(), band.uq(), band.ud()]
}

/// Render a band table, one row per grade in grade order.
pub fn render_band_table(table: &BandTable, order: &GradeOrder) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<14}", "Grade"));
    for header in POINT_HEADERS {
        out.push_str(&format!("{:>12}", header));
    }
    out.push('\n');

    for grade in order.names() {
        out.push_str(&format!("{:<14}", grade));
        match table.get(grade) {
            Some(band) => {
                for value in band_cells(band) {
                    out.push_str(&format!("{:>12.2}", value));
                }
            }
            None => {
                for _ in POINT_HEADERS {
                    out.push_str(&format!("{:>12}", "-"));
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Render the working model's entered rates.
pub fn render_inputs(model: &RateInputModel) -> String {
    let mut out = String::new();
    match model.base_value() {
        Some(v) => out.push_str(&format!("base value: {:.2}\n", v)),
        None => out.push_str("base value: (not set)\n"),
    }

    out.push_str("vertical rates:\n");
    for grade in model.grade_order().names() {
        match model.vertical_rate(grade) {
            Some(rate) => out.push_str(&format!("  {:<14}{:>7.2}%\n", grade, rate)),
            None => out.push_str(&format!("  {:<14}{:>8}\n", grade, "-")),
        }
    }

    out.push_str("horizontal intervals:\n");
    for key in IntervalKey::ALL {
        match model.intervals().get(key) {
            Some(rate) => out.push_str(&format!("  {:<14}{:>7.2}%\n", key.as_str(), rate)),
            None => out.push_str(&format!("  {:<14}{:>8}\n", key.as_str(), "-")),
        }
    }
    out
}

/// Render one scenario: header line, inputs, bands.
pub fn render_scenario(scenario: &Scenario) -> String {
    let mut out = format!(
        "{} [{}] {}\n",
        scenario.id(),
        scenario.status(),
        scenario.name()
    );
    if let Some(description) = scenario.description() {
        out.push_str(&format!("  {}\n", description));
    }
    out.push_str(&format!(
        "created {}",
        scenario.created_at().format("%Y-%m-%d %H:%M")
    ));
    if let Some(applied) = scenario.applied_at() {
        out.push_str(&format!(", applied {}", applied.format("%Y-%m-%d %H:%M")));
    }
    out.push_str("\n\n");
    out.push_str(&render_inputs(scenario.input_snapshot()));
    out.push('\n');
    out.push_str(&render_band_table(
        scenario.band_snapshot(),
        scenario.input_snapshot().grade_order(),
    ));
    out
}

/// Render the scenario list, one row each.
pub fn render_scenario_list(scenarios: &[Scenario]) -> String {
    if scenarios.is_empty() {
        return "no scenarios\n".to_string();
    }
    let mut out = format!(
        "{:<10}{:<10}{:<18}{:<30}\n",
        "id", "status", "created", "name"
    );
    for scenario in scenarios {
        out.push_str(&format!(
            "{:<10}{:<10}{:<18}{:<30}\n",
            scenario.id(),
            scenario.status().to_string(),
            scenario.created_at().format("%Y-%m-%d %H:%M").to_string(),
            scenario.name()
        ));
    }
    out
}

/// Render an aligned comparison, one block per grade in grade order.
pub fn render_comparison(result: &ComparisonResult) -> String {
    let mut out = String::new();

    // Display order follows the first compared scenario's grade order;
    // grades known only to other scenarios append after it.
    let mut grades: Vec<String> = result
        .scenario_ids()
        .first()
        .and_then(|id| result.inputs_for(id))
        .map(|model| model.grade_order().names().to_vec())
        .unwrap_or_default();
    for grade in result.per_grade().keys() {
        if !grades.contains(grade) {
            grades.push(grade.clone());
        }
    }

    for grade in &grades {
        let Some(row) = result.per_grade().get(grade) else {
            continue;
        };
        out.push_str(grade);
        out.push('\n');
        out.push_str(&format!("  {:<12}", "scenario"));
        for header in POINT_HEADERS {
            out.push_str(&format!("{:>12}", header));
        }
        out.push('\n');
        for id in result.scenario_ids() {
            match row.get(id) {
                Some(band) => {
                    out.push_str(&format!("  {:<12}", id));
                    for value in band_cells(band) {
                        out.push_str(&format!("{:>12.2}", value));
                    }
                }
                None => {
                    out.push_str(&format!("  {:<12}", id));
                    for _ in POINT_HEADERS {
                        out.push_str(&format!("{:>12}", "-"));
                    }
                }
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
