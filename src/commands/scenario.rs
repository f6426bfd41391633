//! Scenario lifecycle command handlers: save, apply, archive, list,
//! show, current.

use anyhow::{anyhow, Result};

use compa::infrastructure::worksheet;
use compa::presentation::{events, report};
use compa::{BandCalculator, CompaError, Computation, ScenarioStatus};

use super::{emit, Context};

pub fn cmd_save(ctx: &Context, name: Option<String>, description: Option<String>) -> Result<()> {
    let model = worksheet::load_worksheet(&ctx.worksheet_path())?;
    let bands = match BandCalculator::compute(&model) {
        Computation::Ready(bands) => bands,
        Computation::NotComputable(reason) => {
            return Err(CompaError::validation(format!("cannot save scenario: {}", reason)).into())
        }
    };

    let store = ctx.open_store()?;
    let scenario = store.save_draft(name, description, &model, &bands)?;

    if ctx.json() {
        emit(&events::data_event(
            "save",
            serde_json::json!({ "scenario": scenario }),
        ));
    } else {
        println!("✓ saved draft {} '{}'", scenario.id(), scenario.name());
    }
    Ok(())
}

pub fn cmd_apply(ctx: &Context, id: &str) -> Result<()> {
    let store = ctx.open_store()?;
    let applied = store.apply(id)?;

    // The working model mirrors the newly current scenario from here on.
    worksheet::save_worksheet(&ctx.worksheet_path(), applied.input_snapshot())?;

    if ctx.json() {
        emit(&events::data_event(
            "apply",
            serde_json::json!({ "scenario": applied }),
        ));
    } else {
        println!("✓ scenario {} '{}' is now current", applied.id(), applied.name());
    }
    Ok(())
}

pub fn cmd_archive(ctx: &Context, id: &str) -> Result<()> {
    let store = ctx.open_store()?;
    let archived = store.archive(id)?;

    if ctx.json() {
        emit(&events::data_event(
            "archive",
            serde_json::json!({ "scenario": archived }),
        ));
    } else {
        println!("✓ archived {} '{}'", archived.id(), archived.name());
    }
    Ok(())
}

pub fn cmd_list(ctx: &Context, status: Option<&str>) -> Result<()> {
    let store = ctx.open_store()?;
    let scenarios = match status {
        Some(raw) => {
            let status = ScenarioStatus::parse(raw).ok_or_else(|| {
                anyhow!("unknown status '{}': expected draft, current or archived", raw)
            })?;
            store.list_by_status(status)?
        }
        None => store.list()?,
    };

    if ctx.json() {
        emit(&events::data_event(
            "list",
            serde_json::json!({ "scenarios": scenarios }),
        ));
    } else {
        print!("{}", report::render_scenario_list(&scenarios));
    }
    Ok(())
}

pub fn cmd_show(ctx: &Context, id: &str) -> Result<()> {
    let store = ctx.open_store()?;
    let scenario = store.get(id)?;

    if ctx.json() {
        emit(&events::data_event(
            "show",
            serde_json::json!({ "scenario": scenario }),
        ));
    } else {
        print!("{}", report::render_scenario(&scenario));
    }
    Ok(())
}

pub fn cmd_current(ctx: &Context, structure_only: bool) -> Result<()> {
    let store = ctx.open_store()?;

    let Some(scenario) = store.current_scenario()? else {
        print_no_current(ctx);
        return Ok(());
    };

    if structure_only {
        // Structure view: the same stored scenario, projected to bands.
        let bands = scenario.band_snapshot();
        if ctx.json() {
            emit(&events::data_event(
                "current",
                serde_json::json!({ "bands": bands }),
            ));
        } else {
            print!(
                "{}",
                report::render_band_table(bands, scenario.input_snapshot().grade_order())
            );
        }
        return Ok(());
    }

    if ctx.json() {
        emit(&events::data_event(
            "current",
            serde_json::json!({ "scenario": scenario }),
        ));
    } else {
        print!("{}", report::render_scenario(&scenario));
    }
    Ok(())
}

fn print_no_current(ctx: &Context) {
    if ctx.json() {
        emit(&events::data_event(
            "current",
            serde_json::json!({ "scenario": null }),
        ));
    } else {
        println!("no current scenario configured yet");
    }
}
