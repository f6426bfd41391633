//! Init command handler
//!
//! Writes the config template on first run, then bootstraps the
//! worksheet: from the current scenario when one exists, blank
//! otherwise.

use anyhow::{bail, Result};

use compa::infrastructure::worksheet;
use compa::presentation::events;
use compa::RateInputModel;

use super::{emit, Context};

/// Template written when no compa.toml exists yet.
const CONFIG_TEMPLATE: &str = r#"# Compa configuration
#
# Grade names, highest first. The LAST entry is the base grade the
# base value anchors.

[grades]
order = ["Director", "Manager", "Specialist"]

[store]
path = ".compa/scenarios.json"
worksheet = ".compa/worksheet.json"

[recalc]
debounce_ms = 300
"#;

pub fn cmd_init(ctx: &Context, force: bool) -> Result<()> {
    let config_path = ctx.config_path();
    if !config_path.exists() {
        std::fs::write(&config_path, CONFIG_TEMPLATE)?;
        if ctx.json() {
            emit(&events::data_event(
                "init",
                serde_json::json!({
                    "wrote": config_path.display().to_string(),
                    "note": "edit the grade order, then run `compa init` again",
                }),
            ));
        } else {
            println!("✓ wrote {}", config_path.display());
            println!("  edit the grade order, then run `compa init` again");
        }
        return Ok(());
    }

    let order = ctx.config().grade_order()?;

    let worksheet_path = ctx.worksheet_path();
    if worksheet_path.exists() && !force {
        bail!(
            "worksheet {} already exists (use --force to reset it)",
            worksheet_path.display()
        );
    }

    // Bootstrap from the current scenario when the store has one, so
    // the working model mirrors the active structure.
    let store = ctx.open_store()?;
    let model = match store.current()? {
        Some(current) => current.input_snapshot().clone(),
        None => RateInputModel::new(order),
    };
    worksheet::save_worksheet(&worksheet_path, &model)?;

    if ctx.json() {
        emit(&events::data_event(
            "init",
            serde_json::json!({
                "worksheet": worksheet_path.display().to_string(),
                "from_current": model.base_value().is_some(),
            }),
        ));
    } else {
        println!("✓ worksheet ready at {}", worksheet_path.display());
    }
    Ok(())
}
