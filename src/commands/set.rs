//! Set and bands command handlers
//!
//! Every edit revalidates through the core setters, persists the
//! worksheet, and previews the resulting bands (or names the reason
//! they cannot be computed yet).

use anyhow::Result;

use compa::error::CompaError;
use compa::infrastructure::worksheet;
use compa::presentation::{events, report};
use compa::{BandCalculator, Computation, IntervalKey, RateInputModel};

use super::{emit, Context};

pub fn cmd_set_base(ctx: &Context, value: Option<f64>) -> Result<()> {
    edit(ctx, |model| Ok(model.set_base_value(value)?))
}

pub fn cmd_set_vertical(ctx: &Context, grade: &str, rate: Option<f64>) -> Result<()> {
    edit(ctx, |model| Ok(model.set_vertical_rate(grade, rate)?))
}

pub fn cmd_set_horizontal(ctx: &Context, key: &str, rate: Option<f64>) -> Result<()> {
    let key = IntervalKey::parse(key).ok_or_else(|| {
        CompaError::validation(format!(
            "unknown interval '{}': expected one of LD_to_LQ, LQ_to_M, M_to_UQ, UQ_to_UD",
            key
        ))
    })?;
    edit(ctx, |model| Ok(model.set_horizontal_interval(key, rate)?))
}

/// Show bands for the working inputs without editing anything.
pub fn cmd_bands(ctx: &Context) -> Result<()> {
    let model = worksheet::load_worksheet(&ctx.worksheet_path())?;
    preview(ctx, "bands", &model)
}

fn edit(ctx: &Context, apply: impl FnOnce(&mut RateInputModel) -> Result<()>) -> Result<()> {
    let path = ctx.worksheet_path();
    let mut model = worksheet::load_worksheet(&path)?;
    apply(&mut model)?;
    worksheet::save_worksheet(&path, &model)?;
    preview(ctx, "set", &model)
}

fn preview(ctx: &Context, command: &str, model: &RateInputModel) -> Result<()> {
    match BandCalculator::compute(model) {
        Computation::Ready(bands) => {
            if ctx.json() {
                emit(&events::data_event(
                    command,
                    serde_json::json!({
                        "computable": true,
                        "bands": bands,
                    }),
                ));
            } else {
                print!("{}", report::render_band_table(&bands, model.grade_order()));
            }
        }
        Computation::NotComputable(reason) => {
            if ctx.json() {
                emit(&events::data_event(
                    command,
                    serde_json::json!({
                        "computable": false,
                        "reason": reason.to_string(),
                    }),
                ));
            } else {
                println!("bands not computable yet: {}", reason);
            }
        }
    }
    Ok(())
}
