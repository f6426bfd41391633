//! Compare command handler

use anyhow::Result;

use compa::presentation::{events, report};

use super::{emit, Context};

pub fn cmd_compare(ctx: &Context, ids: &[String], include_current: bool) -> Result<()> {
    let store = ctx.open_store()?;
    let result = store.compare(ids, include_current)?;

    if ctx.json() {
        emit(&events::data_event(
            "compare",
            serde_json::to_value(&result)?,
        ));
    } else {
        print!("{}", report::render_comparison(&result));
    }
    Ok(())
}
